use std::collections::HashMap;

use crate::model::{ProductSales, SellerStat};

/// Sort by profit, highest first. Stable: equal profits keep input order.
pub fn rank_by_profit(stats: &mut [SellerStat]) {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));
}

/// Best sellers by quantity, highest first, ties by sku ascending.
pub fn top_products(products_sold: &HashMap<String, u64>, limit: usize) -> Vec<ProductSales> {
    let mut sold: Vec<ProductSales> = products_sold
        .iter()
        .map(|(sku, &quantity)| ProductSales { sku: sku.clone(), quantity })
        .collect();

    sold.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
    sold.truncate(limit);
    sold
}
