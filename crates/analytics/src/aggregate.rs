use std::collections::HashMap;

use crate::error::AnalyzeError;
use crate::model::{Product, PurchaseRecord, Seller, SellerStat};
use crate::strategy::RevenueStrategy;

/// Map seller id → position in `sellers`. Duplicate ids are rejected.
pub fn index_sellers(sellers: &[Seller]) -> Result<HashMap<&str, usize>, AnalyzeError> {
    let mut index = HashMap::with_capacity(sellers.len());
    for (pos, seller) in sellers.iter().enumerate() {
        if index.insert(seller.id.as_str(), pos).is_some() {
            return Err(AnalyzeError::DuplicateKey { collection: "sellers", key: seller.id.clone() });
        }
    }
    Ok(index)
}

/// Map sku → product. Duplicate skus are rejected.
pub fn index_products(products: &[Product]) -> Result<HashMap<&str, &Product>, AnalyzeError> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        if index.insert(product.sku.as_str(), product).is_some() {
            return Err(AnalyzeError::DuplicateKey { collection: "products", key: product.sku.clone() });
        }
    }
    Ok(index)
}

/// Fold purchase records into one stat per seller, in `sellers` order.
///
/// Receipt totals feed `revenue`; line items feed `profit` (strategy revenue
/// minus purchase cost) and the cumulative `products_sold` counts. The first
/// record naming an unknown seller or product aborts the fold.
pub fn accumulate(
    sellers: &[Seller],
    products: &[Product],
    records: &[PurchaseRecord],
    revenue: &dyn RevenueStrategy,
) -> Result<Vec<SellerStat>, AnalyzeError> {
    let seller_index = index_sellers(sellers)?;
    let product_index = index_products(products)?;

    let mut stats: Vec<SellerStat> = sellers.iter().map(SellerStat::new).collect();

    for (i, record) in records.iter().enumerate() {
        let pos = *seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
            AnalyzeError::UnknownSeller { record: record.label(i), seller_id: record.seller_id.clone() }
        })?;
        let stat = &mut stats[pos];

        stat.sales_count += 1;
        stat.revenue += record.total_amount;

        for item in &record.items {
            let product = *product_index.get(item.sku.as_str()).ok_or_else(|| {
                AnalyzeError::UnknownProduct { record: record.label(i), sku: item.sku.clone() }
            })?;

            let cost = product.purchase_price * item.quantity as f64;
            let line_revenue = revenue.revenue(item, product);
            stat.profit += line_revenue - cost;

            *stat.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
        }

        log::trace!(
            "record {}: seller={} items={} total={}",
            record.label(i),
            record.seller_id,
            record.items.len(),
            record.total_amount,
        );
    }

    Ok(stats)
}
