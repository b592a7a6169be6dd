use crate::aggregate::accumulate;
use crate::error::{AnalyzeError, ShapeProblem};
use crate::model::{SalesData, SellerReport};
use crate::rank::{rank_by_profit, top_products};
use crate::round::round2;
use crate::strategy::AnalysisOptions;

/// Run the analysis. Returns one report per seller, highest profit first.
///
/// Inputs are only borrowed; nothing outside this call is touched, so
/// concurrent calls with different data are independent.
pub fn analyze(data: &SalesData, options: &AnalysisOptions) -> Result<Vec<SellerReport>, AnalyzeError> {
    check_shape(data)?;

    let mut stats = accumulate(
        &data.sellers,
        &data.products,
        &data.purchase_records,
        options.revenue.as_ref(),
    )?;

    rank_by_profit(&mut stats);

    let total = stats.len();
    let reports: Vec<SellerReport> = stats
        .iter()
        .enumerate()
        .map(|(rank, stat)| {
            let bonus = options.bonus.bonus(rank, total, stat);
            SellerReport {
                seller_id: stat.id.clone(),
                name: stat.name.clone(),
                revenue: round2(stat.revenue),
                profit: round2(stat.profit),
                sales_count: stat.sales_count,
                top_products: top_products(&stat.products_sold, options.top_products_limit),
                bonus: round2(bonus),
            }
        })
        .collect();

    if let Some(leader) = reports.first() {
        log::debug!(
            "analyzed {} records across {} sellers; leader {} with profit {}",
            data.purchase_records.len(),
            total,
            leader.seller_id,
            leader.profit,
        );
    }

    Ok(reports)
}

fn check_shape(data: &SalesData) -> Result<(), AnalyzeError> {
    let counts = [
        ("customers", data.customers.len()),
        ("sellers", data.sellers.len()),
        ("products", data.products.len()),
        ("purchase_records", data.purchase_records.len()),
    ];
    for (collection, len) in counts {
        if len == 0 {
            return Err(AnalyzeError::InputShape { collection, problem: ShapeProblem::Empty });
        }
    }
    Ok(())
}
