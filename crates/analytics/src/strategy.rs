//! Revenue and bonus policies.
//!
//! The engine never hard-codes the discount formula or the bonus schedule.
//! Both are supplied through [`AnalysisOptions`] as trait objects; closures
//! with the matching signature implement the traits directly.

use crate::error::AnalyzeError;
use crate::model::{LineItem, Product, SellerStat};

/// Maximum number of products listed per seller unless configured otherwise.
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Revenue earned by one line item.
pub trait RevenueStrategy: Send + Sync {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Bonus for the seller at 0-based `rank` among `total` sellers.
pub trait BonusStrategy: Send + Sync {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64 {
        self(rank, total, seller)
    }
}

// ---------------------------------------------------------------------------
// Default policies
// ---------------------------------------------------------------------------

/// `sale_price * quantity`, reduced by the item's percentage discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountedRevenue {
    pub apply_discount: bool,
}

impl Default for DiscountedRevenue {
    fn default() -> Self {
        Self { apply_discount: true }
    }
}

impl RevenueStrategy for DiscountedRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let gross = item.sale_price * item.quantity as f64;
        if self.apply_discount {
            gross * (1.0 - item.discount / 100.0)
        } else {
            gross
        }
    }
}

/// Percentage of profit by rank: first place, places 2–3, last place, rest.
///
/// Conditions are checked in that order. With a single seller, rank 0 is also
/// last and gets the first-place rate; with three or fewer sellers the
/// runner-up rate beats the last-place rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitRankBonus {
    pub first_percent: f64,
    pub runner_up_percent: f64,
    pub last_percent: f64,
    pub default_percent: f64,
}

impl Default for ProfitRankBonus {
    fn default() -> Self {
        Self {
            first_percent: 15.0,
            runner_up_percent: 10.0,
            last_percent: 0.0,
            default_percent: 5.0,
        }
    }
}

impl ProfitRankBonus {
    pub fn percent_for(&self, rank: usize, total: usize) -> f64 {
        if rank == 0 {
            self.first_percent
        } else if rank == 1 || rank == 2 {
            self.runner_up_percent
        } else if rank + 1 == total {
            self.last_percent
        } else {
            self.default_percent
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64 {
        seller.profit * (self.percent_for(rank, total) / 100.0)
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Strategies and limits for one or more [`crate::analyze`] calls.
///
/// Only obtainable through [`AnalysisOptions::builder`], which refuses to
/// build without both strategies.
pub struct AnalysisOptions {
    pub(crate) revenue: Box<dyn RevenueStrategy>,
    pub(crate) bonus: Box<dyn BonusStrategy>,
    pub(crate) top_products_limit: usize,
}

impl AnalysisOptions {
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }

    /// Default discount formula, default bonus schedule, top 10 products.
    pub fn standard() -> Self {
        Self {
            revenue: Box::new(DiscountedRevenue::default()),
            bonus: Box::new(ProfitRankBonus::default()),
            top_products_limit: DEFAULT_TOP_PRODUCTS,
        }
    }

    pub fn top_products_limit(&self) -> usize {
        self.top_products_limit
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("top_products_limit", &self.top_products_limit)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct AnalysisOptionsBuilder {
    revenue: Option<Box<dyn RevenueStrategy>>,
    bonus: Option<Box<dyn BonusStrategy>>,
    top_products_limit: Option<usize>,
}

impl AnalysisOptionsBuilder {
    pub fn calculate_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(strategy));
        self
    }

    pub fn calculate_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(strategy));
        self
    }

    pub fn top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<AnalysisOptions, AnalyzeError> {
        let revenue = self.revenue.ok_or(AnalyzeError::MissingStrategy("calculate_revenue"))?;
        let bonus = self.bonus.ok_or(AnalyzeError::MissingStrategy("calculate_bonus"))?;
        let top_products_limit = self.top_products_limit.unwrap_or(DEFAULT_TOP_PRODUCTS);
        if top_products_limit == 0 {
            return Err(AnalyzeError::ConfigValidation(
                "top_products_limit must be at least 1".into(),
            ));
        }
        Ok(AnalysisOptions { revenue, bonus, top_products_limit })
    }
}
