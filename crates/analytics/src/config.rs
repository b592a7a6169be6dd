use serde::Deserialize;

use crate::error::AnalyzeError;
use crate::strategy::{AnalysisOptions, DiscountedRevenue, ProfitRankBonus, DEFAULT_TOP_PRODUCTS};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Policy file for an analysis run. Every field is optional; an empty file
/// yields the standard discount formula and bonus schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: usize,
    #[serde(default)]
    pub revenue: RevenueConfig,
    #[serde(default)]
    pub bonus: BonusConfig,
}

fn default_name() -> String {
    "sales analysis".into()
}

fn default_top_products_limit() -> usize {
    DEFAULT_TOP_PRODUCTS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            top_products_limit: DEFAULT_TOP_PRODUCTS,
            revenue: RevenueConfig::default(),
            bonus: BonusConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Revenue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevenueConfig {
    #[serde(default = "default_true")]
    pub apply_discount: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self { apply_discount: true }
    }
}

// ---------------------------------------------------------------------------
// Bonus
// ---------------------------------------------------------------------------

/// Bonus percentages by profit rank. Ranks 1 and 2 share `runner_up_percent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BonusConfig {
    #[serde(default = "default_first")]
    pub first_percent: f64,
    #[serde(default = "default_runner_up")]
    pub runner_up_percent: f64,
    #[serde(default)]
    pub last_percent: f64,
    #[serde(default = "default_rest")]
    pub default_percent: f64,
}

fn default_first() -> f64 {
    15.0
}

fn default_runner_up() -> f64 {
    10.0
}

fn default_rest() -> f64 {
    5.0
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            first_percent: default_first(),
            runner_up_percent: default_runner_up(),
            last_percent: 0.0,
            default_percent: default_rest(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing + validation
// ---------------------------------------------------------------------------

impl AnalysisConfig {
    pub fn from_toml(s: &str) -> Result<Self, AnalyzeError> {
        let config: Self = toml::from_str(s).map_err(|e| AnalyzeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if self.top_products_limit == 0 {
            return Err(AnalyzeError::ConfigValidation(
                "top_products_limit must be at least 1".into(),
            ));
        }

        let percents = [
            ("bonus.first_percent", self.bonus.first_percent),
            ("bonus.runner_up_percent", self.bonus.runner_up_percent),
            ("bonus.last_percent", self.bonus.last_percent),
            ("bonus.default_percent", self.bonus.default_percent),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(AnalyzeError::ConfigValidation(format!(
                    "{field} must be between 0 and 100, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Strategies described by this config.
    pub fn to_options(&self) -> Result<AnalysisOptions, AnalyzeError> {
        self.validate()?;
        AnalysisOptions::builder()
            .calculate_revenue(DiscountedRevenue {
                apply_discount: self.revenue.apply_discount,
            })
            .calculate_bonus(ProfitRankBonus {
                first_percent: self.bonus.first_percent,
                runner_up_percent: self.bonus.runner_up_percent,
                last_percent: self.bonus.last_percent,
                default_percent: self.bonus.default_percent,
            })
            .top_products_limit(self.top_products_limit)
            .build()
    }
}
