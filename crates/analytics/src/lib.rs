//! `salesboard-analytics` — seller performance engine.
//!
//! Pure engine crate: receives pre-loaded sales collections, returns a
//! profit-ranked report per seller. No CLI or IO dependencies.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod rank;
pub mod round;
pub mod strategy;

pub use config::AnalysisConfig;
pub use engine::analyze;
pub use error::{AnalyzeError, ErrorKind, ShapeProblem};
pub use input::load_sales_json;
pub use model::{SalesData, SellerReport, SellerStat};
pub use strategy::{AnalysisOptions, BonusStrategy, DiscountedRevenue, ProfitRankBonus, RevenueStrategy};
