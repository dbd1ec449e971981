//! Property Returns - investment projections for residential listings
//!
//! This library provides:
//! - Fixed-rate mortgage amortization and carrying-cost estimates
//! - Short-term rental, long-term lease and fix-and-flip return projections
//! - Strategy ranking by headline ROI
//! - A searchable listing catalog with CSV loading
//! - Batch runs across financing scenarios or a whole catalog
//! - A JSON-over-HTTP service

pub mod error;
pub mod property;
pub mod assumptions;
pub mod calculator;
pub mod scenario;
pub mod api;
pub mod cli;

// Re-export commonly used types
pub use error::{InvestError, Result};
pub use property::{Property, PropertyFinancials, PropertyRepository, InMemoryCatalog, PropertyFilter};
pub use assumptions::StrategyAssumptions;
pub use calculator::{
    InvestmentCalculator, FinancingParameters, StrategyComparison, StrategyKind, StrategyReport,
    compute_all_strategies, compute_strategy,
};
pub use scenario::{ScenarioRunner, PropertyAnalysis};
