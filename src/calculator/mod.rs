//! Investment calculator: financing, strategy projections and ranking

mod financing;
mod returns;
mod strategies;
mod ranking;

pub use financing::{loan_term_years, FinancingParameters, MAX_LOAN_TERM_YEARS};
pub use returns::{
    StrategyKind, RentalReturns, FlipReturns, StrategyReturns, MonthlyCosts,
    StrategyComparison, StrategyReport,
};
pub use strategies::{InvestmentCalculator, compute_all_strategies, compute_strategy};
pub use ranking::{RankedStrategy, RoiTier};
