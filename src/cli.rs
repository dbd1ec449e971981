//! Command-line arguments shared by the binaries

use std::path::PathBuf;

use clap::Args;

use crate::assumptions::StrategyAssumptions;
use crate::calculator::{FinancingParameters, InvestmentCalculator};
use crate::error::Result;
use crate::property::{load_catalog, InMemoryCatalog};

/// Financing terms; defaults match the demo frontend
#[derive(Debug, Clone, Args)]
pub struct FinancingArgs {
    /// Cash paid up front
    #[arg(long, default_value_t = 90_000.0)]
    pub down_payment: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 6.5)]
    pub interest_rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub loan_term: u32,
}

impl FinancingArgs {
    pub fn financing(&self) -> FinancingParameters {
        FinancingParameters::new(self.down_payment, self.interest_rate, self.loan_term)
    }
}

/// Where listings and assumptions come from
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Listings CSV; the built-in demo listings are used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Strategy assumptions CSV; built-in defaults are used when omitted
    #[arg(long)]
    pub assumptions: Option<PathBuf>,
}

impl DataArgs {
    pub fn catalog(&self) -> Result<InMemoryCatalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(InMemoryCatalog::mock_listings()),
        }
    }

    pub fn strategy_assumptions(&self) -> Result<StrategyAssumptions> {
        match &self.assumptions {
            Some(path) => StrategyAssumptions::from_csv_path(path),
            None => Ok(StrategyAssumptions::default()),
        }
    }

    pub fn calculator(&self) -> Result<InvestmentCalculator> {
        Ok(InvestmentCalculator::new(self.strategy_assumptions()?))
    }
}
