//! Scenario runner for batch calculations
//!
//! Holds one set of assumptions and applies it across many financing
//! scenarios or many listings without rebuilding the calculator.

use rayon::prelude::*;
use serde::Serialize;

use crate::assumptions::StrategyAssumptions;
use crate::calculator::{FinancingParameters, InvestmentCalculator, StrategyComparison};
use crate::property::Property;
use crate::error::Result;

/// Strategy comparison for one listing in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAnalysis {
    pub property_id: String,
    pub comparison: StrategyComparison,
}

/// Pre-built calculator for batch runs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Same listing, different down payments
/// let scenarios: Vec<_> = [60_000.0, 90_000.0, 120_000.0]
///     .iter()
///     .map(|&dp| FinancingParameters::new(dp, 6.5, 30))
///     .collect();
/// let results = runner.run_scenarios(&property, &scenarios);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: InvestmentCalculator,
}

impl ScenarioRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading assumptions from the default CSV file
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(StrategyAssumptions::from_csv()?))
    }

    /// Create runner from a specific assumptions file
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_assumptions(StrategyAssumptions::from_csv_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: StrategyAssumptions) -> Self {
        Self {
            calculator: InvestmentCalculator::new(assumptions),
        }
    }

    /// Compare strategies for one listing
    pub fn run(&self, property: &Property, financing: &FinancingParameters) -> StrategyComparison {
        self.calculator.compute_all_strategies(&property.financials(), financing)
    }

    /// Run several financing scenarios for a single listing
    pub fn run_scenarios(&self, property: &Property, scenarios: &[FinancingParameters]) -> Vec<StrategyComparison> {
        let financials = property.financials();
        scenarios
            .iter()
            .map(|financing| self.calculator.compute_all_strategies(&financials, financing))
            .collect()
    }

    /// Compare strategies for every listing in parallel, preserving input order
    pub fn run_catalog(&self, properties: &[Property], financing: &FinancingParameters) -> Vec<PropertyAnalysis> {
        properties
            .par_iter()
            .map(|property| PropertyAnalysis {
                property_id: property.id.clone(),
                comparison: self.run(property, financing),
            })
            .collect()
    }

    pub fn calculator(&self) -> &InvestmentCalculator {
        &self.calculator
    }

    pub fn assumptions(&self) -> &StrategyAssumptions {
        self.calculator.assumptions()
    }
}
