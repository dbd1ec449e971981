//! Strategy identifiers and per-strategy return projections

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvestError;
use crate::property::Property;

/// The three investment strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Furnished short-term rental
    Airbnb,
    /// Unfurnished long-term lease
    Lease,
    /// Renovate and resell
    Flip,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Airbnb, StrategyKind::Lease, StrategyKind::Flip];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Airbnb => "airbnb",
            StrategyKind::Lease => "lease",
            StrategyKind::Flip => "flip",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = InvestError;

    /// Case-insensitive; surrounding whitespace is not stripped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "airbnb" => Ok(StrategyKind::Airbnb),
            "lease" => Ok(StrategyKind::Lease),
            "flip" => Ok(StrategyKind::Flip),
            _ => Err(InvestError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Projection for a buy-and-rent strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturns {
    /// Gross monthly rent
    pub monthly_income: i64,

    /// Rent less mortgage, carrying costs and strategy overhead
    pub monthly_cash_flow: i64,

    pub annual_cash_flow: i64,

    /// Annual cash flow over cash invested, percent to one decimal
    #[serde(rename = "totalROI")]
    pub total_roi: f64,
}

/// Projection for a fix-and-flip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipReturns {
    pub renovation_budget: i64,
    pub after_repair_value: i64,
    pub closing_costs_buy: i64,
    pub closing_costs_sell: i64,

    /// Mortgage and carrying costs over the holding period
    pub holding_costs: i64,

    pub holding_period_months: u32,

    /// Cash committed: down payment, renovation, buy-side closing, holding
    pub total_investment: i64,

    pub net_profit: i64,

    /// Return on cash committed scaled to a yearly rate, percent to one decimal
    #[serde(rename = "annualizedROI")]
    pub annualized_roi: f64,
}

/// Result for a single strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyReturns {
    Airbnb(RentalReturns),
    Lease(RentalReturns),
    Flip(FlipReturns),
}

impl StrategyReturns {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyReturns::Airbnb(_) => StrategyKind::Airbnb,
            StrategyReturns::Lease(_) => StrategyKind::Lease,
            StrategyReturns::Flip(_) => StrategyKind::Flip,
        }
    }

    /// The ROI figure strategies are compared on
    pub fn headline_roi(&self) -> f64 {
        match self {
            StrategyReturns::Airbnb(r) | StrategyReturns::Lease(r) => r.total_roi,
            StrategyReturns::Flip(f) => f.annualized_roi,
        }
    }
}

/// Shared monthly figures every strategy is built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCosts {
    pub mortgage_payment: i64,
    pub fixed_monthly_cost: i64,

    /// Long-term rent before any strategy premium
    pub base_rent: i64,
}

/// All three strategies for one property and one set of financing terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub airbnb: RentalReturns,
    pub lease: RentalReturns,
    pub flip: FlipReturns,
    pub monthly_costs: MonthlyCosts,
}

impl StrategyComparison {
    /// Pick out one strategy's branch
    pub fn get(&self, kind: StrategyKind) -> StrategyReturns {
        match kind {
            StrategyKind::Airbnb => StrategyReturns::Airbnb(self.airbnb),
            StrategyKind::Lease => StrategyReturns::Lease(self.lease),
            StrategyKind::Flip => StrategyReturns::Flip(self.flip),
        }
    }
}

/// One strategy's result tagged with the strategy and the listing it was run for
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    pub strategy: StrategyKind,
    pub property: Property,
    pub returns: StrategyReturns,
}
