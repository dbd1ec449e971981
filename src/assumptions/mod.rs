//! Investment assumptions: carrying costs, rental strategy terms, flip terms

mod strategy;
pub mod loader;

pub use strategy::{CarryingCosts, RentalAssumptions, FlipAssumptions};

use std::path::Path;

use crate::error::{InvestError, Result};

/// Container for all strategy assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyAssumptions {
    /// Monthly rent estimate as a fraction of price, used when a listing has no rent estimate
    pub rent_to_price_ratio: f64,

    /// Buy-side closing costs as a fraction of price
    pub closing_cost_buy_rate: f64,

    pub carrying: CarryingCosts,
    pub airbnb: RentalAssumptions,
    pub lease: RentalAssumptions,
    pub flip: FlipAssumptions,
}

impl Default for StrategyAssumptions {
    fn default() -> Self {
        Self {
            rent_to_price_ratio: 0.007,
            closing_cost_buy_rate: 0.03,
            carrying: CarryingCosts::default(),
            airbnb: RentalAssumptions::short_term(),
            lease: RentalAssumptions::long_term(),
            flip: FlipAssumptions::default(),
        }
    }
}

impl StrategyAssumptions {
    /// Load assumptions from the default CSV (data/assumptions/strategy_assumptions.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_FILE))
    }

    /// Load assumptions from a specific CSV file
    ///
    /// Parameters missing from the file keep their default values.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let overrides = loader::load_parameters(path)?;
        let mut assumptions = Self::default();
        for (key, value) in &overrides {
            assumptions.set(key, *value)?;
        }
        log::info!("Loaded {} assumption overrides from {}", overrides.len(), path.display());
        Ok(assumptions)
    }

    /// Set a single parameter by its CSV key
    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        match key {
            "rent_to_price_ratio" => self.rent_to_price_ratio = value,
            "closing_cost_buy_rate" => self.closing_cost_buy_rate = value,
            "tax_insurance_rate" => self.carrying.tax_insurance_rate = value,
            "maintenance_vacancy_rate" => self.carrying.maintenance_vacancy_rate = value,
            "airbnb.rent_multiplier" => self.airbnb.rent_multiplier = value,
            "airbnb.monthly_overhead" => self.airbnb.monthly_overhead = value,
            "lease.rent_multiplier" => self.lease.rent_multiplier = value,
            "lease.monthly_overhead" => self.lease.monthly_overhead = value,
            "flip.renovation_budget" => self.flip.renovation_budget = value,
            "flip.after_repair_multiplier" => self.flip.after_repair_multiplier = value,
            "flip.closing_cost_sell_rate" => self.flip.closing_cost_sell_rate = value,
            "flip.holding_period_months" => {
                if value < 1.0 || value.fract() != 0.0 {
                    return Err(InvestError::Assumptions(format!(
                        "flip.holding_period_months must be a positive whole number, got {}",
                        value
                    )));
                }
                self.flip.holding_period_months = value as u32;
            }
            other => {
                return Err(InvestError::Assumptions(format!("Unknown parameter: {}", other)));
            }
        }
        Ok(())
    }
}
