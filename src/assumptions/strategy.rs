//! Per-strategy business constants: rental premiums, overheads, flip terms

/// Ongoing ownership costs expressed as annual fractions of the listing price
#[derive(Debug, Clone, PartialEq)]
pub struct CarryingCosts {
    /// Property tax and insurance (annual, of price)
    pub tax_insurance_rate: f64,

    /// Maintenance and vacancy reserve (annual, of price)
    pub maintenance_vacancy_rate: f64,
}

impl Default for CarryingCosts {
    fn default() -> Self {
        Self {
            tax_insurance_rate: 0.012,       // 1.2% per annum
            maintenance_vacancy_rate: 0.01, // 1.0% per annum
        }
    }
}

impl CarryingCosts {
    /// Fixed monthly cost of holding a property at the given price
    pub fn monthly(&self, price: f64) -> f64 {
        let tax_insurance = (price * self.tax_insurance_rate) / 12.0;
        let maintenance_vacancy = (price * self.maintenance_vacancy_rate) / 12.0;
        tax_insurance + maintenance_vacancy
    }
}

/// Terms for a buy-and-rent strategy
#[derive(Debug, Clone, PartialEq)]
pub struct RentalAssumptions {
    /// Gross income as a multiple of base long-term rent
    pub rent_multiplier: f64,

    /// Flat monthly cost specific to the strategy (management, turnover, furnishing)
    pub monthly_overhead: f64,
}

impl RentalAssumptions {
    /// Short-term rental: 45% premium over lease rent, $150/month overhead
    pub fn short_term() -> Self {
        Self {
            rent_multiplier: 1.45,
            monthly_overhead: 150.0,
        }
    }

    /// Long-term lease: market rent, $50/month overhead
    pub fn long_term() -> Self {
        Self {
            rent_multiplier: 1.00,
            monthly_overhead: 50.0,
        }
    }
}

/// Terms for a fix-and-flip
#[derive(Debug, Clone, PartialEq)]
pub struct FlipAssumptions {
    pub renovation_budget: f64,

    /// Months between purchase and resale
    pub holding_period_months: u32,

    /// Resale value as a multiple of purchase price
    pub after_repair_multiplier: f64,

    /// Sell-side closing costs as a fraction of resale value
    pub closing_cost_sell_rate: f64,
}

impl Default for FlipAssumptions {
    fn default() -> Self {
        Self {
            renovation_budget: 50_000.0,
            holding_period_months: 6,
            after_repair_multiplier: 1.10,
            closing_cost_sell_rate: 0.06,
        }
    }
}

impl FlipAssumptions {
    /// Holding period expressed in years
    pub fn holding_period_years(&self) -> f64 {
        self.holding_period_months as f64 / 12.0
    }
}
