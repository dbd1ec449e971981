//! Closed-form return projections for the rental and flip strategies

use crate::assumptions::{RentalAssumptions, StrategyAssumptions};
use crate::error::Result;
use crate::property::{Property, PropertyFinancials};
use super::financing::FinancingParameters;
use super::returns::{
    FlipReturns, MonthlyCosts, RentalReturns, StrategyComparison, StrategyKind, StrategyReport,
};

/// Computes strategy returns under a fixed set of assumptions
///
/// Pure and stateless apart from the assumptions; the calculator never
/// validates financing terms, so degenerate inputs yield degenerate (but
/// finite-ROI) output.
#[derive(Debug, Clone, Default)]
pub struct InvestmentCalculator {
    assumptions: StrategyAssumptions,
}

/// Unrounded figures shared by every strategy
struct MonthlyBasis {
    mortgage: f64,
    fixed_monthly: f64,
    base_rent: f64,
}

impl InvestmentCalculator {
    pub fn new(assumptions: StrategyAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &StrategyAssumptions {
        &self.assumptions
    }

    /// Project all three strategies
    pub fn compute_all_strategies(
        &self,
        property: &PropertyFinancials,
        financing: &FinancingParameters,
    ) -> StrategyComparison {
        let basis = self.monthly_basis(property, financing);

        let airbnb = self.rental_returns(&self.assumptions.airbnb, property, financing, &basis);
        let lease = self.rental_returns(&self.assumptions.lease, property, financing, &basis);
        let flip = self.flip_returns(property, financing, &basis);

        log::debug!(
            "price={} mortgage={:.2} fixed={:.2} rent={} -> airbnb {}%, lease {}%, flip {}%",
            property.price,
            basis.mortgage,
            basis.fixed_monthly,
            basis.base_rent,
            airbnb.total_roi,
            lease.total_roi,
            flip.annualized_roi
        );

        StrategyComparison {
            airbnb,
            lease,
            flip,
            monthly_costs: MonthlyCosts {
                mortgage_payment: round_whole(basis.mortgage),
                fixed_monthly_cost: round_whole(basis.fixed_monthly),
                base_rent: round_whole(basis.base_rent),
            },
        }
    }

    /// Project one strategy, named case-insensitively
    pub fn compute_strategy(
        &self,
        property: &Property,
        strategy: &str,
        financing: &FinancingParameters,
    ) -> Result<StrategyReport> {
        let kind: StrategyKind = strategy.parse()?;
        let comparison = self.compute_all_strategies(&property.financials(), financing);

        Ok(StrategyReport {
            strategy: kind,
            property: property.clone(),
            returns: comparison.get(kind),
        })
    }

    fn monthly_basis(&self, property: &PropertyFinancials, financing: &FinancingParameters) -> MonthlyBasis {
        let price = property.price;
        MonthlyBasis {
            mortgage: financing.monthly_payment(price),
            fixed_monthly: self.assumptions.carrying.monthly(price),
            base_rent: property
                .estimated_rent
                .unwrap_or_else(|| round_half_up(price * self.assumptions.rent_to_price_ratio)),
        }
    }

    /// Cash needed to close: down payment plus buy-side closing costs
    fn cash_to_close(&self, property: &PropertyFinancials, financing: &FinancingParameters) -> f64 {
        financing.down_payment + property.price * self.assumptions.closing_cost_buy_rate
    }

    fn rental_returns(
        &self,
        terms: &RentalAssumptions,
        property: &PropertyFinancials,
        financing: &FinancingParameters,
        basis: &MonthlyBasis,
    ) -> RentalReturns {
        let monthly_income = round_half_up(basis.base_rent * terms.rent_multiplier);
        let monthly_cash_flow =
            monthly_income - (basis.mortgage + basis.fixed_monthly + terms.monthly_overhead);
        let annual_cash_flow = monthly_cash_flow * 12.0;
        let total_roi = annual_cash_flow / self.cash_to_close(property, financing) * 100.0;

        RentalReturns {
            monthly_income: round_whole(monthly_income),
            monthly_cash_flow: round_whole(monthly_cash_flow),
            annual_cash_flow: round_whole(annual_cash_flow),
            total_roi: round_percent(total_roi),
        }
    }

    fn flip_returns(
        &self,
        property: &PropertyFinancials,
        financing: &FinancingParameters,
        basis: &MonthlyBasis,
    ) -> FlipReturns {
        let terms = &self.assumptions.flip;
        let price = property.price;

        let after_repair_value = round_half_up(price * terms.after_repair_multiplier);
        let closing_costs_buy = price * self.assumptions.closing_cost_buy_rate;
        let closing_costs_sell = after_repair_value * terms.closing_cost_sell_rate;
        let holding_costs = (basis.mortgage + basis.fixed_monthly) * terms.holding_period_months as f64;

        let total_investment =
            financing.down_payment + terms.renovation_budget + closing_costs_buy + holding_costs;
        let net_profit = after_repair_value
            - price
            - terms.renovation_budget
            - closing_costs_sell
            - closing_costs_buy
            - holding_costs;
        let annualized_roi = (net_profit / total_investment) / terms.holding_period_years() * 100.0;

        FlipReturns {
            renovation_budget: round_whole(terms.renovation_budget),
            after_repair_value: round_whole(after_repair_value),
            closing_costs_buy: round_whole(closing_costs_buy),
            closing_costs_sell: round_whole(closing_costs_sell),
            holding_costs: round_whole(holding_costs),
            holding_period_months: terms.holding_period_months,
            total_investment: round_whole(total_investment),
            net_profit: round_whole(net_profit),
            annualized_roi: round_percent(annualized_roi),
        }
    }
}

/// Project all strategies under the default assumptions
pub fn compute_all_strategies(
    property: &PropertyFinancials,
    financing: &FinancingParameters,
) -> StrategyComparison {
    InvestmentCalculator::default().compute_all_strategies(property, financing)
}

/// Project one strategy under the default assumptions
pub fn compute_strategy(
    property: &Property,
    strategy: &str,
    financing: &FinancingParameters,
) -> Result<StrategyReport> {
    InvestmentCalculator::default().compute_strategy(property, strategy, financing)
}

/// Round to the nearest integer, ties toward positive infinity
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round a monetary amount to whole units
///
/// Non-finite amounts (only reachable with a zero loan term) saturate per `as`.
fn round_whole(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round a percentage to one decimal place; non-finite ratios report 0
fn round_percent(value: f64) -> f64 {
    if value.is_finite() {
        round_half_up(value * 10.0) / 10.0
    } else {
        0.0
    }
}
