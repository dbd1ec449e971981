//! Loan terms and fixed-rate amortization

use serde::{Deserialize, Serialize};

use crate::error::{InvestError, Result};

/// Longest loan term `validate` accepts, in years
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// Parse a loan term given as a number of years
///
/// Only whole values up to the cap pass, so `30.0` is 30 years and `15.5` is an error.
pub fn loan_term_years(years: f64) -> Result<u32> {
    let in_range = (0.0..=f64::from(MAX_LOAN_TERM_YEARS)).contains(&years);
    if in_range && years.fract() == 0.0 {
        Ok(years as u32)
    } else {
        Err(InvestError::InvalidFinancing(format!(
            "loanTerm must be a whole number of years up to {}, got {}",
            MAX_LOAN_TERM_YEARS, years
        )))
    }
}

/// Financing terms supplied with each calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingParameters {
    /// Cash paid up front
    pub down_payment: f64,

    /// Annual nominal rate in percent (6.5 means 6.5%)
    pub interest_rate: f64,

    /// Loan term in years
    pub loan_term: u32,
}

impl FinancingParameters {
    pub fn new(down_payment: f64, interest_rate: f64, loan_term: u32) -> Self {
        Self {
            down_payment,
            interest_rate,
            loan_term,
        }
    }

    /// Amount borrowed against a purchase at `price`
    pub fn principal(&self, price: f64) -> f64 {
        price - self.down_payment
    }

    /// Interest rate per monthly period, as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Number of monthly payments
    pub fn payment_count(&self) -> f64 {
        f64::from(self.loan_term) * 12.0
    }

    /// Fixed monthly payment that retires the loan over its term
    ///
    /// A zero rate repays principal in equal installments.
    pub fn monthly_payment(&self, price: f64) -> f64 {
        let principal = self.principal(price);
        let rate = self.monthly_rate();
        let n = self.payment_count();

        if rate == 0.0 {
            return principal / n;
        }

        let growth = (1.0 + rate).powf(n);
        if growth.is_infinite() {
            // Term too long to amortize: the payment is the interest
            return principal * rate;
        }
        principal * (rate * growth) / (growth - 1.0)
    }

    /// Check the terms make sense for a purchase at `price`
    ///
    /// The calculator itself never calls this; request boundaries do.
    pub fn validate(&self, price: f64) -> Result<()> {
        if !self.down_payment.is_finite() || !self.interest_rate.is_finite() {
            return Err(InvestError::InvalidFinancing(
                "downPayment and interestRate must be finite numbers".to_string(),
            ));
        }
        if self.down_payment < 0.0 {
            return Err(InvestError::InvalidFinancing(format!(
                "downPayment must not be negative, got {}",
                self.down_payment
            )));
        }
        if self.down_payment > price {
            return Err(InvestError::InvalidFinancing(format!(
                "downPayment {} exceeds price {}",
                self.down_payment, price
            )));
        }
        if self.interest_rate < 0.0 {
            return Err(InvestError::InvalidFinancing(format!(
                "interestRate must not be negative, got {}",
                self.interest_rate
            )));
        }
        if self.loan_term == 0 {
            return Err(InvestError::InvalidFinancing(
                "loanTerm must be at least one year".to_string(),
            ));
        }
        if self.loan_term > MAX_LOAN_TERM_YEARS {
            return Err(InvestError::InvalidFinancing(format!(
                "loanTerm must be at most {} years, got {}",
                MAX_LOAN_TERM_YEARS, self.loan_term
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_thirty_year_payment() {
        let financing = FinancingParameters::new(90_000.0, 6.5, 30);
        assert_eq!(financing.principal(450_000.0), 360_000.0);
        assert_eq!(financing.payment_count(), 360.0);
        assert_abs_diff_eq!(financing.monthly_rate(), 0.065 / 12.0, epsilon = 1e-15);
        assert_abs_diff_eq!(financing.monthly_payment(450_000.0), 2275.4449, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let financing = FinancingParameters::new(90_000.0, 0.0, 30);
        assert_eq!(financing.monthly_payment(450_000.0), 360_000.0 / 360.0);

        let short = FinancingParameters::new(10_000.0, 0.0, 7);
        assert_eq!(short.monthly_payment(94_000.0), 84_000.0 / 84.0);
    }

    #[test]
    fn test_payments_fall_with_lower_rates() {
        let high = FinancingParameters::new(50_000.0, 8.0, 30).monthly_payment(300_000.0);
        let low = FinancingParameters::new(50_000.0, 4.0, 30).monthly_payment(300_000.0);
        let zero = FinancingParameters::new(50_000.0, 0.0, 30).monthly_payment(300_000.0);
        assert!(high > low && low > zero);
    }

    #[test]
    fn test_validate() {
        assert!(FinancingParameters::new(90_000.0, 6.5, 30).validate(450_000.0).is_ok());
        assert!(FinancingParameters::new(450_000.0, 0.0, 1).validate(450_000.0).is_ok());
        assert!(FinancingParameters::new(90_000.0, 6.5, MAX_LOAN_TERM_YEARS).validate(450_000.0).is_ok());

        for bad in [
            FinancingParameters::new(-1.0, 6.5, 30),
            FinancingParameters::new(500_000.0, 6.5, 30),
            FinancingParameters::new(90_000.0, -0.5, 30),
            FinancingParameters::new(90_000.0, 6.5, 0),
            FinancingParameters::new(90_000.0, 6.5, MAX_LOAN_TERM_YEARS + 1),
            FinancingParameters::new(90_000.0, 6.5, 400_000_000),
            FinancingParameters::new(f64::NAN, 6.5, 30),
            FinancingParameters::new(90_000.0, f64::INFINITY, 30),
        ] {
            assert!(
                matches!(bad.validate(450_000.0), Err(InvestError::InvalidFinancing(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_loan_term_years() {
        assert_eq!(loan_term_years(30.0).unwrap(), 30);
        assert_eq!(loan_term_years(15.0).unwrap(), 15);
        assert_eq!(loan_term_years(MAX_LOAN_TERM_YEARS as f64).unwrap(), MAX_LOAN_TERM_YEARS);

        for bad in [15.5, -1.0, 101.0, 4e8, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(loan_term_years(bad), Err(InvestError::InvalidFinancing(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_huge_loan_term_does_not_overflow() {
        let financing = FinancingParameters::new(90_000.0, 6.5, u32::MAX);
        assert_eq!(financing.payment_count(), f64::from(u32::MAX) * 12.0);

        let payment = financing.monthly_payment(450_000.0);
        assert_abs_diff_eq!(payment, 360_000.0 * 0.065 / 12.0, epsilon = 1e-6);

        let zero_rate = FinancingParameters::new(90_000.0, 0.0, 400_000_000);
        assert!(zero_rate.monthly_payment(450_000.0) > 0.0);
    }
}
