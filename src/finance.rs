//! Shared loan and return math used by all four deal calculators

use serde::{Deserialize, Serialize};

/// Calculate the fixed monthly payment for a fully amortizing loan.
///
/// # Arguments
/// * `principal` - Loan amount in dollars
/// * `annual_rate` - Annual interest rate in percent (e.g. 6.5 for 6.5%)
/// * `term_years` - Loan term in years
///
/// # Returns
/// * Monthly payment amount. Zero if the principal or term is non-positive;
///   straight-line (principal / months) if the rate is zero.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: f64) -> f64 {
    if principal <= 0.0 || term_years <= 0.0 {
        return 0.0;
    }

    let num_payments = term_years * 12.0;

    if annual_rate == 0.0 {
        return principal / num_payments;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(num_payments);

    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Monthly interest-only carrying cost on an outstanding balance.
///
/// Used for short-horizon financing (hard money, bridge loans) where no
/// principal is paid down before the sale.
pub fn monthly_interest_only(principal: f64, annual_rate: f64) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    principal * (annual_rate / 100.0) / 12.0
}

/// An annualized rate of return on invested cash.
///
/// `Infinite` is the explicit state for a deal with no capital left in it:
/// all invested cash has been recovered, so any positive cash flow is return
/// on zero basis. Keeping this as its own variant stops `f64::INFINITY` or
/// NaN from leaking into downstream math and display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReturnRate {
    /// Finite annual return in percent
    Finite(f64),
    /// All capital recovered; return on remaining basis is unbounded
    Infinite,
}

impl ReturnRate {
    /// Annual cash flow over invested basis, in percent.
    /// Non-positive basis means the capital has been fully recovered.
    pub fn on_basis(annual_cash_flow: f64, basis: f64) -> Self {
        if basis > 0.0 {
            ReturnRate::Finite(annual_cash_flow / basis * 100.0)
        } else {
            ReturnRate::Infinite
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ReturnRate::Infinite)
    }

    /// Finite value in percent, if any
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            ReturnRate::Finite(v) => Some(*v),
            ReturnRate::Infinite => None,
        }
    }
}

/// Break-even horizon in whole months: basis / monthly cash flow, rounded up.
/// Zero (no break-even) unless both the basis and the cash flow are positive.
pub fn break_even_months(basis: f64, monthly_cash_flow: f64) -> u32 {
    if basis > 0.0 && monthly_cash_flow > 0.0 {
        (basis / monthly_cash_flow).ceil() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_amortization() {
        // $200k at 6% over 30 years: standard table value
        let payment = monthly_payment(200_000.0, 6.0, 30.0);
        assert_relative_eq!(payment, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(120_000.0, 0.0, 10.0);
        assert_relative_eq!(payment, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_loans_pay_nothing() {
        assert_eq!(monthly_payment(0.0, 6.0, 30.0), 0.0);
        assert_eq!(monthly_payment(-50_000.0, 6.0, 30.0), 0.0);
        assert_eq!(monthly_payment(200_000.0, 6.0, 0.0), 0.0);
    }

    #[test]
    fn test_interest_only_carry() {
        // $160k at 10%: $1,333.33/month, no principal paydown
        let carry = monthly_interest_only(160_000.0, 10.0);
        assert_relative_eq!(carry, 1333.33, epsilon = 0.01);
        assert_eq!(monthly_interest_only(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_return_rate_sentinel() {
        let finite = ReturnRate::on_basis(6_000.0, 50_000.0);
        assert_eq!(finite, ReturnRate::Finite(12.0));
        assert_eq!(finite.as_finite(), Some(12.0));

        // Recovered more than was put in
        let infinite = ReturnRate::on_basis(6_000.0, -2_500.0);
        assert!(infinite.is_infinite());
        assert_eq!(infinite.as_finite(), None);

        // Exactly zero basis is also fully recovered
        assert!(ReturnRate::on_basis(6_000.0, 0.0).is_infinite());
    }

    #[test]
    fn test_break_even_rounds_up() {
        assert_eq!(break_even_months(10_000.0, 300.0), 34);
        assert_eq!(break_even_months(9_000.0, 300.0), 30);
        // Negative cash flow never breaks even
        assert_eq!(break_even_months(10_000.0, -50.0), 0);
        assert_eq!(break_even_months(0.0, 300.0), 0);
    }
}
