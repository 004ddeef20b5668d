//! Fixed-rate loan amortization.
//!
//! The monthly payment on a fixed-rate loan of principal `P`, monthly rate
//! `r` and `n` monthly payments is
//!
//! ```text
//! payment = P * (r * (1 + r)^n) / ((1 + r)^n - 1)
//! ```
//!
//! where `r = annual_rate_percent / 100 / 12` and `n = years * 12`.
//!
//! # Example
//!
//! ```
//! use equity_core::calculations::monthly_payment;
//!
//! let payment = monthly_payment(515000.0, 6.5, 30.0);
//! assert!((payment - 3255.15).abs() < 0.01);
//! ```

/// Number of payments per year.
pub const PAYMENTS_PER_YEAR: f64 = 12.0;

/// Returns the monthly principal-and-interest payment on a fixed-rate loan.
///
/// # Arguments
///
/// * `principal` - Amount borrowed, in dollars
/// * `annual_rate_percent` - Annual interest rate as a percentage (6.5 = 6.5%)
/// * `years` - Loan term in years
///
/// # Returns
///
/// `0.0` when any argument is zero or negative, since no amortization is
/// possible. A monthly rate of exactly zero falls back to straight-line
/// repayment `principal / (years * 12)`. No rounding is applied.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> f64 {
    if principal <= 0.0 || annual_rate_percent <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / PAYMENTS_PER_YEAR;
    let number_of_payments = years * PAYMENTS_PER_YEAR;

    // Only reachable when the rate underflows to zero after division.
    if monthly_rate == 0.0 {
        return principal / number_of_payments;
    }

    let growth = (1.0 + monthly_rate).powf(number_of_payments);
    let numerator = monthly_rate * growth;
    let denominator = growth - 1.0;
    principal * (numerator / denominator)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Standard amortization formula, written out independently.
    fn reference_payment(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> f64 {
        let r = annual_rate_percent / 1200.0;
        let n = years * 12.0;
        principal * r / (1.0 - (1.0 + r).powf(-n))
    }

    #[test]
    fn thirty_year_loan_matches_formula() {
        let payment = monthly_payment(515000.0, 6.5, 30.0);

        assert!((payment - reference_payment(515000.0, 6.5, 30.0)).abs() < 0.01);
        assert!((payment - 3255.15).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn fifteen_year_loan_matches_formula() {
        let payment = monthly_payment(200000.0, 5.0, 15.0);

        assert!((payment - 1581.59).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn payment_covers_more_than_interest() {
        let principal = 300000.0;
        let payment = monthly_payment(principal, 7.0, 30.0);

        assert!(payment > principal * 0.07 / 12.0);
    }

    #[test]
    fn non_positive_principal_returns_zero() {
        assert_eq!(monthly_payment(0.0, 6.5, 30.0), 0.0);
        assert_eq!(monthly_payment(-1000.0, 6.5, 30.0), 0.0);
    }

    #[test]
    fn non_positive_rate_returns_zero() {
        assert_eq!(monthly_payment(100000.0, 0.0, 30.0), 0.0);
        assert_eq!(monthly_payment(100000.0, -2.0, 30.0), 0.0);
    }

    #[test]
    fn non_positive_term_returns_zero() {
        assert_eq!(monthly_payment(100000.0, 6.5, 0.0), 0.0);
        assert_eq!(monthly_payment(100000.0, 6.5, -30.0), 0.0);
    }

    #[test]
    fn underflowing_rate_uses_straight_line_repayment() {
        // The smallest positive double divided by 1200 rounds to zero.
        let payment = monthly_payment(5000.0, f64::from_bits(1), 30.0);

        assert_eq!(payment, 5000.0 / (30.0 * 12.0));
    }

    #[test]
    fn is_deterministic() {
        let first = monthly_payment(431250.0, 6.875, 25.0);
        let second = monthly_payment(431250.0, 6.875, 25.0);

        assert_eq!(first.to_bits(), second.to_bits());
    }
}
