//! Before/after breakdown of total monthly outlay.
//!
//! Splits the current and the prospective monthly outlay into a housing
//! segment and a debt segment, and expresses each segment as a percentage of
//! the larger of the two totals. A display can draw both totals as bars on a
//! shared scale from these numbers alone.

use serde::Serialize;

use crate::models::CalculationResults;

/// One bar: a housing segment followed by a debt segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlayBar {
    pub housing_payment: f64,
    pub debt_payment: f64,
    pub total: f64,
    /// Housing segment width, in percent of the shared scale.
    pub housing_share: f64,
    /// Debt segment width, in percent of the shared scale.
    pub debt_share: f64,
}

/// Current versus prospective monthly outlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentComparison {
    pub before: OutlayBar,
    pub after: OutlayBar,
}

impl PaymentComparison {
    /// Builds the comparison from a results record and the monthly debt
    /// payments the household makes today.
    pub fn new(
        results: &CalculationResults,
        monthly_debt_payments: f64,
    ) -> Self {
        let before_total = results.current_monthly_payment + monthly_debt_payments;
        let after_total = results.new_monthly_payment + results.remaining_monthly_debt_payments;
        // Floor of 1 keeps an all-zero comparison from dividing by zero.
        let scale = before_total.max(after_total).max(1.0);

        let bar = |housing: f64, debt: f64, total: f64| OutlayBar {
            housing_payment: housing,
            debt_payment: debt,
            total,
            housing_share: housing / scale * 100.0,
            debt_share: debt / scale * 100.0,
        };

        Self {
            before: bar(
                results.current_monthly_payment,
                monthly_debt_payments,
                before_total,
            ),
            after: bar(
                results.new_monthly_payment,
                results.remaining_monthly_debt_payments,
                after_total,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn results(
        current: f64,
        new: f64,
        remaining_debt: f64,
    ) -> CalculationResults {
        CalculationResults {
            home_equity: 0.0,
            net_equity: 0.0,
            new_loan_amount: 0.0,
            current_monthly_payment: current,
            new_monthly_principal_and_interest: 0.0,
            new_monthly_payment: new,
            payment_difference: 0.0,
            debts_paid_off: 0.0,
            remaining_monthly_debt_payments: remaining_debt,
            monthly_debt_payments_eliminated: 0.0,
        }
    }

    #[test]
    fn larger_total_fills_the_scale() {
        let comparison = PaymentComparison::new(&results(1800.0, 2000.0, 0.0), 1500.0);

        assert_eq!(comparison.before.total, 3300.0);
        assert_eq!(comparison.after.total, 2000.0);
        let filled = comparison.before.housing_share + comparison.before.debt_share;
        assert!((filled - 100.0).abs() < 1e-9, "got {filled}");
    }

    #[test]
    fn shares_use_the_shared_scale() {
        let comparison = PaymentComparison::new(&results(1000.0, 4000.0, 0.0), 1000.0);

        assert_eq!(comparison.before.housing_share, 25.0);
        assert_eq!(comparison.before.debt_share, 25.0);
        assert_eq!(comparison.after.housing_share, 100.0);
    }

    #[test]
    fn all_zero_outlay_has_zero_width_bars() {
        let comparison = PaymentComparison::new(&results(0.0, 0.0, 0.0), 0.0);

        assert_eq!(comparison.before.housing_share, 0.0);
        assert_eq!(comparison.after.debt_share, 0.0);
    }
}
