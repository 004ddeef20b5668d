use serde::{Deserialize, Serialize};

/// Everything derived from one set of valid inputs.
///
/// All amounts are unrounded dollars; rounding is left to whoever displays
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    /// Current home value minus the current mortgage balance.
    pub home_equity: f64,
    /// Equity plus savings minus debts paid off; available for the down payment.
    /// Not clamped, so it can be negative.
    pub net_equity: f64,
    pub new_loan_amount: f64,
    pub current_monthly_payment: f64,
    /// Principal and interest on the new loan, before taxes and insurance.
    pub new_monthly_principal_and_interest: f64,
    /// Principal, interest, taxes and insurance.
    pub new_monthly_payment: f64,
    /// New total monthly outlay minus current total monthly outlay.
    pub payment_difference: f64,
    pub debts_paid_off: f64,
    pub remaining_monthly_debt_payments: f64,
    pub monthly_debt_payments_eliminated: f64,
}
