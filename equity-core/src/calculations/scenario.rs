//! Move-up scenario: current home and debts versus a new purchase.
//!
//! The calculation runs in a fixed order because later quantities depend on
//! earlier ones:
//!
//! | Step | Quantity | Formula |
//! |------|----------|---------|
//! | 1 | home equity | current value − current mortgage |
//! | 2 | debts paid off | other debts × payoff fraction |
//! | 3 | net equity | home equity + savings − debts paid off |
//! | 4 | new loan amount | new price − net equity, or 0 when equity covers the price |
//! | 5 | principal & interest | amortized payment on the new loan |
//! | 6 | new monthly payment | P&I + taxes / 12 + insurance / 12 |
//! | 7 | remaining debt payments | monthly debt payments × (1 − fraction) |
//! | 8 | debt payments eliminated | monthly debt payments × fraction |
//! | 9 | payment difference | (new payment + remaining) − (current payment + debt payments) |
//!
//! Net equity is not clamped. When paying off debt eats through equity and
//! savings it goes negative, and the new loan grows past the purchase price.
//!
//! # Example
//!
//! ```
//! use equity_core::{RawInputs, evaluate};
//!
//! let raw = RawInputs {
//!     new_interest_rate: "6.5".to_string(),
//!     ..RawInputs::starter()
//! };
//!
//! let results = evaluate(&raw).unwrap();
//! assert_eq!(results.home_equity, 250000.0);
//! assert_eq!(results.net_equity, 235000.0);
//! assert_eq!(results.new_loan_amount, 515000.0);
//! ```

use tracing::{debug, warn};

use super::amortization::{PAYMENTS_PER_YEAR, monthly_payment};
use crate::models::{CalculationResults, ParsedInputs, RawInputs, ValidationErrors};
use crate::validation::validate_parsed;

/// Computes the complete results record for validated inputs.
///
/// The caller is responsible for validation; nothing is re-checked here
/// (for example a mortgage larger than the home value simply yields negative
/// equity). Pure and deterministic: identical inputs give bit-identical
/// results.
pub fn compute(inputs: &ParsedInputs) -> CalculationResults {
    let fraction = inputs.debt_payoff_fraction;

    let home_equity = inputs.current_home_value - inputs.current_mortgage;
    let debts_paid_off = inputs.other_debts * fraction;
    let net_equity = home_equity + inputs.additional_savings - debts_paid_off;

    let new_loan_amount = if inputs.new_home_price > net_equity {
        inputs.new_home_price - net_equity
    } else {
        0.0
    };

    let new_monthly_principal_and_interest = monthly_payment(
        new_loan_amount,
        inputs.new_interest_rate,
        inputs.loan_term,
    );
    let new_monthly_taxes = inputs.annual_taxes / PAYMENTS_PER_YEAR;
    let new_monthly_insurance = inputs.annual_insurance / PAYMENTS_PER_YEAR;
    let new_monthly_payment =
        new_monthly_principal_and_interest + new_monthly_taxes + new_monthly_insurance;

    let remaining_monthly_debt_payments = inputs.monthly_debt_payments * (1.0 - fraction);
    let monthly_debt_payments_eliminated = inputs.monthly_debt_payments * fraction;

    let current_total_monthly_outlay =
        inputs.current_monthly_payment + inputs.monthly_debt_payments;
    let new_total_monthly_outlay = new_monthly_payment + remaining_monthly_debt_payments;
    let payment_difference = new_total_monthly_outlay - current_total_monthly_outlay;

    debug!(
        net_equity,
        new_loan_amount, new_monthly_payment, payment_difference, "computed scenario"
    );

    CalculationResults {
        home_equity,
        net_equity,
        new_loan_amount,
        current_monthly_payment: inputs.current_monthly_payment,
        new_monthly_principal_and_interest,
        new_monthly_payment,
        payment_difference,
        debts_paid_off,
        remaining_monthly_debt_payments,
        monthly_debt_payments_eliminated,
    }
}

/// Validates `raw` and, only when it is clean, computes the results.
///
/// # Errors
///
/// Returns the full [`ValidationErrors`] set when any rule fails; no partial
/// results are produced in that case.
pub fn evaluate(raw: &RawInputs) -> Result<CalculationResults, ValidationErrors> {
    let inputs = ParsedInputs::from_raw(raw);
    let errors = validate_parsed(&inputs);
    if !errors.is_empty() {
        warn!(
            fields = ?errors.fields().map(|f| f.as_str()).collect::<Vec<_>>(),
            "calculation withheld until inputs are corrected"
        );
        return Err(errors);
    }
    Ok(compute(&inputs))
}
