//! Input validation that gates the scenario calculation.
//!
//! Every rule is evaluated independently so that all problems surface at
//! once. Text that does not parse counts as zero before any rule runs, which
//! means an empty optional field (taxes, insurance, savings) never produces
//! an error on its own while an empty required field (home value, price,
//! rate, term) fails its positivity check.
//!
//! | Field | Rule |
//! |-------|------|
//! | current home value | > 0 |
//! | current mortgage | ≥ 0 and ≤ current home value |
//! | current monthly payment | ≥ 0 |
//! | other debts | ≥ 0 |
//! | monthly debt payments | ≥ 0, and 0 when other debts are 0 |
//! | additional savings | ≥ 0 |
//! | new home price | > 0 |
//! | new interest rate | in (0, 25] percent |
//! | loan term | in (0, 50] years |
//! | annual taxes | ≥ 0 |
//! | annual insurance | ≥ 0 |
//!
//! # Example
//!
//! ```
//! use equity_core::{FormField, RawInputs, validate};
//!
//! let mut raw = RawInputs::starter();
//! raw.current_mortgage = "600000".to_string();
//!
//! let errors = validate(&raw);
//! assert!(errors.contains(FormField::CurrentMortgage));
//! // the starter form leaves the rate blank
//! assert!(errors.contains(FormField::NewInterestRate));
//! ```

use tracing::debug;

use crate::models::{FormField, ParsedInputs, RawInputs, ValidationErrors};

/// Highest annual interest rate, in percent, accepted as realistic.
pub const MAX_INTEREST_RATE_PERCENT: f64 = 25.0;

/// Longest loan term, in years, accepted as realistic.
pub const MAX_LOAN_TERM_YEARS: f64 = 50.0;

/// Validates raw form text. See [`validate_parsed`] for the rules.
pub fn validate(raw: &RawInputs) -> ValidationErrors {
    validate_parsed(&ParsedInputs::from_raw(raw))
}

/// Validates already-parsed inputs.
///
/// Returns an empty [`ValidationErrors`] when the inputs may be passed to
/// [`compute`](crate::calculations::compute).
pub fn validate_parsed(inputs: &ParsedInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if inputs.current_home_value <= 0.0 {
        errors.insert(
            FormField::CurrentHomeValue,
            "Home value must be a positive number.",
        );
    }

    if inputs.current_mortgage < 0.0 {
        errors.insert(
            FormField::CurrentMortgage,
            "Mortgage balance cannot be negative.",
        );
    }
    // Checked second so this message wins when both apply.
    if inputs.current_mortgage > inputs.current_home_value {
        errors.insert(
            FormField::CurrentMortgage,
            "Mortgage cannot exceed home value.",
        );
    }

    if inputs.current_monthly_payment < 0.0 {
        errors.insert(
            FormField::CurrentMonthlyPayment,
            "Payment cannot be negative.",
        );
    }

    if inputs.other_debts < 0.0 {
        errors.insert(FormField::OtherDebts, "Debts cannot be negative.");
    }

    if inputs.monthly_debt_payments < 0.0 {
        errors.insert(
            FormField::MonthlyDebtPayments,
            "Debt payments cannot be negative.",
        );
    } else if inputs.other_debts == 0.0 && inputs.monthly_debt_payments > 0.0 {
        errors.insert(
            FormField::MonthlyDebtPayments,
            "Cannot have monthly payments with zero total debt.",
        );
    }

    if inputs.additional_savings < 0.0 {
        errors.insert(FormField::AdditionalSavings, "Savings cannot be negative.");
    }

    if inputs.new_home_price <= 0.0 {
        errors.insert(
            FormField::NewHomePrice,
            "New home price must be a positive number.",
        );
    }

    if inputs.new_interest_rate <= 0.0 || inputs.new_interest_rate > MAX_INTEREST_RATE_PERCENT {
        errors.insert(
            FormField::NewInterestRate,
            "Please enter a realistic interest rate.",
        );
    }

    if inputs.loan_term <= 0.0 || inputs.loan_term > MAX_LOAN_TERM_YEARS {
        errors.insert(FormField::LoanTerm, "Please enter a realistic loan term.");
    }

    if inputs.annual_taxes < 0.0 {
        errors.insert(FormField::AnnualTaxes, "Taxes cannot be negative.");
    }

    if inputs.annual_insurance < 0.0 {
        errors.insert(FormField::AnnualInsurance, "Insurance cannot be negative.");
    }

    debug!(error_count = errors.len(), "validated calculator inputs");
    errors
}
