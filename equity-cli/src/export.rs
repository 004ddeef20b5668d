//! CSV export of calculation outcomes.
//!
//! One row per scenario: a key column naming the scenario, the headline
//! results rounded to cents, and an `errors` column that is filled only when
//! the scenario failed validation (the result columns are then empty).

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use equity_core::calculations::common::round_cents;

use crate::session::Outcome;

#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    key: &'a str,
    home_equity: Option<Decimal>,
    net_equity: Option<Decimal>,
    debts_paid_off: Option<Decimal>,
    new_loan_amount: Option<Decimal>,
    new_monthly_payment: Option<Decimal>,
    payment_difference: Option<Decimal>,
    remaining_monthly_debt_payments: Option<Decimal>,
    current_monthly_payment: Option<Decimal>,
    new_monthly_principal_and_interest: Option<Decimal>,
    monthly_debt_payments_eliminated: Option<Decimal>,
    errors: String,
}

pub const RESULT_HEADERS: [&str; 11] = [
    "homeEquity",
    "netEquity",
    "debtsPaidOff",
    "newLoanAmount",
    "newMonthlyPayment",
    "paymentDifference",
    "remainingMonthlyDebtPayments",
    "currentMonthlyPayment",
    "newMonthlyPrincipalAndInterest",
    "monthlyDebtPaymentsEliminated",
    "errors",
];

impl<'a> OutcomeRow<'a> {
    fn new(
        key: &'a str,
        outcome: &Outcome,
    ) -> Self {
        match outcome {
            Ok(r) => Self {
                key,
                home_equity: Some(round_cents(r.home_equity)),
                net_equity: Some(round_cents(r.net_equity)),
                debts_paid_off: Some(round_cents(r.debts_paid_off)),
                new_loan_amount: Some(round_cents(r.new_loan_amount)),
                new_monthly_payment: Some(round_cents(r.new_monthly_payment)),
                payment_difference: Some(round_cents(r.payment_difference)),
                remaining_monthly_debt_payments: Some(round_cents(
                    r.remaining_monthly_debt_payments,
                )),
                current_monthly_payment: Some(round_cents(r.current_monthly_payment)),
                new_monthly_principal_and_interest: Some(round_cents(
                    r.new_monthly_principal_and_interest,
                )),
                monthly_debt_payments_eliminated: Some(round_cents(
                    r.monthly_debt_payments_eliminated,
                )),
                errors: String::new(),
            },
            Err(errors) => Self {
                key,
                home_equity: None,
                net_equity: None,
                debts_paid_off: None,
                new_loan_amount: None,
                new_monthly_payment: None,
                payment_difference: None,
                remaining_monthly_debt_payments: None,
                current_monthly_payment: None,
                new_monthly_principal_and_interest: None,
                monthly_debt_payments_eliminated: None,
                errors: errors
                    .iter()
                    .map(|(field, msg)| format!("{}: {}", field.as_str(), msg))
                    .collect::<Vec<_>>()
                    .join("; "),
            },
        }
    }
}

/// Writes a header row (`key_header` followed by [`RESULT_HEADERS`]) and one
/// row per outcome.
pub fn write_outcomes<'a, W, I>(
    writer: W,
    key_header: &str,
    rows: I,
) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = (String, &'a Outcome)>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = vec![key_header];
    header.extend(RESULT_HEADERS);
    csv_writer.write_record(&header)?;

    for (key, outcome) in rows {
        csv_writer.serialize(OutcomeRow::new(&key, outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}
