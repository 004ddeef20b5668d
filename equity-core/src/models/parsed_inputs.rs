use serde::{Deserialize, Serialize};

use super::RawInputs;
use crate::parse::{parse_number, parse_whole_number};

/// Numeric projection of [`RawInputs`].
///
/// Currency amounts are in dollars, `new_interest_rate` is an annual
/// percentage (6.5 means 6.5%), `loan_term` is whole years and
/// `debt_payoff_fraction` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedInputs {
    pub current_home_value: f64,
    pub current_mortgage: f64,
    pub current_monthly_payment: f64,
    pub other_debts: f64,
    pub monthly_debt_payments: f64,
    pub additional_savings: f64,
    pub new_home_price: f64,
    pub new_interest_rate: f64,
    pub loan_term: f64,
    pub annual_taxes: f64,
    pub annual_insurance: f64,
    pub debt_payoff_fraction: f64,
}

impl ParsedInputs {
    /// Parses every field of `raw`; unparsable or empty text becomes 0.
    pub fn from_raw(raw: &RawInputs) -> Self {
        Self {
            current_home_value: parse_number(&raw.current_home_value),
            current_mortgage: parse_number(&raw.current_mortgage),
            current_monthly_payment: parse_number(&raw.current_monthly_payment),
            other_debts: parse_number(&raw.other_debts),
            monthly_debt_payments: parse_number(&raw.monthly_debt_payments),
            additional_savings: parse_number(&raw.additional_savings),
            new_home_price: parse_number(&raw.new_home_price),
            new_interest_rate: parse_number(&raw.new_interest_rate),
            loan_term: parse_whole_number(&raw.loan_term),
            annual_taxes: parse_number(&raw.annual_taxes),
            annual_insurance: parse_number(&raw.annual_insurance),
            debt_payoff_fraction: (parse_number(&raw.debt_payoff_percentage) / 100.0)
                .clamp(0.0, 1.0),
        }
    }
}

impl From<&RawInputs> for ParsedInputs {
    fn from(raw: &RawInputs) -> Self {
        Self::from_raw(raw)
    }
}
