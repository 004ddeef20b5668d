use serde::{Deserialize, Serialize};

use super::FormField;

/// Form values exactly as the user typed them.
///
/// Every field is free text so that partially entered or empty values can be
/// held without failing. Conversion to numbers happens in
/// [`ParsedInputs::from_raw`](super::ParsedInputs::from_raw).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    pub current_home_value: String,
    pub current_mortgage: String,
    pub current_monthly_payment: String,
    pub other_debts: String,
    pub monthly_debt_payments: String,
    pub additional_savings: String,
    pub new_home_price: String,
    pub new_interest_rate: String,
    pub loan_term: String,
    pub annual_taxes: String,
    pub annual_insurance: String,
    /// Share of `other_debts` paid off from equity, 0–100.
    pub debt_payoff_percentage: String,
}

impl RawInputs {
    /// The form a first-time visitor starts from. The interest rate is left
    /// blank on purpose so that the user has to supply a current rate.
    pub fn starter() -> Self {
        Self {
            current_home_value: "500000".to_string(),
            current_mortgage: "250000".to_string(),
            current_monthly_payment: "1800".to_string(),
            other_debts: "25000".to_string(),
            monthly_debt_payments: "1500".to_string(),
            additional_savings: "10000".to_string(),
            new_home_price: "750000".to_string(),
            new_interest_rate: String::new(),
            loan_term: "30".to_string(),
            annual_taxes: "8000".to_string(),
            annual_insurance: "2000".to_string(),
            debt_payoff_percentage: "100".to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CurrentHomeValue => &self.current_home_value,
            FormField::CurrentMortgage => &self.current_mortgage,
            FormField::CurrentMonthlyPayment => &self.current_monthly_payment,
            FormField::OtherDebts => &self.other_debts,
            FormField::MonthlyDebtPayments => &self.monthly_debt_payments,
            FormField::AdditionalSavings => &self.additional_savings,
            FormField::NewHomePrice => &self.new_home_price,
            FormField::NewInterestRate => &self.new_interest_rate,
            FormField::LoanTerm => &self.loan_term,
            FormField::AnnualTaxes => &self.annual_taxes,
            FormField::AnnualInsurance => &self.annual_insurance,
            FormField::DebtPayoffPercentage => &self.debt_payoff_percentage,
        }
    }

    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            FormField::CurrentHomeValue => &mut self.current_home_value,
            FormField::CurrentMortgage => &mut self.current_mortgage,
            FormField::CurrentMonthlyPayment => &mut self.current_monthly_payment,
            FormField::OtherDebts => &mut self.other_debts,
            FormField::MonthlyDebtPayments => &mut self.monthly_debt_payments,
            FormField::AdditionalSavings => &mut self.additional_savings,
            FormField::NewHomePrice => &mut self.new_home_price,
            FormField::NewInterestRate => &mut self.new_interest_rate,
            FormField::LoanTerm => &mut self.loan_term,
            FormField::AnnualTaxes => &mut self.annual_taxes,
            FormField::AnnualInsurance => &mut self.annual_insurance,
            FormField::DebtPayoffPercentage => &mut self.debt_payoff_percentage,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_then_get_addresses_the_same_field() {
        let mut raw = RawInputs::default();
        for (idx, field) in FormField::ALL.into_iter().enumerate() {
            raw.set(field, idx.to_string());
        }
        for (idx, field) in FormField::ALL.into_iter().enumerate() {
            assert_eq!(raw.get(field), idx.to_string());
        }
    }

    #[test]
    fn starter_leaves_interest_rate_blank() {
        let raw = RawInputs::starter();

        assert_eq!(raw.get(FormField::NewInterestRate), "");
        assert_eq!(raw.get(FormField::CurrentHomeValue), "500000");
        assert_eq!(raw.get(FormField::DebtPayoffPercentage), "100");
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields_blank() {
        let raw: RawInputs =
            serde_json::from_str(r#"{"newHomePrice":"600000","loanTerm":"15"}"#).unwrap();

        assert_eq!(raw.new_home_price, "600000");
        assert_eq!(raw.loan_term, "15");
        assert_eq!(raw.current_home_value, "");
    }
}
