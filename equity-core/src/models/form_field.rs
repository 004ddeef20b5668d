use serde::{Deserialize, Serialize};

/// One of the twelve calculator inputs, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CurrentHomeValue,
    CurrentMortgage,
    CurrentMonthlyPayment,
    OtherDebts,
    MonthlyDebtPayments,
    AdditionalSavings,
    NewHomePrice,
    NewInterestRate,
    LoanTerm,
    AnnualTaxes,
    AnnualInsurance,
    DebtPayoffPercentage,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        Self::CurrentHomeValue,
        Self::CurrentMortgage,
        Self::CurrentMonthlyPayment,
        Self::OtherDebts,
        Self::MonthlyDebtPayments,
        Self::AdditionalSavings,
        Self::NewHomePrice,
        Self::NewInterestRate,
        Self::LoanTerm,
        Self::AnnualTaxes,
        Self::AnnualInsurance,
        Self::DebtPayoffPercentage,
    ];

    /// The camelCase name used in config files, CSV headers and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentHomeValue => "currentHomeValue",
            Self::CurrentMortgage => "currentMortgage",
            Self::CurrentMonthlyPayment => "currentMonthlyPayment",
            Self::OtherDebts => "otherDebts",
            Self::MonthlyDebtPayments => "monthlyDebtPayments",
            Self::AdditionalSavings => "additionalSavings",
            Self::NewHomePrice => "newHomePrice",
            Self::NewInterestRate => "newInterestRate",
            Self::LoanTerm => "loanTerm",
            Self::AnnualTaxes => "annualTaxes",
            Self::AnnualInsurance => "annualInsurance",
            Self::DebtPayoffPercentage => "debtPayoffPercentage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentHomeValue => "Current Home Value",
            Self::CurrentMortgage => "Current Mortgage Balance",
            Self::CurrentMonthlyPayment => "Current Monthly Payment",
            Self::OtherDebts => "Other Debts",
            Self::MonthlyDebtPayments => "Monthly Debt Payments",
            Self::AdditionalSavings => "Additional Savings",
            Self::NewHomePrice => "New Home Price",
            Self::NewInterestRate => "New Interest Rate (%)",
            Self::LoanTerm => "Loan Term (Years)",
            Self::AnnualTaxes => "Annual Property Taxes",
            Self::AnnualInsurance => "Annual Home Insurance",
            Self::DebtPayoffPercentage => "Debt Payoff Priority (%)",
        }
    }

    /// Accepts the camelCase name as well as kebab-case and snake_case
    /// spellings (`new-home-price`, `new_home_price`).
    pub fn parse(s: &str) -> Option<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == wanted)
    }
}
