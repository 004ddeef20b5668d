//! Plain-text and JSON presentation of a calculation.

use std::fmt;

use serde::Serialize;

use equity_core::calculations::common::format_currency;
use equity_core::calculations::{OutlayBar, PaymentComparison};
use equity_core::{CalculationResults, ParsedInputs};

const BAR_WIDTH: usize = 40;

/// Text the user can paste to share their outcome.
pub fn share_summary(results: &CalculationResults) -> String {
    format!(
        "I just used the Equity to Opportunity Calculator! My estimated new monthly payment \
         could be {}. I could use {} for a down payment after potentially paying off {} in \
         debt. Check out the calculator for yourself!",
        format_currency(results.new_monthly_payment),
        format_currency(results.net_equity),
        format_currency(results.debts_paid_off)
    )
}

/// `+$1,622` for an increase, `-$250` for a decrease.
fn signed_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

fn segment(share: f64) -> usize {
    let cells = (share / 100.0 * BAR_WIDTH as f64).round();
    if cells.is_finite() && cells > 0.0 {
        (cells as usize).min(BAR_WIDTH)
    } else {
        0
    }
}

/// Draws `#` for the housing segment and `=` for the debt segment.
fn draw_bar(bar: &OutlayBar) -> String {
    let housing = segment(bar.housing_share);
    let debt = segment(bar.debt_share).min(BAR_WIDTH - housing);
    format!(
        "[{}{}{}]",
        "#".repeat(housing),
        "=".repeat(debt),
        " ".repeat(BAR_WIDTH - housing - debt)
    )
}

/// Human-readable breakdown of one valid scenario.
pub struct Report<'a> {
    inputs: ParsedInputs,
    results: &'a CalculationResults,
}

impl<'a> Report<'a> {
    pub fn new(
        inputs: ParsedInputs,
        results: &'a CalculationResults,
    ) -> Self {
        Self { inputs, results }
    }

    pub fn comparison(&self) -> PaymentComparison {
        PaymentComparison::new(self.results, self.inputs.monthly_debt_payments)
    }

    /// Serializes results, comparison and share text as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct JsonReport<'r> {
            results: &'r CalculationResults,
            comparison: PaymentComparison,
            share_summary: String,
        }

        serde_json::to_string_pretty(&JsonReport {
            results: self.results,
            comparison: self.comparison(),
            share_summary: share_summary(self.results),
        })
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "  {label:<32}{value:>14}")
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.results;
        let comparison = self.comparison();

        writeln!(f, "Your Financial Snapshot")?;
        row(f, "Total Home Equity", &format_currency(r.home_equity))?;
        row(f, "Available for Down Payment", &format_currency(r.net_equity))?;
        row(f, "New Loan Amount", &format_currency(r.new_loan_amount))?;
        row(f, "New Monthly PITI", &format_currency(r.new_monthly_payment))?;
        row(
            f,
            "  Principal & Interest",
            &format_currency(r.new_monthly_principal_and_interest),
        )?;
        if r.net_equity < 0.0 {
            writeln!(
                f,
                "  Warning: available equity is negative; the new loan must also cover the shortfall."
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Equity Breakdown")?;
        row(f, "Total Home Equity", &format_currency(r.home_equity))?;
        row(
            f,
            "- Less Debts Paid Off",
            &format!("-{}", format_currency(r.debts_paid_off)),
        )?;
        row(
            f,
            "+ Plus Additional Savings",
            &format!("+{}", format_currency(self.inputs.additional_savings)),
        )?;
        row(f, "Available for Down Payment", &format_currency(r.net_equity))?;

        writeln!(f)?;
        writeln!(f, "Monthly Payment Breakdown")?;
        row(
            f,
            "Total Old Monthly Payments",
            &format_currency(comparison.before.total),
        )?;
        row(
            f,
            "Total New Monthly Payments",
            &format_currency(comparison.after.total),
        )?;
        row(f, "Overall Monthly Change", &signed_currency(r.payment_difference))?;

        writeln!(f)?;
        writeln!(f, "Monthly Payment Transformation (# mortgage, = other debts)")?;
        writeln!(
            f,
            "  Before {} {}",
            draw_bar(&comparison.before),
            format_currency(comparison.before.total)
        )?;
        writeln!(
            f,
            "  After  {} {}",
            draw_bar(&comparison.after),
            format_currency(comparison.after.total)
        )?;

        if r.monthly_debt_payments_eliminated > 0.0 {
            writeln!(f)?;
            writeln!(
                f,
                "By moving, you could eliminate {} in high-interest debt payments each month.",
                format_currency(r.monthly_debt_payments_eliminated)
            )?;
        }
        Ok(())
    }
}
