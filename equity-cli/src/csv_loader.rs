//! CSV loader for batches of calculator scenarios.
//!
//! ## CSV Format
//!
//! One scenario per row. Headers are the camelCase input names and are
//! matched by name, so column order does **not** matter. Kebab-case and
//! snake_case spellings are accepted as well. Every column is optional: a
//! missing column or an empty cell is an empty input, exactly as if the form
//! field had been left blank.
//!
//! | Column                  | Notes                             |
//! |-------------------------|-----------------------------------|
//! | `currentHomeValue`      |                                   |
//! | `currentMortgage`       |                                   |
//! | `currentMonthlyPayment` |                                   |
//! | `otherDebts`            |                                   |
//! | `monthlyDebtPayments`   |                                   |
//! | `additionalSavings`     |                                   |
//! | `newHomePrice`          |                                   |
//! | `newInterestRate`       | annual percent, e.g. `6.5`        |
//! | `loanTerm`              | whole years                       |
//! | `annualTaxes`           |                                   |
//! | `annualInsurance`       |                                   |
//! | `debtPayoffPercentage`  | 0 to 100                          |
//!
//! Values are kept as text; they are parsed leniently when the scenario is
//! evaluated. Quote values that contain thousands separators (`"1,500"`).
//!
//! ### Example
//!
//! ```csv
//! currentHomeValue,currentMortgage,newHomePrice,newInterestRate,loanTerm
//! 500000,250000,750000,6.5,30
//! ```
use std::path::Path;

use equity_core::{FormField, RawInputs};

/// Errors that can occur while loading scenario CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV reader failed (bad structure, ragged rows, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A header does not name a calculator input.
    #[error("unrecognised column '{0}'")]
    UnknownColumn(String),
}

/// Parse CSV text and return one [`RawInputs`] per data row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::UnknownColumn`] if any header is not an input name.
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
pub fn load_from_str(input: &str) -> Result<Vec<RawInputs>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let fields = reader
        .headers()?
        .iter()
        .map(|name| FormField::parse(name).ok_or_else(|| CsvLoadError::UnknownColumn(name.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    reader
        .records()
        .map(|record| -> Result<RawInputs, CsvLoadError> {
            let record = record?;
            let mut raw = RawInputs::default();
            for (field, value) in fields.iter().zip(record.iter()) {
                raw.set(*field, value);
            }
            Ok(raw)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<RawInputs>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_CSV: &str = "\
currentHomeValue,currentMortgage,currentMonthlyPayment,otherDebts,monthlyDebtPayments,additionalSavings,newHomePrice,newInterestRate,loanTerm,annualTaxes,annualInsurance,debtPayoffPercentage
500000,250000,1800,25000,1500,10000,750000,6.5,30,8000,2000,100
";

    const SPARSE_CSV: &str = "\
newHomePrice,currentHomeValue,newInterestRate
650000,400000,
700000,,7
";

    // -----------------------------------------------------------------------
    // 1. Every column populated
    // -----------------------------------------------------------------------
    #[test]
    fn full_row_matches_starter_with_rate() {
        let rows = load_from_str(FULL_CSV).expect("should parse full CSV");

        let mut expected = RawInputs::starter();
        expected.new_interest_rate = "6.5".to_string();
        assert_eq!(rows, vec![expected]);
    }

    // -----------------------------------------------------------------------
    // 2. Column order and missing columns
    // -----------------------------------------------------------------------
    #[test]
    fn column_order_does_not_matter() {
        let rows = load_from_str(SPARSE_CSV).expect("should parse");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].new_home_price, "650000");
        assert_eq!(rows[0].current_home_value, "400000");
        assert_eq!(rows[1].new_interest_rate, "7");
    }

    #[test]
    fn missing_columns_and_blank_cells_are_empty() {
        let rows = load_from_str(SPARSE_CSV).expect("should parse");

        assert_eq!(rows[0].new_interest_rate, "");
        assert_eq!(rows[1].current_home_value, "");
        assert_eq!(rows[0].loan_term, "");
    }

    #[test]
    fn kebab_case_headers_are_accepted() {
        let rows = load_from_str("new-home-price,loan_term\n500000,15\n").expect("should parse");

        assert_eq!(rows[0].new_home_price, "500000");
        assert_eq!(rows[0].loan_term, "15");
    }

    #[test]
    fn quoted_thousands_separators_survive() {
        let rows = load_from_str("additionalSavings\n\"12,500\"\n").expect("should parse");

        assert_eq!(rows[0].additional_savings, "12,500");
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let rows = load_from_str(" newHomePrice , loanTerm \n 500000 , 30 \n").expect("should parse");

        assert_eq!(rows[0].new_home_price, "500000");
        assert_eq!(rows[0].loan_term, "30");
    }

    // -----------------------------------------------------------------------
    // 3. Errors
    // -----------------------------------------------------------------------
    #[test]
    fn unknown_column_is_rejected() {
        match load_from_str("newHomePrice,boatValue\n1,2\n") {
            Err(CsvLoadError::UnknownColumn(name)) => assert_eq!(name, "boatValue"),
            other => panic!("expected UnknownColumn, got {:?}", other),
        }
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        match load_from_str("newHomePrice,loanTerm\n1,2,3\n") {
            Err(CsvLoadError::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn header_only_yields_no_rows() {
        let rows = load_from_str("newHomePrice,loanTerm\n").expect("header-only CSV is valid");
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let rows = load_from_str("").expect("empty string yields zero rows");
        assert!(rows.is_empty());
    }
}
