//! Integration tests that exercise the loader and the batch export against an
//! on-disk fixture file.

use std::path::Path;

use equity_cli::{csv_loader, export};
use equity_core::{FormField, evaluate};
use pretty_assertions::assert_eq;

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_scenarios.csv")
        .leak()
}

#[test]
fn load_fixture_file_succeeds() {
    let rows = csv_loader::load_from_file(fixture_path()).expect("fixture file should load");

    assert_eq!(rows.len(), 3);
}

#[test]
fn first_row_is_the_reference_scenario() {
    let rows = csv_loader::load_from_file(fixture_path()).unwrap();
    let results = evaluate(&rows[0]).expect("first row is valid");

    assert_eq!(results.home_equity, 250000.0);
    assert_eq!(results.net_equity, 235000.0);
    assert_eq!(results.new_loan_amount, 515000.0);
}

#[test]
fn second_row_needs_no_new_loan() {
    let rows = csv_loader::load_from_file(fixture_path()).unwrap();
    let results = evaluate(&rows[1]).expect("second row is valid");

    assert_eq!(rows[1].current_mortgage, "");
    assert_eq!(results.new_loan_amount, 0.0);
    assert_eq!(results.new_monthly_payment, 0.0);
}

#[test]
fn third_row_fails_validation() {
    let rows = csv_loader::load_from_file(fixture_path()).unwrap();
    let errors = evaluate(&rows[2]).expect_err("mortgage exceeds value");

    assert_eq!(
        errors.get(FormField::CurrentMortgage),
        Some("Mortgage cannot exceed home value.")
    );
}

#[test]
fn batch_export_has_one_line_per_row() {
    let rows = csv_loader::load_from_file(fixture_path()).unwrap();
    let outcomes: Vec<_> = rows.iter().map(evaluate).collect();

    let mut out = Vec::new();
    export::write_outcomes(
        &mut out,
        "row",
        outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| ((i + 1).to_string(), outcome)),
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,250000,235000,"));
    assert!(lines[3].starts_with("3,,,"));
    assert!(lines[3].ends_with("currentMortgage: Mortgage cannot exceed home value."));
}

#[test]
fn load_nonexistent_file_returns_err() {
    let result = csv_loader::load_from_file(Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(csv_loader::CsvLoadError::Io { .. })));
}
