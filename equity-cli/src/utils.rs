use equity_core::{FormField, RawInputs};
use thiserror::Error;

/// Error returned when a `field=value` override cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("expected FIELD=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Parses a `--set` argument such as `newHomePrice=650000` or
/// `new-interest-rate=6.5`.
///
/// Only the field name is checked; the value is kept as typed, since the
/// calculator accepts free text.
pub fn parse_assignment(s: &str) -> Result<(FormField, String), AssignmentError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingEquals(s.to_string()))?;
    let field =
        FormField::parse(name).ok_or_else(|| AssignmentError::UnknownField(name.trim().to_string()))?;
    Ok((field, value.to_string()))
}

/// Applies overrides in order; a later value for the same field wins.
pub fn apply_assignments(
    raw: &mut RawInputs,
    assignments: &[(FormField, String)],
) {
    for (field, value) in assignments {
        tracing::debug!(field = field.as_str(), value = %value, "input override");
        raw.set(*field, value.clone());
    }
}
