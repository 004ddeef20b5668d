use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FormField;

/// Field-level validation messages, kept in form order.
///
/// An empty set means the inputs are valid. Any entry means no calculation
/// may take place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{}", describe(.0))]
pub struct ValidationErrors(BTreeMap<FormField, String>);

/// Heading line followed by one `label: message` line per field.
fn describe(messages: &BTreeMap<FormField, String>) -> String {
    let mut text =
        String::from("Please correct the errors highlighted below to see your results.\n");
    for (field, message) in messages {
        let _ = writeln!(text, "  {}: {}", field.label(), message);
    }
    text
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(
        &mut self,
        field: FormField,
        message: impl Into<String>,
    ) {
        self.0.insert(field, message.into());
    }

    pub fn get(
        &self,
        field: FormField,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(
        &self,
        field: FormField,
    ) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
