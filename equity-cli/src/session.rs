//! In-memory calculator session.
//!
//! Holds the form as typed and the outcome of the last evaluation. Every
//! change to the form re-runs the full validate-and-compute pipeline and
//! replaces the previous outcome; nothing is patched incrementally.

use equity_core::{
    CalculationResults, FormField, ParsedInputs, RawInputs, ValidationErrors, evaluate,
};
use tracing::debug;

pub type Outcome = Result<CalculationResults, ValidationErrors>;

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    inputs: RawInputs,
    outcome: Outcome,
}

impl CalculatorSession {
    pub fn new(inputs: RawInputs) -> Self {
        let outcome = evaluate(&inputs);
        Self { inputs, outcome }
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn parsed(&self) -> ParsedInputs {
        ParsedInputs::from_raw(&self.inputs)
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The current results, if the form is valid.
    pub fn results(&self) -> Option<&CalculationResults> {
        self.outcome.as_ref().ok()
    }

    /// The current validation errors, if the form is invalid.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.outcome.as_ref().err()
    }

    /// Replaces one field and recomputes everything.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> &Outcome {
        self.inputs.set(field, value);
        self.recompute()
    }

    /// Uses an estimated market value as the current home value.
    pub fn apply_estimate(
        &mut self,
        value: f64,
    ) -> &Outcome {
        debug!(value, "applying estimated home value");
        self.set_field(FormField::CurrentHomeValue, value.to_string())
    }

    /// Market commentary only makes sense for a valid scenario with a price.
    pub fn can_get_insight(&self) -> bool {
        self.results().is_some() && self.parsed().new_home_price > 0.0
    }

    fn recompute(&mut self) -> &Outcome {
        self.outcome = evaluate(&self.inputs);
        &self.outcome
    }
}
