mod calculation_results;
mod form_field;
mod parsed_inputs;
mod raw_inputs;
mod validation_errors;

pub use calculation_results::CalculationResults;
pub use form_field::FormField;
pub use parsed_inputs::ParsedInputs;
pub use raw_inputs::RawInputs;
pub use validation_errors::ValidationErrors;
