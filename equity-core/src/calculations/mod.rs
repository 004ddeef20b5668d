//! Calculation engine for the equity-to-opportunity scenario.
//!
//! [`amortization`] prices the new loan, [`scenario`] composes the complete
//! results record, and [`comparison`] breaks the monthly outlay down for
//! display. [`common`] holds the rounding rules used when values leave the
//! engine.

pub mod amortization;
pub mod common;
pub mod comparison;
pub mod scenario;

pub use amortization::monthly_payment;
pub use comparison::{OutlayBar, PaymentComparison};
pub use scenario::{compute, evaluate};
