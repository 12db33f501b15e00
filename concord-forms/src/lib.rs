//! Form boundary for the Concord consensus calculator.
//!
//! Converts free-text field values into typed numbers — or an explicit
//! "incomplete" state — before anything reaches the engine, and maps the
//! engine's index onto the bounded consensus dial. The engine itself
//! knows nothing about any of this.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod field;
pub mod form;
pub mod gauge;

pub use field::{parse_field, FieldState};
pub use form::{CalculatorForm, FieldName, FormStatus};
pub use gauge::GaugeReading;
