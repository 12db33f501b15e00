//! The two-field calculator form and its readiness classification.
//!
//! A form snapshot is just the raw text of the two inputs. Readiness is
//! computed fresh from the text on every call; nothing is cached and no
//! state survives between snapshots. Debouncing rapid re-evaluation is
//! the caller's concern, not the form's.

use std::fmt;

use concord_core::{evaluate, EngineError, Evaluation};
use serde::{Deserialize, Serialize};

use crate::field::{parse_field, FieldState};

/// Which form field a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldName {
    Mean,
    Variance,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldName::Mean => write!(f, "mean"),
            FieldName::Variance => write!(f, "variance"),
        }
    }
}

/// Raw text snapshot of the calculator's two inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CalculatorForm {
    /// Raw text of the mean field.
    pub mean: String,
    /// Raw text of the variance field.
    pub variance: String,
}

/// Readiness of a form snapshot.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormStatus {
    /// At least one field is still empty; nothing to compute yet.
    Incomplete,
    /// Every field is filled but at least one does not parse.
    Malformed {
        /// The fields that failed to parse.
        fields: Vec<FieldName>,
    },
    /// Both fields parsed to finite numbers.
    Ready { mean: f64, variance: f64 },
}

impl CalculatorForm {
    /// Create a snapshot from the two raw field texts.
    pub fn new(mean: impl Into<String>, variance: impl Into<String>) -> Self {
        Self { mean: mean.into(), variance: variance.into() }
    }

    /// Classify the snapshot.
    ///
    /// An empty field anywhere means [`FormStatus::Incomplete`] — a
    /// half-typed form is never an error. Only a fully filled form with
    /// unparseable text is [`FormStatus::Malformed`].
    #[must_use]
    pub fn status(&self) -> FormStatus {
        let mean = parse_field(&self.mean);
        let variance = parse_field(&self.variance);

        if mean == FieldState::Empty || variance == FieldState::Empty {
            return FormStatus::Incomplete;
        }

        let mut malformed = Vec::new();
        if matches!(mean, FieldState::Malformed { .. }) {
            malformed.push(FieldName::Mean);
        }
        if matches!(variance, FieldState::Malformed { .. }) {
            malformed.push(FieldName::Variance);
        }
        if !malformed.is_empty() {
            return FormStatus::Malformed { fields: malformed };
        }

        match (mean, variance) {
            (FieldState::Value(mean), FieldState::Value(variance)) => {
                FormStatus::Ready { mean, variance }
            }
            // Both Empty and Malformed were handled above.
            _ => FormStatus::Incomplete,
        }
    }

    /// Evaluate the form if it is ready.
    ///
    /// Returns `None` while the form is incomplete or malformed — free
    /// text never reaches the engine. A `Some` carries the engine's own
    /// verdict on the parsed numbers.
    #[must_use]
    pub fn submit(&self) -> Option<Result<Evaluation, EngineError>> {
        match self.status() {
            FormStatus::Ready { mean, variance } => Some(evaluate(mean, variance)),
            FormStatus::Incomplete => None,
            FormStatus::Malformed { fields } => {
                tracing::debug!(fields = ?fields, "form submitted with unparseable fields");
                None
            }
        }
    }
}
