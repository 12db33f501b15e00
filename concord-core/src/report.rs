//! Caller-facing outcome record.

use serde::Serialize;

use crate::engine::evaluate;
use crate::error::EngineError;
use crate::evaluation::Evaluation;

/// The structured outcome handed to the presentation layer.
///
/// A report is either valid — `ok` with every derived quantity present —
/// or invalid — `ok` false with only a human-readable message. Never a
/// mix of the two.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct EvaluationReport {
    /// Whether the input was accepted and the derivation ran.
    pub ok: bool,
    /// The derived quantities; present iff `ok`.
    #[serde(flatten)]
    pub values: Option<Evaluation>,
    /// Why the input was rejected; present iff `!ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationReport {
    /// Evaluate a (mean, variance) summary straight into a report.
    #[must_use]
    pub fn compute(mean: f64, variance: f64) -> Self {
        evaluate(mean, variance).into()
    }
}

impl From<Result<Evaluation, EngineError>> for EvaluationReport {
    fn from(result: Result<Evaluation, EngineError>) -> Self {
        match result {
            Ok(values) => Self { ok: true, values: Some(values), error: None },
            Err(e) => Self { ok: false, values: None, error: Some(e.to_string()) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_report_serializes_values_and_no_error() {
        let report = EvaluationReport::compute(3.0, 1.0);
        assert!(report.ok);
        let json = match serde_json::to_value(&report) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["ok"], true);
        assert_eq!(json["index_of_disagreement"], 0.125);
        assert!(json.get("error").is_none(), "valid report must not carry an error");
    }

    #[test]
    fn invalid_report_serializes_error_and_no_values() {
        let report = EvaluationReport::compute(0.5, -1.0);
        assert!(!report.ok);
        let json = match serde_json::to_value(&report) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["ok"], false);
        assert!(json.get("index_of_disagreement").is_none(), "no derived fields on failure");
        assert!(json.get("mean").is_none(), "no echo of rejected input");
        let msg = match json["error"].as_str() {
            Some(s) => s,
            None => panic!("error message must be present"),
        };
        assert!(msg.contains("invalid input"), "unexpected message: {msg}");
    }

    #[test]
    fn report_is_never_a_mix() {
        let valid = EvaluationReport::compute(2.0, 0.5);
        assert!(valid.values.is_some() && valid.error.is_none());

        let invalid = EvaluationReport::compute(f64::NAN, 0.5);
        assert!(invalid.values.is_none() && invalid.error.is_some());
    }
}
