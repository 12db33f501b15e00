//! Core consensus engine for the Concord calculator.
//!
//! Maps a group's reported (mean, variance) on the 1-5 Likert scale to
//! the Index of Disagreement together with the named intermediate
//! quantities of the derivation. The engine is a stateless pure
//! function: no I/O, no shared state, safe to call concurrently at any
//! frequency with arbitrary (including invalid) input.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod engine;
pub mod error;
pub mod evaluation;
pub mod examples;
pub mod quantity;
pub mod report;
pub mod scale;

pub use engine::evaluate;
pub use error::{EngineError, Violation};
pub use evaluation::Evaluation;
pub use quantity::Quantity;
pub use report::EvaluationReport;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::example_inputs;

    #[test]
    fn example_inputs_all_evaluate() {
        let inputs = example_inputs();
        assert_eq!(inputs.len(), 3);
        for input in &inputs {
            assert!(
                evaluate(input.mean, input.variance).is_ok(),
                "example '{}' must be a valid summary",
                input.name
            );
        }
    }

    #[test]
    fn example_extremes_pin_the_index_range() {
        let inputs = example_inputs();

        let unanimous = &inputs[1];
        assert_eq!(unanimous.name, "unanimous-extreme");
        let r = match evaluate(unanimous.mean, unanimous.variance) {
            Ok(r) => r,
            Err(e) => panic!("unanimous example failed: {e}"),
        };
        assert_eq!(r.index_of_disagreement, 0.0);

        let split = &inputs[2];
        assert_eq!(split.name, "balanced-split");
        let r = match evaluate(split.mean, split.variance) {
            Ok(r) => r,
            Err(e) => panic!("split example failed: {e}"),
        };
        assert_eq!(r.index_of_disagreement, 1.0);
    }

    #[test]
    fn public_surface_round_trip() {
        let report = EvaluationReport::compute(3.0, 1.0);
        assert!(report.ok);
        let values = match report.values {
            Some(v) => v,
            None => panic!("valid report must carry values"),
        };
        for q in Quantity::ALL {
            assert!(
                q.value_in(&values).is_finite(),
                "{q} must be finite for a valid summary"
            );
        }
    }

    #[test]
    fn error_messages_are_caller_displayable() {
        let err = match evaluate(7.0, -2.0) {
            Err(e) => e,
            Ok(_) => panic!("out-of-scale input must be rejected"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input:"), "unexpected prefix: {msg}");
        assert!(msg.contains("7"), "message must carry the offending mean: {msg}");
        assert!(msg.contains("-2"), "message must carry the offending variance: {msg}");
    }
}
