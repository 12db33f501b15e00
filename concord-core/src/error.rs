//! Error types for the core crate.

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    /// The mean was NaN or infinite.
    #[error("mean is not a finite number")]
    MeanNotFinite,

    /// The variance was NaN or infinite.
    #[error("variance is not a finite number")]
    VarianceNotFinite,

    /// The mean fell outside the 1-5 response scale.
    #[error("mean {value} is outside the 1-5 scale")]
    MeanOutOfRange { value: f64 },

    /// The variance was negative.
    #[error("variance {value} is negative")]
    NegativeVariance { value: f64 },
}

/// Errors produced by the `concord-core` crate.
///
/// The engine has exactly one failure mode: the input summary statistics
/// were rejected before any derivation ran. Every violated constraint is
/// reported, not just the first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// One or more input constraints were violated.
    #[error("invalid input: {}", join_violations(.violations))]
    InvalidInput { violations: Vec<Violation> },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_names_every_violation() {
        let err = EngineError::InvalidInput {
            violations: vec![
                Violation::MeanOutOfRange { value: 0.5 },
                Violation::NegativeVariance { value: -1.0 },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("mean 0.5"), "message must name the mean violation: {msg}");
        assert!(msg.contains("variance -1"), "message must name the variance violation: {msg}");
    }

    #[test]
    fn violation_display_is_human_readable() {
        let v = Violation::MeanNotFinite;
        assert_eq!(v.to_string(), "mean is not a finite number");
    }
}
