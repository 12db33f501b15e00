//! Canonical worked inputs demonstrating the derivation.
//!
//! These three summaries cover the interesting positions on the scale:
//! the center with moderate spread, a unanimous extreme where the
//! feasible range collapses, and the maximal two-point split.

use serde::Serialize;

/// A labelled (mean, variance) summary with the story behind it.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ExampleInput {
    /// Short identifier (e.g. `"center-of-scale"`).
    pub name: &'static str,
    /// Group mean on the 1-5 scale.
    pub mean: f64,
    /// Group variance.
    pub variance: f64,
    /// What this summary represents.
    pub summary: &'static str,
}

/// Returns the three canonical example inputs.
#[must_use]
pub fn example_inputs() -> Vec<ExampleInput> {
    vec![
        ExampleInput {
            name: "center-of-scale",
            mean: 3.0,
            variance: 1.0,
            summary: "Responses centered on the midpoint with moderate spread; \
                      the transformed variance lands exactly on a band boundary.",
        },
        ExampleInput {
            name: "unanimous-extreme",
            mean: 5.0,
            variance: 0.0,
            summary: "Everyone picked 5; the feasible disagreement range collapses \
                      and the index is zero by definition.",
        },
        ExampleInput {
            name: "balanced-split",
            mean: 3.0,
            variance: 4.0,
            summary: "Half the group at 1 and half at 5 - the most polarized \
                      summary the scale admits, driving the index to one.",
        },
    ]
}
