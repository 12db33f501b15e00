//! Display metadata for the quantities a caller renders.
//!
//! The intermediate quantities are part of the engine's contract; the
//! presentation layer shows each one with its letter, label, and a short
//! explanation so the derivation can be audited step by step. The core
//! owns that metadata — the caller only decides where it goes on screen.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluation::Evaluation;

/// One named quantity in the consensus derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Quantity {
    /// Raw group mean (C).
    Mean,
    /// Raw group variance (D).
    Variance,
    /// Scale-folded mean (E).
    TransformedMean,
    /// Upper deviation-band half-width (F).
    UpperBound,
    /// Lower deviation-band half-width (G).
    LowerBound,
    /// Variance in deviation-band units (H).
    TransformedVariance,
    /// Normalization denominator (I).
    NormalizationFactor,
    /// Piecewise cumulative disagreement (J).
    CumulativeDisagreement,
    /// Piecewise consensus core (K).
    ConsensusCore,
    /// The final index (L).
    IndexOfDisagreement,
}

impl Quantity {
    /// Every quantity, in derivation (and display) order.
    pub const ALL: [Quantity; 10] = [
        Quantity::Mean,
        Quantity::Variance,
        Quantity::TransformedMean,
        Quantity::UpperBound,
        Quantity::LowerBound,
        Quantity::TransformedVariance,
        Quantity::NormalizationFactor,
        Quantity::CumulativeDisagreement,
        Quantity::ConsensusCore,
        Quantity::IndexOfDisagreement,
    ];

    /// The single-letter symbol used in the derivation write-up.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Quantity::Mean => 'C',
            Quantity::Variance => 'D',
            Quantity::TransformedMean => 'E',
            Quantity::UpperBound => 'F',
            Quantity::LowerBound => 'G',
            Quantity::TransformedVariance => 'H',
            Quantity::NormalizationFactor => 'I',
            Quantity::CumulativeDisagreement => 'J',
            Quantity::ConsensusCore => 'K',
            Quantity::IndexOfDisagreement => 'L',
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Quantity::Mean => "Mean",
            Quantity::Variance => "Variance",
            Quantity::TransformedMean => "Transformed mean",
            Quantity::UpperBound => "Upper bound",
            Quantity::LowerBound => "Lower bound",
            Quantity::TransformedVariance => "Transformed variance",
            Quantity::NormalizationFactor => "Normalization factor",
            Quantity::CumulativeDisagreement => "Cumulative disagreement",
            Quantity::ConsensusCore => "Consensus core",
            Quantity::IndexOfDisagreement => "Index of Disagreement",
        }
    }

    /// One-sentence explanation shown next to the value.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Quantity::Mean => "Arithmetic mean of the group's responses on the 1-5 scale.",
            Quantity::Variance => "Statistical variance of the group's responses.",
            Quantity::TransformedMean => {
                "The mean folded onto a 1-3 distance-from-center representation."
            }
            Quantity::UpperBound => "Half-width of the upper deviation band at this mean.",
            Quantity::LowerBound => {
                "Half-width of the lower deviation band, clamped at zero."
            }
            Quantity::TransformedVariance => {
                "The variance rescaled into the same units as the deviation bands."
            }
            Quantity::NormalizationFactor => {
                "Total feasible disagreement volume used to scale the index into [0, 1]."
            }
            Quantity::CumulativeDisagreement => {
                "Disagreement volume accumulated across the feasible range."
            }
            Quantity::ConsensusCore => {
                "The portion of the accumulated volume attributable to consensus."
            }
            Quantity::IndexOfDisagreement => {
                "The final index: 0 is maximum consensus, 1 is maximum disagreement."
            }
        }
    }

    /// Read this quantity's value out of an evaluation.
    #[must_use]
    pub fn value_in(self, evaluation: &Evaluation) -> f64 {
        match self {
            Quantity::Mean => evaluation.mean,
            Quantity::Variance => evaluation.variance,
            Quantity::TransformedMean => evaluation.transformed_mean,
            Quantity::UpperBound => evaluation.upper_bound,
            Quantity::LowerBound => evaluation.lower_bound,
            Quantity::TransformedVariance => evaluation.transformed_variance,
            Quantity::NormalizationFactor => evaluation.normalization_factor,
            Quantity::CumulativeDisagreement => evaluation.cumulative_disagreement,
            Quantity::ConsensusCore => evaluation.consensus_core,
            Quantity::IndexOfDisagreement => evaluation.index_of_disagreement,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.symbol())
    }
}
