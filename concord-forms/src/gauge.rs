//! Bounded consensus indicator derived from the Index of Disagreement.

use std::fmt;

use concord_core::Evaluation;
use serde::{Deserialize, Serialize};

/// Needle position for the consensus dial, as a fraction of full scale.
///
/// The engine's index runs 0 (maximum consensus) to 1 (maximum
/// disagreement); the dial inverts it so a full needle reads as full
/// agreement. The fraction is always inside `[0, 1]`, whatever index
/// value arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct GaugeReading(f64);

impl GaugeReading {
    /// Build a reading from an Index of Disagreement value.
    ///
    /// Indexes outside the unit interval (possible for summaries no
    /// whole-number response set can produce) land on the nearest end of
    /// the dial; NaN reads as zero consensus.
    #[must_use]
    pub fn from_index(index_of_disagreement: f64) -> Self {
        let inverted = 1.0 - index_of_disagreement;
        if inverted.is_nan() {
            Self(0.0)
        } else {
            Self(inverted.clamp(0.0, 1.0))
        }
    }

    /// Build a reading straight from an evaluation.
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self::from_index(evaluation.index_of_disagreement)
    }

    /// Needle position in `[0.0, 1.0]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Needle position in `[0.0, 100.0]`.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for GaugeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}
