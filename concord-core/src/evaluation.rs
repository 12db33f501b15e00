use serde::{Deserialize, Serialize};

/// The complete outcome of one consensus derivation.
///
/// An `Evaluation` is immutable once created and always fully populated:
/// either every quantity below was derived, or the engine returned an
/// error and no record exists at all.
///
/// The intermediate quantities are part of the contract, not internals.
/// Callers display them alongside the final index so a reader can audit
/// each step of the derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Evaluation {
    /// Raw group mean on the 1-5 scale (C).
    pub mean: f64,
    /// Raw group variance (D).
    pub variance: f64,
    /// Mean folded onto the 1-3 distance-from-center representation (E).
    pub transformed_mean: f64,
    /// Half-width of the upper deviation band (F).
    pub upper_bound: f64,
    /// Half-width of the lower deviation band, clamped at zero (G).
    pub lower_bound: f64,
    /// Variance rescaled into deviation-band units (H).
    pub transformed_variance: f64,
    /// Total feasible disagreement volume at this scale position (I).
    pub normalization_factor: f64,
    /// Cumulative disagreement over the feasible range (J).
    pub cumulative_disagreement: f64,
    /// Consensus core subtracted from the cumulative disagreement (K).
    pub consensus_core: f64,
    /// The Index of Disagreement (L): 0 is maximum consensus, 1 maximum
    /// disagreement.
    pub index_of_disagreement: f64,
}
