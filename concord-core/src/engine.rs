//! The consensus engine — derives the Index of Disagreement from a
//! group's (mean, variance) summary on the 1-5 response scale.
//!
//! The derivation is a fixed sequence: fold the mean onto the lower half
//! of the scale, compute the deviation-band half-widths, rescale the
//! variance into band units, then integrate the piecewise disagreement
//! and consensus volumes and normalize their difference. Every branch is
//! total for validated input, including the degenerate position at the
//! scale ends where the feasible range collapses to a point.

use crate::error::{EngineError, Violation};
use crate::evaluation::Evaluation;
use crate::scale::{SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN, SCALE_REFLECTION};

/// Evaluate one (mean, variance) summary.
///
/// Validation runs first and collects every violated constraint; no
/// derivation is performed on rejected input. On accepted input all
/// derived quantities are produced together — there are no partial
/// results. The call is pure: identical inputs yield bit-identical
/// outputs.
///
/// # Errors
/// Returns [`EngineError::InvalidInput`] if `mean` or `variance` is not
/// finite, `mean` is outside `[1.0, 5.0]`, or `variance` is negative.
pub fn evaluate(mean: f64, variance: f64) -> Result<Evaluation, EngineError> {
    validate(mean, variance)?;

    let e = fold_mean(mean);
    let f = (e - 1.0) / 2.0;
    let g = (e - 2.0).max(0.0);
    let h = (variance + e.powi(2) - 3.0 * e + 2.0) / 2.0;
    let i = 2.0 * f.powi(3) - g.powi(3);

    let j = cumulative_disagreement(h, f, i);
    let k = consensus_core(h, g, i);
    let l = if i == 0.0 { 0.0 } else { (j - k) / i };

    tracing::debug!(
        mean,
        variance,
        transformed_mean = e,
        normalization_factor = i,
        index_of_disagreement = l,
        "consensus evaluation complete"
    );

    Ok(Evaluation {
        mean,
        variance,
        transformed_mean: e,
        upper_bound: f,
        lower_bound: g,
        transformed_variance: h,
        normalization_factor: i,
        cumulative_disagreement: j,
        consensus_core: k,
        index_of_disagreement: l,
    })
}

/// Check the input constraints, collecting every violation.
fn validate(mean: f64, variance: f64) -> Result<(), EngineError> {
    let mut violations = Vec::new();

    if !mean.is_finite() {
        violations.push(Violation::MeanNotFinite);
    } else if !(SCALE_MIN..=SCALE_MAX).contains(&mean) {
        violations.push(Violation::MeanOutOfRange { value: mean });
    }

    if !variance.is_finite() {
        violations.push(Violation::VarianceNotFinite);
    } else if variance < 0.0 {
        violations.push(Violation::NegativeVariance { value: variance });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(mean, variance, count = violations.len(), "input rejected");
        Err(EngineError::InvalidInput { violations })
    }
}

/// Fold the 1-5 scale onto its 1-3 distance-from-center representation.
///
/// Means above the midpoint reflect across it: `E = 6 - C`. The midpoint
/// itself stays put.
fn fold_mean(mean: f64) -> f64 {
    if mean > SCALE_MIDPOINT {
        SCALE_REFLECTION - mean
    } else {
        mean
    }
}

/// Cumulative disagreement `J`, integrated piecewise over the band.
///
/// Branch guards are strict `<`: at an exact band boundary the next
/// branch fires.
fn cumulative_disagreement(h: f64, f: f64, i: f64) -> f64 {
    if i == 0.0 {
        // Degenerate scale position: no feasible range to partition.
        0.0
    } else if h < f {
        h.powi(3) / 3.0
    } else if h < 2.0 * f {
        h.powi(3) / 3.0 - (h - f).powi(3)
    } else {
        2.0 * f.powi(3) + (h - 3.0 * f).powi(3) / 3.0
    }
}

/// Consensus core `K`, integrated piecewise over the lower band.
///
/// Same strict-`<` guard convention as [`cumulative_disagreement`]; the
/// cubes are signed throughout.
fn consensus_core(h: f64, g: f64, i: f64) -> f64 {
    if i == 0.0 {
        0.0
    } else if h < 1.5 * g {
        h.powi(3) / 3.0 - 2.0 * (h - g).powi(3)
    } else if h < 2.0 * g {
        g.powi(3) + (h - 2.0 * g).powi(3)
    } else {
        g.powi(3)
    }
}
