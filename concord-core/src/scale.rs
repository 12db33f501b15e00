//! Constants and feasibility bounds for the fixed 1-5 response scale.

/// Lowest response on the scale.
pub const SCALE_MIN: f64 = 1.0;

/// Highest response on the scale.
pub const SCALE_MAX: f64 = 5.0;

/// Center of the scale; means above it fold onto the lower half.
pub const SCALE_MIDPOINT: f64 = 3.0;

/// Reflection constant: a mean `C` above the midpoint folds to `6 - C`.
pub const SCALE_REFLECTION: f64 = SCALE_MIN + SCALE_MAX;

/// Largest variance a group of responses on the scale can actually have
/// at the given mean, reached by the two-point split between 1 and 5.
///
/// `max = (mean - 1)(5 - mean)`
///
/// The engine does not enforce this bound; it accepts any non-negative
/// variance. The bound describes the region where the index is guaranteed
/// to stay inside `[0, 1]`.
#[must_use]
pub fn max_feasible_variance(mean: f64) -> f64 {
    (mean - SCALE_MIN) * (SCALE_MAX - mean)
}

/// Smallest variance achievable at the given mean when responses are
/// whole-number scale points.
///
/// A fractional mean forces a mix of the two adjacent integers, so the
/// variance cannot drop below `frac(mean) * (1 - frac(mean))`.
#[must_use]
pub fn min_feasible_variance(mean: f64) -> f64 {
    let frac = mean - mean.floor();
    frac * (1.0 - frac)
}
