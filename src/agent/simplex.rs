//! Operations on probability vectors.
//!
//! A preference vector lies on the simplex when every entry is in `[0, 1]`
//! and the entries sum to 1. These helpers keep it there.

/// Tolerance used when checking the sum of a probability vector.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// Uniform distribution over `n` choices.
#[must_use]
pub fn uniform(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

/// Add `delta` to one weight and clip it to `[0, 1]`.
///
/// Returns the clipped weight. Panics if `index` is out of bounds; callers
/// validate the index first.
pub fn nudge(weights: &mut [f64], index: usize, delta: f64) -> f64 {
    let weight = (weights[index] + delta).clamp(0.0, 1.0);
    weights[index] = weight;
    weight
}

/// Rescale `weights` so they sum to 1.
///
/// A vector summing to exactly zero carries no information, so it is reset
/// to uniform instead. Returns `true` when that reset happened.
pub fn renormalize(weights: &mut [f64]) -> bool {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        weights.fill(uniform);
        return true;
    }
    for w in weights.iter_mut() {
        *w /= total;
    }
    false
}

/// Check that every entry is in `[0, 1]` and the sum is within `tolerance` of 1.
#[must_use]
pub fn is_distribution(weights: &[f64], tolerance: f64) -> bool {
    let in_range = weights.iter().all(|w| (0.0..=1.0).contains(w));
    let total: f64 = weights.iter().sum();
    in_range && (total - 1.0).abs() <= tolerance
}
