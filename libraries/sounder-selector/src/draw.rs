//! Weighted draw over a distribution

use crate::distribution::Distribution;
use crate::random::RandomSource;
use crate::types::TOTAL_WEIGHT;

/// Draw one position from `distribution`
///
/// Standard cumulative-weight walk: a position is chosen with probability
/// `weight / total`. A malformed distribution is reported and degrades to a
/// uniform pick so that something still plays.
///
/// # Panics
/// Panics if `distribution` has no positions.
pub fn draw(distribution: &Distribution, rng: &mut dyn RandomSource) -> usize {
    let len = distribution.len();
    assert!(len > 0, "cannot draw from an empty distribution");

    if let Err(e) = distribution.validate() {
        tracing::error!(
            weights = ?distribution.weights(),
            "{}; falling back to uniform pick",
            e
        );
        return rng.next_below(len as u32) as usize;
    }

    // Validated, so the weights sum to exactly TOTAL_WEIGHT
    let mut remaining = rng.next_below(TOTAL_WEIGHT);
    for (position, &weight) in distribution.weights().iter().enumerate() {
        if remaining < weight {
            return position;
        }
        remaining -= weight;
    }

    // Unreachable for a validated distribution
    len - 1
}
