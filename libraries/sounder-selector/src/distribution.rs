//! Per-call weight distribution over the clip pool

use crate::error::{Result, SelectorError};
use crate::state::SelectorState;
use crate::types::TOTAL_WEIGHT;

/// Integer weight per clip position
///
/// Built fresh for every selection. A well-formed distribution sums to
/// exactly [`TOTAL_WEIGHT`] and gives every position at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    weights: Vec<u32>,
}

impl Distribution {
    /// Build the distribution for a pool of `pool_size` clips in `state`
    ///
    /// Idle pools split 100 evenly, with the remainder going one point each
    /// to the lowest positions. While boosting, the target gets the boost
    /// weight, every other position gets an equal share of the rest (at
    /// least 1), and the target absorbs whatever rounding leaves over.
    pub fn build(pool_size: usize, state: &SelectorState) -> Result<Self> {
        if pool_size == 0 {
            return Err(SelectorError::config(
                "cannot build a distribution for an empty pool",
            ));
        }

        let weights = match *state {
            SelectorState::Boosting { target, .. } if target >= pool_size => {
                return Err(SelectorError::config(format!(
                    "boost target {} outside pool of {}",
                    target, pool_size
                )));
            }
            SelectorState::Boosting { target, boost } if pool_size > 1 => {
                Self::boosted(pool_size, target, u32::from(boost))
            }
            _ => Self::even(pool_size),
        };

        Ok(Self { weights })
    }

    fn even(pool_size: usize) -> Vec<u32> {
        let n = pool_size as u32;
        let base = TOTAL_WEIGHT / n;
        let remainder = (TOTAL_WEIGHT % n) as usize;

        (0..pool_size)
            .map(|position| if position < remainder { base + 1 } else { base })
            .collect()
    }

    fn boosted(pool_size: usize, target: usize, boost: u32) -> Vec<u32> {
        let others = (pool_size - 1) as u32;
        let other = (TOTAL_WEIGHT.saturating_sub(boost) / others).max(1);

        let mut weights = vec![other; pool_size];
        weights[target] = boost;

        // Target absorbs the rounding error; the other weights stay fixed
        let total: u32 = weights.iter().sum();
        weights[target] = (weights[target] + TOTAL_WEIGHT).saturating_sub(total);

        weights
    }

    /// Wrap raw weights without checking them
    ///
    /// Use [`Distribution::validate`] to check well-formedness.
    pub fn from_weights(weights: Vec<u32>) -> Self {
        Self { weights }
    }

    /// Check that weights sum to [`TOTAL_WEIGHT`] with no zero entries
    pub fn validate(&self) -> Result<()> {
        let total = self.total();
        let zero_weights = self.weights.iter().filter(|&&w| w == 0).count();

        if total != u64::from(TOTAL_WEIGHT) || zero_weights > 0 || self.weights.is_empty() {
            return Err(SelectorError::InvariantViolation {
                total,
                zero_weights,
            });
        }
        Ok(())
    }

    /// Sum of all weights, widened so oversized weights cannot wrap
    pub fn total(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }

    pub fn weight(&self, position: usize) -> Option<u32> {
        self.weights.get(position).copied()
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
