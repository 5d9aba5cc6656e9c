//! Boost sequence state machine
//!
//! Drawing position 0 while idle starts a cycle whose target then walks
//! positions 1, 2, ..., N-1 with escalating weight. Completing the last
//! position or missing the target at any point returns to idle.

use crate::types::BoostPolicy;

/// Persistent selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Even distribution, waiting for position 0
    #[default]
    Idle,

    /// Boost cycle in progress
    Boosting {
        /// Position that continues the cycle if drawn (1..N)
        target: usize,

        /// Weight given to `target` before rounding correction
        boost: u8,
    },
}

impl SelectorState {
    /// Whether a boost cycle is in progress
    pub fn is_boosting(&self) -> bool {
        matches!(self, Self::Boosting { .. })
    }

    /// Position that continues the cycle (0 while idle)
    pub fn next_target_index(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Boosting { target, .. } => *target,
        }
    }

    /// Current boost weight (the policy's initial weight while idle)
    pub fn boost_probability(&self, policy: &BoostPolicy) -> u8 {
        match self {
            Self::Idle => policy.initial,
            Self::Boosting { boost, .. } => *boost,
        }
    }

    /// Compute the state that follows drawing `position` from a pool of
    /// `pool_size` clips
    ///
    /// # Panics
    /// Panics if `position >= pool_size`.
    #[must_use]
    pub fn advance(self, position: usize, pool_size: usize, policy: &BoostPolicy) -> Self {
        assert!(
            position < pool_size,
            "drawn position {position} out of range for pool of {pool_size}"
        );

        match self {
            // A single clip has no positions to walk through
            Self::Idle if position == 0 && pool_size > 1 => Self::Boosting {
                target: 1,
                boost: policy.initial,
            },
            Self::Idle => Self::Idle,
            Self::Boosting { target, boost } if position == target => {
                if target + 1 >= pool_size {
                    Self::Idle
                } else {
                    Self::Boosting {
                        target: target + 1,
                        boost: policy.escalate(boost),
                    }
                }
            }
            Self::Boosting { .. } => Self::Idle,
        }
    }
}
