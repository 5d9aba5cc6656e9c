//! Core types for clip selection

use crate::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Total weight every distribution sums to (percentage points)
pub const TOTAL_WEIGHT: u32 = 100;

/// Largest pool that still gives every clip a nonzero weight
pub const MAX_POOL_SIZE: usize = TOTAL_WEIGHT as usize;

/// Identifier of one clip in the pool
///
/// Opaque to the selector; the asset repository decides what it means
/// (a file name for [`crate::DirectoryRepository`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ordered, immutable pool of clips
///
/// Positions are stable indices for the lifetime of the set. Position 0 is
/// the clip that starts a boost cycle, and the cycle walks the remaining
/// positions in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipSet {
    clips: Arc<[ClipId]>,
}

impl ClipSet {
    /// Create a clip set from an ordered list of identifiers
    ///
    /// Fails with [`SelectorError::Configuration`] if the list is empty or
    /// holds more than [`MAX_POOL_SIZE`] clips.
    pub fn new(clips: Vec<ClipId>) -> Result<Self> {
        if clips.is_empty() {
            return Err(SelectorError::config("clip pool must contain at least one clip"));
        }
        if clips.len() > MAX_POOL_SIZE {
            return Err(SelectorError::config(format!(
                "clip pool holds {} clips, at most {} are supported",
                clips.len(),
                MAX_POOL_SIZE
            )));
        }

        Ok(Self {
            clips: clips.into(),
        })
    }

    /// Number of clips (always at least 1)
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clip at `position`
    pub fn get(&self, position: usize) -> Option<&ClipId> {
        self.clips.get(position)
    }

    /// Position of a clip identifier, if present
    pub fn position_of(&self, id: &ClipId) -> Option<usize> {
        self.clips.iter().position(|clip| clip == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClipId> {
        self.clips.iter()
    }

    pub fn as_slice(&self) -> &[ClipId] {
        &self.clips
    }
}

impl std::ops::Index<usize> for ClipSet {
    type Output = ClipId;

    fn index(&self, position: usize) -> &Self::Output {
        &self.clips[position]
    }
}

/// Boost escalation settings
///
/// The target clip starts at `initial` percent and gains `step` points per
/// successful advance, never exceeding `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostPolicy {
    /// Boost weight when a cycle starts (default: 60)
    #[serde(default = "default_initial")]
    pub initial: u8,

    /// Increase per successful advance (default: 10)
    #[serde(default = "default_step")]
    pub step: u8,

    /// Upper bound of the boost weight (default: 90)
    #[serde(default = "default_cap")]
    pub cap: u8,
}

impl BoostPolicy {
    /// Validate the policy
    ///
    /// Requires `1 <= initial <= cap <= 99` so that a boosted target never
    /// takes the whole distribution.
    pub fn validate(&self) -> Result<()> {
        if self.initial == 0 {
            return Err(SelectorError::config("boost initial must be at least 1"));
        }
        if self.initial > self.cap {
            return Err(SelectorError::config(format!(
                "boost initial ({}) exceeds boost cap ({})",
                self.initial, self.cap
            )));
        }
        if u32::from(self.cap) >= TOTAL_WEIGHT {
            return Err(SelectorError::config(format!(
                "boost cap must be below {}, got {}",
                TOTAL_WEIGHT, self.cap
            )));
        }
        Ok(())
    }

    /// Boost after one more successful advance
    pub fn escalate(&self, boost: u8) -> u8 {
        boost.saturating_add(self.step).min(self.cap)
    }
}

fn default_initial() -> u8 {
    60
}

fn default_step() -> u8 {
    10
}

fn default_cap() -> u8 {
    90
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            step: default_step(),
            cap: default_cap(),
        }
    }
}
