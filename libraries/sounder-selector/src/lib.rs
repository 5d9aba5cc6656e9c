//! Sounder - Adaptive Clip Selection
//!
//! Picks the next clip to play from a fixed pool using a weighted random draw
//! whose weights follow a self-reinforcing "boost sequence".
//!
//! This crate provides:
//! - Distribution builder (even split, or boosted target plus equal shares)
//! - Weighted drawer with uniform fallback for malformed distributions
//! - Boost state machine (pure transition function)
//! - Thread-safe selector combining the three as one atomic step
//! - Asset repository trait with a directory-backed implementation
//!
//! # Boost sequence
//!
//! While idle every clip has an even share. Drawing the first clip starts a
//! cycle: the second clip becomes the target at 60%, then the third at 70%,
//! and so on up to 90%. Drawing the target advances the cycle, drawing
//! anything else returns to idle, and drawing the last clip completes it.
//!
//! # Architecture
//!
//! `sounder-selector` does no decoding and no playback. The asset repository
//! and the random source are traits so platform code (or tests) can plug in
//! their own.
//!
//! # Example: Basic Selection
//!
//! ```rust
//! use sounder_selector::{SelectorBuilder, SelectorState};
//!
//! let selector = SelectorBuilder::new()
//!     .clips(["beep1.ogg", "beep2.ogg", "beep3.ogg", "beep4.ogg"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(selector.distribution().weights(), &[25, 25, 25, 25]);
//!
//! let clip = selector.select_next();
//! assert!(selector.clips().position_of(&clip).is_some());
//!
//! selector.reset();
//! assert_eq!(selector.state(), SelectorState::Idle);
//! ```
//!
//! # Example: Loading From a Directory
//!
//! ```rust,no_run
//! use sounder_selector::{DirectoryRepository, LazySelector};
//! use std::io::Read;
//!
//! let selector = LazySelector::new(DirectoryRepository::new("assets/audio"));
//!
//! // The directory is listed on the first call only
//! let (clip, mut handle) = selector.open_next().unwrap();
//! let mut bytes = Vec::new();
//! handle.read_to_end(&mut bytes).unwrap();
//! println!("{clip}: {} bytes", bytes.len());
//! ```

mod distribution;
mod draw;
mod error;
mod random;
mod repository;
mod selector;
mod state;
pub mod types;

// Public exports
pub use distribution::Distribution;
pub use draw::draw;
pub use error::{Result, SelectorError};
pub use random::{RandomSource, ScriptedSource};
pub use repository::{AssetRepository, DirectoryRepository};
pub use selector::{LazySelector, Selection, Selector, SelectorBuilder};
pub use state::SelectorState;
pub use types::{BoostPolicy, ClipId, ClipSet, MAX_POOL_SIZE, TOTAL_WEIGHT};
