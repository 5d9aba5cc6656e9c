//! Selector - build, draw and advance as one atomic step
//!
//! The selector owns the clip pool, the boost state and the random source.
//! Every call to [`Selector::select`] builds a fresh distribution, draws from
//! it and advances the state while holding a single lock, so concurrent
//! callers never see a draw from one call mixed with a transition from another.

use crate::distribution::Distribution;
use crate::draw::draw;
use crate::error::{Result, SelectorError};
use crate::random::RandomSource;
use crate::repository::AssetRepository;
use crate::state::SelectorState;
use crate::types::{BoostPolicy, ClipId, ClipSet};
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Outcome of one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Drawn position in the clip set
    pub position: usize,

    /// Identifier at `position`
    pub clip: ClipId,

    /// Weight the clip was drawn with
    pub weight: u32,

    /// State the distribution was built from
    pub state_before: SelectorState,

    /// State after the transition
    pub state_after: SelectorState,
}

impl Selection {
    /// Whether this draw finished a boost cycle
    pub fn completed_cycle(&self) -> bool {
        self.state_before.is_boosting()
            && self.state_before.next_target_index() == self.position
            && !self.state_after.is_boosting()
    }
}

struct Inner {
    state: SelectorState,
    rng: Box<dyn RandomSource>,
}

/// Adaptive clip selector
///
/// Construct with [`SelectorBuilder`]. Share between threads with `Arc`.
pub struct Selector {
    clips: ClipSet,
    policy: BoostPolicy,
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("clips", &self.clips.len())
            .field("policy", &self.policy)
            .field("state", &self.state())
            .finish()
    }
}

impl Selector {
    /// Select the next clip and advance the boost state
    pub fn select(&self) -> Selection {
        let mut inner = self.lock();
        let state_before = inner.state;

        let distribution = self.build_distribution(&state_before);
        let position = draw(&distribution, inner.rng.as_mut());
        let state_after = state_before.advance(position, self.clips.len(), &self.policy);
        inner.state = state_after;
        drop(inner);

        if state_before != state_after {
            tracing::debug!(
                position,
                before = ?state_before,
                after = ?state_after,
                "Boost state changed"
            );
        }

        Selection {
            position,
            clip: self.clips[position].clone(),
            weight: distribution.weight(position).unwrap_or_default(),
            state_before,
            state_after,
        }
    }

    /// Select the next clip identifier
    pub fn select_next(&self) -> ClipId {
        self.select().clip
    }

    /// Return to the idle state
    pub fn reset(&self) {
        self.lock().state = SelectorState::Idle;
        tracing::debug!("Boost state reset");
    }

    /// Current boost state
    pub fn state(&self) -> SelectorState {
        self.lock().state
    }

    /// Distribution the next selection will draw from
    pub fn distribution(&self) -> Distribution {
        let state = self.state();
        self.build_distribution(&state)
    }

    pub fn clips(&self) -> &ClipSet {
        &self.clips
    }

    pub fn policy(&self) -> &BoostPolicy {
        &self.policy
    }

    fn build_distribution(&self, state: &SelectorState) -> Distribution {
        // Only fails for an empty pool, which ClipSet rules out; an all-zero
        // distribution would still be caught by the drawer's fallback
        Distribution::build(self.clips.len(), state)
            .unwrap_or_else(|_| Distribution::from_weights(vec![0; self.clips.len()]))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is always consistent between transitions
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Two-phase constructor for [`Selector`]
///
/// The pool must be supplied (directly or from a repository) before a
/// selector can exist.
pub struct SelectorBuilder {
    policy: BoostPolicy,
    rng: Option<Box<dyn RandomSource>>,
    clips: Option<Vec<ClipId>>,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self {
            policy: BoostPolicy::default(),
            rng: None,
            clips: None,
        }
    }

    /// Override boost escalation (default: 60 / +10 / 90)
    pub fn boost_policy(mut self, policy: BoostPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a specific random source (default: entropy-seeded `StdRng`)
    pub fn random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Use an explicit ordered clip list
    pub fn clips<I, T>(mut self, clips: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClipId>,
    {
        self.clips = Some(clips.into_iter().map(Into::into).collect());
        self
    }

    /// Enumerate the clip list from a repository
    pub fn load_from<A: AssetRepository + ?Sized>(mut self, repository: &A) -> Result<Self> {
        self.clips = Some(repository.list_clip_identifiers()?);
        Ok(self)
    }

    /// Validate inputs and produce a ready selector
    pub fn build(self) -> Result<Selector> {
        self.policy.validate()?;

        let clips = self
            .clips
            .ok_or_else(|| SelectorError::config("no clips supplied to selector"))?;
        let clips = ClipSet::new(clips)?;

        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(rand::rngs::StdRng::from_entropy()));

        tracing::info!("Selector ready with {} clips", clips.len());

        Ok(Selector {
            clips,
            policy: self.policy,
            inner: Mutex::new(Inner {
                state: SelectorState::Idle,
                rng,
            }),
        })
    }
}

impl Default for SelectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Selector that enumerates its repository on first use
///
/// Concurrent first callers enumerate the repository exactly once. A failed
/// enumeration is returned to the caller and retried on the next call.
pub struct LazySelector<A: AssetRepository> {
    repository: A,
    policy: BoostPolicy,
    selector: OnceLock<Selector>,
    init: Mutex<()>,
}

impl<A: AssetRepository> LazySelector<A> {
    pub fn new(repository: A) -> Self {
        Self::with_policy(repository, BoostPolicy::default())
    }

    pub fn with_policy(repository: A, policy: BoostPolicy) -> Self {
        Self {
            repository,
            policy,
            selector: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Initialized selector, loading the pool if needed
    pub fn get(&self) -> Result<&Selector> {
        if let Some(selector) = self.selector.get() {
            return Ok(selector);
        }

        let _guard = self
            .init
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Another caller may have finished while we waited
        if let Some(selector) = self.selector.get() {
            return Ok(selector);
        }

        let selector = SelectorBuilder::new()
            .boost_policy(self.policy)
            .load_from(&self.repository)?
            .build()?;

        Ok(self.selector.get_or_init(|| selector))
    }

    pub fn select_next(&self) -> Result<ClipId> {
        Ok(self.get()?.select_next())
    }

    /// Select the next clip and open it through the repository
    pub fn open_next(&self) -> Result<(ClipId, A::Handle)> {
        let clip = self.select_next()?;
        let handle = self.repository.open_clip(&clip)?;
        Ok((clip, handle))
    }

    /// Return to idle; no-op if the pool is not loaded yet
    pub fn reset(&self) {
        if let Some(selector) = self.selector.get() {
            selector.reset();
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.selector.get().is_some()
    }

    pub fn repository(&self) -> &A {
        &self.repository
    }
}
