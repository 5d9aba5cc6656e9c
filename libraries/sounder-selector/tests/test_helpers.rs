//! Shared helpers for selector integration tests

use sounder_selector::{AssetRepository, ClipId, Result, SelectorError};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn clip_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("beep{:02}.ogg", i)).collect()
}

/// In-memory repository that counts how often it is enumerated
pub struct CountingRepository {
    clips: Vec<String>,
    pub listings: AtomicUsize,
    delay: Duration,
}

impl CountingRepository {
    pub fn new(count: usize) -> Self {
        Self {
            clips: clip_names(count),
            listings: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn listing_count(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

impl AssetRepository for CountingRepository {
    type Handle = Cursor<Vec<u8>>;

    fn list_clip_identifiers(&self) -> Result<Vec<ClipId>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);

        if self.clips.is_empty() {
            return Err(SelectorError::PoolEmpty);
        }
        Ok(self.clips.iter().cloned().map(ClipId::from).collect())
    }

    fn open_clip(&self, id: &ClipId) -> Result<Self::Handle> {
        if !self.clips.iter().any(|clip| clip == id.as_str()) {
            return Err(SelectorError::ClipNotFound(id.to_string()));
        }
        Ok(Cursor::new(id.as_str().as_bytes().to_vec()))
    }
}
