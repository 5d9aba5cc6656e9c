//! Asset repository trait and a directory-backed implementation

use crate::error::{Result, SelectorError};
use crate::types::ClipId;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of the clip pool
///
/// Platform code provides the clip listing and readable handles. The
/// selector enumerates the repository once and never mutates it.
pub trait AssetRepository: Send + Sync {
    /// Readable handle passed on to the playback engine
    type Handle: Read + Send;

    /// Enumerate clip identifiers in their fixed order
    ///
    /// # Errors
    /// Returns [`SelectorError::PoolEmpty`] if there are no clips.
    fn list_clip_identifiers(&self) -> Result<Vec<ClipId>>;

    /// Open a readable handle for a clip
    fn open_clip(&self, id: &ClipId) -> Result<Self::Handle>;
}

/// Clip pool backed by the regular files of one directory
///
/// Identifiers are file names, ordered by name. Hidden files (leading `.`)
/// and subdirectories are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    root: PathBuf,
}

impl DirectoryRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_clip(path: &Path) -> bool {
        path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !name.starts_with('.'))
    }
}

impl AssetRepository for DirectoryRepository {
    type Handle = File;

    fn list_clip_identifiers(&self) -> Result<Vec<ClipId>> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !Self::is_clip(&path) {
                continue;
            }
            match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!("Skipping clip with non UTF-8 name: {}", path.display()),
            }
        }

        if names.is_empty() {
            return Err(SelectorError::PoolEmpty);
        }

        names.sort();
        tracing::debug!("Found {} clips in {}", names.len(), self.root.display());

        Ok(names.into_iter().map(ClipId::from).collect())
    }

    fn open_clip(&self, id: &ClipId) -> Result<File> {
        let name = id.as_str();

        // Identifiers are bare file names inside the root
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(SelectorError::ClipNotFound(name.to_string()));
        }

        let path = self.root.join(name);
        if !path.is_file() {
            return Err(SelectorError::ClipNotFound(name.to_string()));
        }

        Ok(File::open(path)?)
    }
}
