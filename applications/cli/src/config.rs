/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use sounder_selector::BoostPolicy;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SounderConfig {
    #[serde(default = "default_clips")]
    pub clips: ClipSettings,

    #[serde(default)]
    pub boost: BoostPolicy,

    /// Fixed seed for reproducible runs (default: entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipSettings {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl SounderConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given, otherwise `sounder.toml` in the working
    /// directory when it exists. `SOUNDER_*` variables override both
    /// (e.g. `SOUNDER_CLIPS__DIRECTORY`, `SOUNDER_BOOST__CAP`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("sounder.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SOUNDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.clips.directory.is_dir() {
            return Err(CliError::Config(format!(
                "clip directory not found at {:?}",
                self.clips.directory
            )));
        }

        self.boost.validate()?;

        Ok(())
    }
}

// Default values
fn default_clips() -> ClipSettings {
    ClipSettings {
        directory: default_directory(),
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./assets/audio")
}

impl Default for SounderConfig {
    fn default() -> Self {
        Self {
            clips: default_clips(),
            boost: BoostPolicy::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_boost_constants() {
        let config = SounderConfig::default();
        assert_eq!(config.clips.directory, PathBuf::from("./assets/audio"));
        assert_eq!(config.boost, BoostPolicy::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn load_from_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sounder.toml");
        std::fs::write(
            &path,
            "seed = 7\n\n[clips]\ndirectory = \"/srv/clips\"\n\n[boost]\ncap = 80\n",
        )
        .unwrap();

        let config = SounderConfig::load(Some(&path)).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.clips.directory, PathBuf::from("/srv/clips"));
        assert_eq!(config.boost.initial, 60);
        assert_eq!(config.boost.step, 10);
        assert_eq!(config.boost.cap, 80);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let result = SounderConfig::load(Some(Path::new("/nonexistent/sounder.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn validate_rejects_missing_directory_and_bad_policy() {
        let mut config = SounderConfig::default();
        config.clips.directory = PathBuf::from("/nonexistent/sounder/clips");
        assert!(matches!(config.validate(), Err(CliError::Config(_))));

        let dir = TempDir::new().unwrap();
        config.clips.directory = dir.path().to_path_buf();
        assert!(config.validate().is_ok());

        config.boost.cap = 100;
        assert!(matches!(config.validate(), Err(CliError::Selector(_))));
    }
}
