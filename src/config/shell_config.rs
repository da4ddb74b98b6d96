//! Shell configuration
//!
//! Looked up in this order (first hit wins):
//! 1. An explicit `--config` path
//! 2. `anomaly-shell.toml` in the working directory
//! 3. `.anomaly-shell.json` in the working directory
//! 4. `~/.config/anomaly-shell/config.toml`
//!
//! `ANOMALY_SHELL_DATA_DIR` then overrides the data directory.
//!
//! ```toml
//! data_dir = "/tmp/anomaly-shell"
//! train_file = "anomalyTrain.csv"
//! test_file = "anomalyTest.csv"
//! threshold = 0.85
//! greeting = "Welcome!\n"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::commands::{UploadPaths, DEFAULT_TEST_FILE, DEFAULT_TRAIN_FILE};
use crate::menu::DEFAULT_GREETING;
use crate::session::is_valid_threshold;

pub const DATA_DIR_ENV: &str = "ANOMALY_SHELL_DATA_DIR";
const TOML_NAME: &str = "anomaly-shell.toml";
const JSON_NAME: &str = ".anomaly-shell.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Directory the uploaded series are written to (default: working dir)
    pub data_dir: Option<PathBuf>,
    pub train_file: Option<String>,
    pub test_file: Option<String>,
    /// Starting correlation threshold (default: the engine's)
    pub threshold: Option<f32>,
    /// Text shown above the menu
    pub greeting: Option<String>,
}

impl ShellConfig {
    /// Load from the first config found, then apply the environment
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => Self::discover(cwd),
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML or JSON file, picked by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let config = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Invalid TOML config {}", path.display()))?
        };
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn discover(cwd: &Path) -> Self {
        let candidates = [
            Some(cwd.join(TOML_NAME)),
            Some(cwd.join(JSON_NAME)),
            Self::user_config_path(),
        ];
        for path in candidates.into_iter().flatten() {
            if !path.is_file() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => return config,
                Err(e) => warn!("Ignoring config {}: {:#}", path.display(), e),
            }
        }
        debug!("No config file found, using defaults");
        Self::default()
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("anomaly-shell").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            if !is_valid_threshold(threshold) {
                anyhow::bail!("configured threshold {} is outside [0, 1]", threshold);
            }
        }
        for name in [&self.train_file, &self.test_file].into_iter().flatten() {
            if name.trim().is_empty() {
                anyhow::bail!("upload file names must not be empty");
            }
        }
        if self.train_file.is_some() && self.train_file == self.test_file {
            anyhow::bail!("train_file and test_file must differ");
        }
        Ok(())
    }

    /// Upload locations, relative paths resolved against `cwd`
    pub fn upload_paths(&self, cwd: &Path) -> UploadPaths {
        let dir = match &self.data_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };
        UploadPaths::new(
            dir.join(self.train_file.as_deref().unwrap_or(DEFAULT_TRAIN_FILE)),
            dir.join(self.test_file.as_deref().unwrap_or(DEFAULT_TEST_FILE)),
        )
    }

    pub fn greeting(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        let paths = config.upload_paths(Path::new("/work"));
        assert_eq!(paths.train, Path::new("/work/anomalyTrain.csv"));
        assert_eq!(paths.test, Path::new("/work/anomalyTest.csv"));
        assert_eq!(config.greeting(), DEFAULT_GREETING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let config: ShellConfig = toml::from_str(
            r#"
data_dir = "uploads"
train_file = "train.csv"
test_file = "test.csv"
threshold = 0.75
greeting = "hi\n"
"#,
        )
        .unwrap();
        assert_eq!(config.threshold, Some(0.75));
        assert_eq!(config.greeting(), "hi\n");
        let paths = config.upload_paths(Path::new("/work"));
        assert_eq!(paths.train, Path::new("/work/uploads/train.csv"));
        assert_eq!(paths.test, Path::new("/work/uploads/test.csv"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<ShellConfig>("thresold = 0.5").is_err());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = ShellConfig {
            threshold: Some(1.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_train_and_test_rejected() {
        let config = ShellConfig {
            train_file: Some("x.csv".into()),
            test_file: Some("x.csv".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, r#"{"threshold": 0.6, "data_dir": "/srv/data"}"#).unwrap();
        let config = ShellConfig::from_file(&path).unwrap();
        assert_eq!(config.threshold, Some(0.6));
        assert_eq!(
            config.upload_paths(dir.path()).train,
            Path::new("/srv/data/anomalyTrain.csv")
        );
    }

    #[test]
    fn test_discovers_toml_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TOML_NAME), "threshold = 0.4\n").unwrap();
        assert_eq!(ShellConfig::discover(dir.path()).threshold, Some(0.4));
    }

    #[test]
    fn test_broken_discovered_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TOML_NAME), "threshold = [").unwrap();
        std::fs::write(dir.path().join(JSON_NAME), r#"{"threshold": 0.3}"#).unwrap();
        assert_eq!(ShellConfig::discover(dir.path()).threshold, Some(0.3));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ShellConfig::load(Some(&missing), dir.path()).is_err());
    }
}
