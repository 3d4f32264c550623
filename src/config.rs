//! Configuration file loading and discovery.
//!
//! A small optional YAML file supplies defaults for the metadata document
//! location and the package database root. Command-line flags always win
//! over file values.

use crate::error::{Result, SupportInfoError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Metadata document consulted when neither flag, environment, nor config
/// file names one.
pub const DEFAULT_METADATA_PATH: &str = "/usr/share/supportinfo/support_info.xml";

/// Default package database root.
pub const DEFAULT_INSTALLROOT: &str = "/";

/// Config file names searched in each candidate directory.
const CONFIG_FILE_NAMES: &[&str] = &["supportinfo.yaml", "supportinfo.yml"];

/// On-disk configuration. Every field is optional; unset fields fall back
/// to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the support metadata document.
    pub metadata: Option<PathBuf>,
    /// Root of the package database to interrogate.
    pub installroot: Option<PathBuf>,
    /// Release version forwarded to the package manager.
    pub releasever: Option<String>,
}

impl AppConfig {
    /// Load configuration from an explicit path, or from the first
    /// discovered config file, or defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match discover_config_file(explicit) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SupportInfoError::io(Some(path.to_path_buf()), "failed to read config file", e)
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            SupportInfoError::Config(format!("{}: {e}", path.display()))
        })
    }

    /// Effective metadata path after applying defaults.
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.metadata
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH))
    }

    /// Effective install root after applying defaults.
    #[must_use]
    pub fn installroot_path(&self) -> PathBuf {
        self.installroot
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALLROOT))
    }
}

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. User config directory (~/.config/supportinfo/)
/// 3. /etc/supportinfo/
#[must_use]
pub fn discover_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("supportinfo")) {
            return Some(path);
        }
    }

    find_config_in_dir(Path::new("/etc/supportinfo"))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            config.metadata_path(),
            PathBuf::from(DEFAULT_METADATA_PATH)
        );
        assert_eq!(config.installroot_path(), PathBuf::from("/"));
        assert!(config.releasever.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metadata: /tmp/support_info.xml").unwrap();
        writeln!(file, "releasever: \"2023\"").unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.metadata_path(),
            PathBuf::from("/tmp/support_info.xml")
        );
        assert_eq!(config.releasever.as_deref(), Some("2023"));
        // Unset fields keep their defaults.
        assert_eq!(config.installroot_path(), PathBuf::from("/"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "surprise: true").unwrap();
        assert!(AppConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_path_falls_through() {
        // A nonexistent explicit path is ignored rather than an error; load
        // then produces defaults if nothing else is discovered.
        let config = AppConfig::load(Some(Path::new("/nonexistent/supportinfo.yaml")));
        assert!(config.is_ok());
    }
}
