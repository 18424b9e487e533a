//! Configuration types for hostdb
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main hostdb configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDbConfig {
    /// Backing file settings
    pub store: StoreConfig,

    /// Interactive loop settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl HostDbConfig {
    /// Create a configuration for the given backing file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: StoreConfig { path: path.into() },
            session: SessionConfig::default(),
        }
    }

    /// Load a JSON configuration file
    ///
    /// ```json
    /// {
    ///   "store": { "path": "/var/lib/hostdb/hosts.txt" },
    ///   "session": { "prompt": "dns> ", "banner": false }
    /// }
    /// ```
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::Error::config(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.store.validate()
    }
}

/// Backing file configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the record file
    pub path: PathBuf,
}

impl StoreConfig {
    /// Validate the store configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.path.as_os_str().is_empty() {
            return Err(crate::Error::config("database file path cannot be empty"));
        }
        Ok(())
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Printed before every input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the command summary on startup
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_banner() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_session_defaults() {
        let config: HostDbConfig =
            serde_json::from_str(r#"{ "store": { "path": "hosts.txt" } }"#).unwrap();
        assert_eq!(config.store.path, PathBuf::from("hosts.txt"));
        assert_eq!(config.session.prompt, "> ");
        assert!(config.session.banner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let err = HostDbConfig::default().validate().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hostdb.json");
        fs::write(
            &path,
            r#"{ "store": { "path": "/tmp/hosts.txt" }, "session": { "banner": false } }"#,
        )
        .unwrap();

        let config = HostDbConfig::from_json_file(&path).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/hosts.txt"));
        assert!(!config.session.banner);
        assert_eq!(config.session.prompt, "> ");
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempdir().unwrap();

        let missing = HostDbConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(crate::Error::Config(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            HostDbConfig::from_json_file(&path),
            Err(crate::Error::Json(_))
        ));
    }
}
