//! Configuration management

use crate::error::{MirrorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "NOTEMIRROR_CONFIG";

/// Environment variable naming a snapshot file to read notes from
pub const SNAPSHOT_ENV: &str = "NOTEMIRROR_SNAPSHOT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Read notes from this snapshot instead of the Notes application
    pub snapshot: Option<PathBuf>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MirrorError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MirrorError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MirrorError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Load config from `explicit`, else from `NOTEMIRROR_CONFIG`, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load_from_file(Path::new(&path)),
            _ => Ok(Config::default()),
        }
    }

    /// Pick the snapshot to read: command line, then environment, then config
    pub fn snapshot_path(&self, cli_snapshot: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_snapshot {
            return Some(path.to_path_buf());
        }

        std::env::var_os(SNAPSHOT_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.source.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert!(config.source.snapshot.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notemirror.toml");
        fs::write(
            &path,
            "[logging]\nlevel = \"debug\"\n\n[source]\nsnapshot = \"/tmp/notes.toml\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.source.snapshot,
            Some(PathBuf::from("/tmp/notes.toml"))
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notemirror.toml");
        fs::write(&path, "[source]\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_file(&temp.path().join("missing.toml"));

        match result.unwrap_err() {
            MirrorError::Config(msg) => assert!(msg.contains("Config file not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[logging\nlevel = ").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(MirrorError::Config(_))));
    }

    #[test]
    fn test_cli_snapshot_wins() {
        let config = Config {
            source: SourceConfig {
                snapshot: Some(PathBuf::from("from-config.toml")),
            },
            ..Config::default()
        };

        assert_eq!(
            config.snapshot_path(Some(Path::new("from-cli.toml"))),
            Some(PathBuf::from("from-cli.toml"))
        );
    }
}
