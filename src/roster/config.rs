use crate::error::Result;
use crate::format::LoadPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "students.csv";

/// Configuration for roster, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// File loaded when the shell starts
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Reject malformed rows instead of loading them best-effort
    #[serde(default)]
    pub strict_load: bool,
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            strict_load: false,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.default_file, "students.csv");
        assert_eq!(config.load_policy(), LoadPolicy::Lenient);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig {
            default_file: "class.csv".to_string(),
            strict_load: true,
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = RosterConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.load_policy(), LoadPolicy::Strict);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"strict_load": true}"#).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_file, "students.csv");
        assert!(loaded.strict_load);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(RosterConfig::load(dir.path()).is_err());
    }
}
