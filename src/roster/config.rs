use crate::error::{Result, RosterError};
use crate::model::EmailPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.csv";

/// Keys accepted by [`RosterConfig::get`] and [`RosterConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["data-file", "email-policy"];

/// Configuration for roster, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the CSV data file (relative paths resolve against the working directory)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Whether an email without '@' is rejected or only warned about
    #[serde(default)]
    pub email_policy: EmailPolicy,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            email_policy: EmailPolicy::default(),
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

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "email-policy" => Some(self.email_policy.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(RosterError::Config("data-file cannot be empty".into()));
                }
                self.data_file = PathBuf::from(value);
            }
            "email-policy" => {
                self.email_policy = value.parse().map_err(RosterError::Config)?;
            }
            other => {
                return Err(RosterError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, PathBuf::from("students.csv"));
        assert_eq!(config.email_policy, EmailPolicy::Reject);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set("email-policy", "warn").unwrap();
        config.set("data-file", "/tmp/class.csv").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.email_policy, EmailPolicy::Warn);
        assert_eq!(loaded.data_file, PathBuf::from("/tmp/class.csv"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"email_policy": "warn", "unrelated": 1}"#,
        )
        .unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.email_policy, EmailPolicy::Warn);
        assert_eq!(loaded.data_file, PathBuf::from("students.csv"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        assert!(matches!(
            RosterConfig::load(dir.path()),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = RosterConfig::default();
        assert_eq!(config.get("email-policy").as_deref(), Some("reject"));
        assert_eq!(config.get("data-file").as_deref(), Some("students.csv"));
        assert_eq!(config.get("color"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = RosterConfig::default();
        assert!(config.set("email-policy", "maybe").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("color", "red").is_err());
        assert_eq!(config, RosterConfig::default());
    }
}
