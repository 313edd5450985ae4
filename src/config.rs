//! Persistent configuration: custom word lists and logging location.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::constants::env_vars;
use crate::error::AppError;
use crate::models::ParseOptions;

/// Configuration structure for the application.
/// Handles loading, saving, and managing persistent settings.
///
/// The word-list fields mirror `ParseOptions`: when present, each list
/// replaces the corresponding built-in default set entirely. Entries must be
/// stored in canonical lookup form (lowercase, no periods).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Path to the log file. If not specified, logs are written to a default
    /// location under the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,

    /// Custom honorific prefixes, replacing the built-in list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,

    /// Custom suffixes, replacing the built-in list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<Vec<String>>,

    /// Custom family-name particles, replacing the built-in list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; defaults are returned.
    ///
    /// # Environment Variables
    /// - `NAMEPARSE_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded (or defaulted) configuration
    /// * `Err(AppError)` - Config file exists but is unreadable or invalid
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_path(&Self::get_config_path())
    }

    /// Loads configuration from an explicit path, applying env overrides and
    /// validation. Missing file yields defaults.
    pub fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    ///
    /// Word-list entries must be non-empty, lowercase, and period-free, or
    /// token matching would silently never find them.
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - A word-list entry is not in canonical form
    pub fn validate(&self) -> Result<(), AppError> {
        let lists = [
            ("prefixes", &self.prefixes),
            ("suffixes", &self.suffixes),
            ("particles", &self.particles),
        ];

        for (list_name, entries) in lists {
            let Some(entries) = entries else { continue };
            for entry in entries {
                if entry.is_empty() {
                    return Err(AppError::config_error(format!(
                        "{list_name} contains an empty entry"
                    )));
                }
                if *entry != entry.to_lowercase() || entry.contains('.') {
                    return Err(AppError::config_error(format!(
                        "{list_name} entry '{entry}' must be lowercase without periods"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&Self::get_config_path())
    }

    /// Saves current configuration to an explicit path, creating parent
    /// directories as needed. Uses TOML format for storage.
    pub fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        let path = Path::new(config_path);
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// Uses the platform config directory (e.g. ~/.config on Linux), falling
    /// back to the current directory if it is unavailable.
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("nameparse")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("nameparse")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    /// Converts the configured word lists into parse options.
    ///
    /// Lists that are not configured stay `None`, so the parser falls back
    /// to its built-in defaults for those.
    pub fn parse_options(&self) -> ParseOptions {
        let to_set = |list: &Option<Vec<String>>| -> Option<HashSet<String>> {
            list.as_ref().map(|entries| entries.iter().cloned().collect())
        };

        ParseOptions {
            prefixes: to_set(&self.prefixes),
            suffixes: to_set(&self.suffixes),
            particles: to_set(&self.particles),
        }
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    pub fn display() -> Result<(), AppError> {
        let config_path = Self::get_config_path();
        let log_dir = Self::get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            for (name, list) in [
                ("Prefixes", &config.prefixes),
                ("Suffixes", &config.suffixes),
                ("Particles", &config.particles),
            ] {
                println!("{name}:");
                match list {
                    Some(entries) => println!("{}", entries.join(", ")),
                    None => println!("(Built-in defaults)"),
                }
                println!("────────────────────────────────────");
            }
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/nameparse.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Built-in word lists and default log location are in use.");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            log_file_path: Some("/tmp/nameparse.log".to_string()),
            prefixes: Some(vec!["dr".to_string(), "mr".to_string()]),
            suffixes: None,
            particles: Some(vec!["van".to_string()]),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.prefixes, config.prefixes);
        assert!(loaded.suffixes.is_none());
        assert_eq!(loaded.particles, config.particles);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().to_string();

        let loaded = Config::load_from_path(&path).unwrap();
        assert!(loaded.prefixes.is_none());
        assert!(loaded.suffixes.is_none());
        assert!(loaded.particles.is_none());
    }

    #[test]
    fn test_validation_rejects_non_canonical_entries() {
        let config = Config {
            prefixes: Some(vec!["Dr.".to_string()]),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            suffixes: Some(vec![String::new()]),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            particles: Some(vec!["van".to_string()]),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_log_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();
        Config::default().save_to_path(&path).unwrap();

        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/tmp/override.log");
        }
        let loaded = Config::load_from_path(&path).unwrap();
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
        }

        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/override.log"));
    }

    #[test]
    fn test_parse_options_conversion() {
        let config = Config {
            prefixes: Some(vec!["shri".to_string()]),
            ..Default::default()
        };
        let options = config.parse_options();
        assert!(options.prefixes.unwrap().contains("shri"));
        assert!(options.suffixes.is_none());
        assert!(options.particles.is_none());
    }
}
