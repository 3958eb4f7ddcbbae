//! Configuration management for the assistant.
//!
//! This module handles loading and validating configuration from
//! environment variables. Everything has a default; a `.env` file is
//! honored when present.

use crate::book::upcoming::DEFAULT_HORIZON_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reminder window in days (default: 7)
    pub horizon_days: i64,

    /// Where line-editing history is persisted; `None` disables history
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOKBOT_BIRTHDAY_HORIZON`: reminder window in days (default: 7)
    /// - `BOOKBOT_HISTORY_FILE`: history path (default: `$HOME/.bookbot_history`)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let horizon_days = Self::parse_env_i64("BOOKBOT_BIRTHDAY_HORIZON", DEFAULT_HORIZON_DAYS)?;
        if horizon_days < 1 {
            return Err(ConfigError::InvalidValue {
                var: "BOOKBOT_BIRTHDAY_HORIZON".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let history_file = match env::var("BOOKBOT_HISTORY_FILE") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".bookbot_history")),
        };

        Ok(Config {
            horizon_days,
            history_file,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            horizon_days: DEFAULT_HORIZON_DAYS,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.horizon_days, 7);
        assert!(config.history_file.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("BOOKBOT_BIRTHDAY_HORIZON");
        env::remove_var("BOOKBOT_HISTORY_FILE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.horizon_days, 7);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides_horizon() {
        let mut guard = EnvGuard::new();
        guard.set("BOOKBOT_BIRTHDAY_HORIZON", "14");

        let config = Config::from_env().unwrap();
        assert_eq!(config.horizon_days, 14);
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_horizon() {
        let mut guard = EnvGuard::new();
        guard.set("BOOKBOT_BIRTHDAY_HORIZON", "soon");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "BOOKBOT_BIRTHDAY_HORIZON");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_horizon() {
        let mut guard = EnvGuard::new();
        guard.set("BOOKBOT_BIRTHDAY_HORIZON", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_history_file_override() {
        let mut guard = EnvGuard::new();
        guard.set("BOOKBOT_HISTORY_FILE", "/tmp/bookbot_test_history");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.history_file,
            Some(PathBuf::from("/tmp/bookbot_test_history"))
        );
    }
}
