//! TOML-based application configuration.
//!
//! Carries the constants the engine does not source itself: the
//! wall-clock length of one tick and the three phase thresholds in
//! tick counts.
//!
//! Configuration is stored at `~/.config/pomodoro/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TimerError};
use crate::timer::Thresholds;

/// Phase durations, expressed in ticks.
///
/// Raw values are kept signed so a negative entry in the file is
/// reported as an invalid threshold instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default = "default_work_ticks")]
    pub work_ticks: i64,
    #[serde(default = "default_break_ticks")]
    pub break_ticks: i64,
    #[serde(default = "default_coffee_ticks")]
    pub coffee_ticks: i64,
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            work_ticks: default_work_ticks(),
            break_ticks: default_break_ticks(),
            coffee_ticks: default_coffee_ticks(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomodoro/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wall-clock seconds per tick.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: i64,
    #[serde(default)]
    pub durations: DurationsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            durations: DurationsConfig::default(),
        }
    }
}

impl Config {
    /// Default configuration file path.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomodoro")
            .join("config.toml")
    }

    /// Load from the default path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::path()).unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save to the default path, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| save_failed(e.to_string()))
    }

    /// Wall-clock length of one tick.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if `tick_secs` is not positive.
    pub fn tick(&self) -> Result<Duration, ConfigError> {
        if self.tick_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_secs".into(),
                message: "must be greater than 0".into(),
            });
        }
        Ok(Duration::from_secs(self.tick_secs as u64))
    }

    /// Validated per-phase thresholds for the engine.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if any duration is not positive.
    pub fn thresholds(&self) -> Result<Thresholds, ConfigError> {
        Ok(Thresholds {
            work: positive_ticks(self.durations.work_ticks, "durations.work_ticks")?,
            short_break: positive_ticks(self.durations.break_ticks, "durations.break_ticks")?,
            coffee: positive_ticks(self.durations.coffee_ticks, "durations.coffee_ticks")?,
        })
    }
}

fn positive_ticks(value: i64, key: &str) -> Result<u32, ConfigError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: key.into(),
            message: TimerError::InvalidThreshold.to_string(),
        })
}

// Default functions
fn default_tick_secs() -> i64 {
    1
}
fn default_work_ticks() -> i64 {
    25 * 60
}
fn default_break_ticks() -> i64 {
    5 * 60
}
fn default_coffee_ticks() -> i64 {
    10 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_cycle() {
        let config = Config::default();
        assert_eq!(config.tick().unwrap(), Duration::from_secs(1));
        let thresholds = config.thresholds().unwrap();
        assert_eq!(thresholds.work, 1500);
        assert_eq!(thresholds.short_break, 300);
        assert_eq!(thresholds.coffee, 600);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[durations]\nwork_ticks = 50\n").unwrap();
        assert_eq!(config.tick_secs, 1);
        assert_eq!(config.durations.work_ticks, 50);
        assert_eq!(config.durations.break_ticks, 300);
    }

    #[test]
    fn non_positive_thresholds_are_rejected() {
        for bad in [0, -1] {
            let mut config = Config::default();
            config.durations.coffee_ticks = bad;
            let err = config.thresholds().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "durations.coffee_ticks"
            ));
        }
    }

    #[test]
    fn non_positive_tick_secs_is_rejected() {
        let mut config = Config::default();
        config.tick_secs = 0;
        assert!(config.tick().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.tick_secs = 2;
        config.durations.work_ticks = 900;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.tick_secs, 2);
        assert_eq!(loaded.durations.work_ticks, 900);
        assert_eq!(loaded.durations.coffee_ticks, 600);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
