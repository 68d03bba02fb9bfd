//! Configuration persistence utilities
//!
//! Provides the tutor's settings and functions for loading and saving clock
//! configuration to disk.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::time_engine::parse_timezone;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error while reading/writing config
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for a teaching session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// IANA zone used by the live clock
    pub timezone: String,
    /// Answers allowed per round in Read and Set, at least 1
    pub attempts_per_round: u32,
    /// Auto-repeat period of a held control button
    pub repeat_interval_ms: u64,
    /// How often the live clock samples the wall clock
    pub realtime_period_ms: u64,
    /// Pause after a correct answer before the next round
    pub success_delay_ms: u64,
    /// Pause after a wrong answer before the next round
    pub retry_delay_ms: u64,
    /// Pause before returning to the entry screen once attempts run out
    pub exit_delay_ms: u64,
    pub debug_logging: bool,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            attempts_per_round: 3,
            repeat_interval_ms: 300,
            realtime_period_ms: 1000,
            success_delay_ms: 2000,
            retry_delay_ms: 3000,
            exit_delay_ms: 3000,
            debug_logging: false,
        }
    }
}

impl TutorConfig {
    /// Configured zone, falling back to UTC when the name is unknown
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone).unwrap_or(chrono_tz::UTC)
    }

    /// Attempts granted on entering Read or Set. Never 0.
    pub fn attempts(&self) -> u32 {
        self.attempts_per_round.max(1)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }

    pub fn realtime_period(&self) -> Duration {
        Duration::from_millis(self.realtime_period_ms)
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// Get the base configuration directory for all clocks
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "teaching-clock", "clocks")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration for a specific clock
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Save configuration for a specific clock
pub fn save_config<T: Serialize>(clock_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(())
}
