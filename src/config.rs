//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use slots::{DEFAULT_DURATION_MINUTES, TimeOfWeek};

pub const DEFAULT_FEED_PATH: &str = "meetings.json";
pub const DEFAULT_PREFS_PATH: &str = "meetings-prefs.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MEETINGS_NOW `{0}` (expected `<day> HH:MM`, e.g. `sun 14:00`)")]
    InvalidNow(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub feed_path: PathBuf,
    pub prefs_path: PathBuf,
    /// Length assumed for meetings without a duration when listing what is in progress.
    pub default_duration_minutes: u16,
    /// Fixed reference time instead of the system clock.
    pub now_override: Option<TimeOfWeek>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_path: PathBuf::from(DEFAULT_FEED_PATH),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            now_override: None,
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `MEETINGS_FEED`: feed JSON path, default `meetings.json`
    /// - `MEETINGS_PREFS`: preferences JSON path, default `meetings-prefs.json`
    /// - `MEETINGS_DEFAULT_DURATION_MINUTES`: default 60
    /// - `MEETINGS_NOW`: `<day> HH:MM` reference time, default system clock
    pub fn from_env() -> Result<Self, ConfigError> {
        let now_override = match std::env::var("MEETINGS_NOW") {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(TimeOfWeek::parse(&raw).ok_or(ConfigError::InvalidNow(raw))?)
            }
            _ => None,
        };

        Ok(Self {
            feed_path: env_path("MEETINGS_FEED", DEFAULT_FEED_PATH),
            prefs_path: env_path("MEETINGS_PREFS", DEFAULT_PREFS_PATH),
            default_duration_minutes: env_parse("MEETINGS_DEFAULT_DURATION_MINUTES", DEFAULT_DURATION_MINUTES),
            now_override,
        })
    }

    /// Apply command-line path overrides on top of the environment.
    #[must_use]
    pub fn with_paths(mut self, feed: Option<PathBuf>, prefs: Option<PathBuf>) -> Self {
        if let Some(feed) = feed {
            self.feed_path = feed;
        }
        if let Some(prefs) = prefs {
            self.prefs_path = prefs;
        }
        self
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
