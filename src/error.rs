//! Top-level error for the `meetingfinder` binary.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::prefs::PrefsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prefs(#[from] PrefsError),
    #[error("failed to read meeting feed {}: {source}", path.display())]
    ReadFeed { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Feed(#[from] meetings::FeedError),
    #[error("no meeting with id {0}")]
    UnknownMeeting(u64),
    #[error("invalid day `{0}` (expected 0-7, a weekday name, or `live`)")]
    InvalidDay(String),
    #[error("invalid time `{0}` (expected HH:MM)")]
    InvalidTime(String),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
