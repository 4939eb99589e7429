//! Persisted user preferences: the service-meeting exclusion flag and the
//! set of attended meeting ids.
//!
//! Stored as a small JSON document. A missing file means defaults; the file
//! is only written when a preference actually changes.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slots::MeetingFilter;

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to read preferences {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid preferences file {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub exclude_service: bool,
    #[serde(default)]
    pub attended: BTreeSet<u64>,
}

impl Prefs {
    /// Load preferences, treating a missing file as defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Read`] for I/O failures other than "not found"
    /// and [`PrefsError::Parse`] for malformed JSON.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(PrefsError::Read { path: path.to_path_buf(), source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| PrefsError::Parse { path: path.to_path_buf(), source })
    }

    /// Write preferences as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Write`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        std::fs::write(path, bytes).map_err(|source| PrefsError::Write { path: path.to_path_buf(), source })
    }

    /// Mark or unmark a meeting as attended. Returns whether anything changed.
    pub fn set_attended(&mut self, id: u64, attended: bool) -> bool {
        if attended { self.attended.insert(id) } else { self.attended.remove(&id) }
    }

    pub fn set_exclude_service(&mut self, exclude: bool) -> bool {
        std::mem::replace(&mut self.exclude_service, exclude) != exclude
    }

    /// Pre-filter reflecting these preferences.
    #[must_use]
    pub fn filter(&self, attended_only: bool) -> MeetingFilter {
        let mut filter = MeetingFilter::default();
        filter.set_exclude_service(self.exclude_service);
        filter.set_attended(self.attended.iter().copied());
        filter.set_attended_only(attended_only);
        filter
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
