//! Host application context.
//!
//! DESIGN
//! ======
//! `AppContext` is the single owner of everything a command needs: typed
//! config, persisted preferences, and the last successfully decoded meeting
//! list. Slot tables are never cached here; every view asks for a fresh
//! [`AppContext::table`], so a preference change or reload is visible to the
//! next build without any invalidation bookkeeping.

use std::path::Path;

use meetings::Meeting;
use slots::{Cursor, DaySlotTable, MeetingFilter, SlotKey, build, jump_to};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::prefs::Prefs;

pub struct AppContext {
    config: AppConfig,
    prefs: Prefs,
    meetings: Vec<Meeting>,
    attended_only: bool,
}

impl AppContext {
    /// Read preferences and the meeting feed named by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the feed cannot be read or decoded, or the preferences file
    /// exists but is unreadable.
    pub fn load(config: AppConfig, attended_only: bool) -> Result<Self, AppError> {
        let prefs = Prefs::load(&config.prefs_path)?;
        let meetings = load_feed(&config.feed_path)?;
        Ok(Self { config, prefs, meetings, attended_only })
    }

    #[must_use]
    pub fn from_parts(config: AppConfig, prefs: Prefs, meetings: Vec<Meeting>, attended_only: bool) -> Self {
        Self { config, prefs, meetings, attended_only }
    }

    /// Re-read preferences and feed. On failure the current data is kept.
    ///
    /// # Errors
    ///
    /// Same as [`AppContext::load`].
    pub fn reload(&mut self) -> Result<(), AppError> {
        let prefs = Prefs::load(&self.config.prefs_path)?;
        let meetings = load_feed(&self.config.feed_path)?;
        self.prefs = prefs;
        self.meetings = meetings;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    #[must_use]
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    #[must_use]
    pub fn attended_only(&self) -> bool {
        self.attended_only
    }

    #[must_use]
    pub fn filter(&self) -> MeetingFilter {
        self.prefs.filter(self.attended_only())
    }

    /// Slot table over the meetings that pass the current filter.
    #[must_use]
    pub fn table(&self) -> DaySlotTable {
        build(&self.filter().apply(&self.meetings)).with_default_duration(self.config.default_duration_minutes)
    }

    #[must_use]
    pub fn meeting(&self, id: u64) -> Option<&Meeting> {
        self.meetings().iter().find(|m| m.id == id)
    }

    /// Filtered meetings whose name contains `query`, in week order, each
    /// with the cursor of its slot.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(&Meeting, Option<Cursor>)> {
        let mut filter = self.filter();
        filter.set_name_query(Some(query));
        let table = self.table();

        let mut hits = self
            .meetings
            .iter()
            .filter(|m| filter.allows(m))
            .map(|m| (m, deep_link(&table, m)))
            .collect::<Vec<_>>();
        hits.sort_by(|(a, _), (b, _)| {
            (a.weekday, a.start_minute, &a.name, a.id).cmp(&(b.weekday, b.start_minute, &b.name, b.id))
        });
        hits
    }

    /// Mark or unmark a meeting as attended and persist the change.
    /// Returns whether the preference actually changed.
    ///
    /// # Errors
    ///
    /// [`AppError::UnknownMeeting`] when attending an id the feed does not
    /// contain, or a preferences write failure.
    pub fn set_attendance(&mut self, id: u64, attended: bool) -> Result<bool, AppError> {
        if attended && self.meeting(id).is_none() {
            return Err(AppError::UnknownMeeting(id));
        }
        let changed = self.prefs.set_attended(id, attended);
        if changed {
            self.prefs.save(&self.config.prefs_path)?;
            tracing::info!(id, attended, "attendance updated");
        }
        Ok(changed)
    }
}

/// Cursor of the slot holding `meeting`, or `None` when the table does not
/// contain it (e.g. it is hidden by the current filter).
#[must_use]
pub fn deep_link(table: &DaySlotTable, meeting: &Meeting) -> Option<Cursor> {
    let key = SlotKey::from_minutes(meeting.start_minute)?;
    let cursor = jump_to(table, meeting.weekday, key)?;
    let slot = table.slot(cursor.day(), cursor.slot())?;
    (slot.key == key && slot.meetings.iter().any(|m| m.id == meeting.id)).then_some(cursor)
}

/// Read and decode a feed file, logging every skipped record.
///
/// # Errors
///
/// [`AppError::ReadFeed`] for I/O failures, [`AppError::Feed`] when the
/// document is not a meeting feed.
pub fn load_feed(path: &Path) -> Result<Vec<Meeting>, AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::ReadFeed { path: path.to_path_buf(), source })?;
    let decoded = meetings::decode_feed(&bytes)?;

    for skipped in &decoded.skipped {
        tracing::warn!(index = skipped.index, id = ?skipped.id, reason = %skipped.reason, "skipped feed record");
    }
    tracing::info!(
        path = %path.display(),
        count = decoded.meetings.len(),
        skipped = decoded.skipped.len(),
        "meeting feed loaded"
    );
    Ok(decoded.meetings)
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
