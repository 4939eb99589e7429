//! Pre-build filtering of the meeting list.
//!
//! Any change to a filter setting invalidates the current table; callers
//! re-run [`crate::build`] on the output of [`MeetingFilter::apply`].

use std::collections::BTreeSet;

use meetings::Meeting;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    exclude_service: bool,
    attended_only: bool,
    attended: BTreeSet<u64>,
    name_query: Option<String>,
}

impl MeetingFilter {
    #[must_use]
    pub fn allows(&self, meeting: &Meeting) -> bool {
        if self.exclude_service && meeting.service {
            return false;
        }
        if self.attended_only && !self.attended.contains(&meeting.id) {
            return false;
        }
        self.name_query
            .as_deref()
            .is_none_or(|query| meeting.name.to_lowercase().contains(query))
    }

    /// Meetings that pass the filter, in input order.
    #[must_use]
    pub fn apply(&self, meetings: &[Meeting]) -> Vec<Meeting> {
        meetings.iter().filter(|m| self.allows(m)).cloned().collect()
    }

    pub fn set_exclude_service(&mut self, exclude: bool) {
        self.exclude_service = exclude;
    }

    pub fn set_attended_only(&mut self, attended_only: bool) {
        self.attended_only = attended_only;
    }

    pub fn set_attended(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.attended = ids.into_iter().collect();
    }

    pub fn set_attendance(&mut self, id: u64, attended: bool) {
        if attended {
            self.attended.insert(id);
        } else {
            self.attended.remove(&id);
        }
    }

    /// Case-insensitive name substring; blank queries clear the search.
    pub fn set_name_query(&mut self, query: Option<&str>) {
        self.name_query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
    }

    #[must_use]
    pub fn excludes_service(&self) -> bool {
        self.exclude_service
    }

    #[must_use]
    pub fn attended_only(&self) -> bool {
        self.attended_only
    }

    #[must_use]
    pub fn is_attended(&self, id: u64) -> bool {
        self.attended.contains(&id)
    }

    #[must_use]
    pub fn name_query(&self) -> Option<&str> {
        self.name_query.as_deref()
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
