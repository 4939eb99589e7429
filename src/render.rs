//! Plain-text and JSON views of slots, search hits, and meeting details.

use std::fmt::{self, Write as _};

use meetings::{Meeting, Venue};
use serde::Serialize;
use slots::{Cursor, MeetingFilter, weekday_name};

// =============================================================================
// SLOT VIEW
// =============================================================================

/// One meeting as listed under a slot heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingLine {
    pub id: u64,
    pub weekday: u8,
    pub start: String,
    pub name: String,
    pub venue: Venue,
    pub service: bool,
    pub attended: bool,
}

impl MeetingLine {
    fn new(meeting: &Meeting, filter: &MeetingFilter) -> Self {
        Self {
            id: meeting.id,
            weekday: meeting.weekday,
            start: meeting.start_clock(),
            name: meeting.name.clone(),
            venue: meeting.venue,
            service: meeting.service,
            attended: filter.is_attended(meeting.id),
        }
    }
}

/// What the host shows for a cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub cursor: Cursor,
    pub day_name: &'static str,
    /// Shared start time of the slot; absent for the in-progress day and empty days.
    pub time: Option<String>,
    pub meetings: Vec<MeetingLine>,
}

impl SlotView {
    /// Weekday slots list meetings by name; the in-progress list keeps its
    /// start-time order.
    #[must_use]
    pub fn new(cursor: Cursor, meetings: &[&Meeting], filter: &MeetingFilter) -> Self {
        let mut lines = meetings.iter().map(|m| MeetingLine::new(m, filter)).collect::<Vec<_>>();
        let time = if cursor.is_in_progress() {
            None
        } else {
            lines.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            lines.first().map(|line| line.start.clone())
        };
        Self { cursor, day_name: weekday_name(cursor.day()), time, meetings: lines }
    }
}

impl fmt::Display for SlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.time {
            Some(time) => write!(f, "{} {time}", self.day_name)?,
            None => f.write_str(self.day_name)?,
        }
        writeln!(f, "  [{}:{}]", self.cursor.day(), self.cursor.slot())?;

        if self.meetings.is_empty() {
            return write!(f, "  (no meetings)");
        }
        for (i, line) in self.meetings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mark = if line.attended { '*' } else { ' ' };
            write!(f, "  {mark} ")?;
            if self.cursor.is_in_progress() {
                write!(f, "{} ", weekday_name(line.weekday))?;
            }
            write!(f, "{}  {} (#{}, {}", line.start, line.name, line.id, line.venue.label())?;
            if line.service {
                f.write_str(", service")?;
            }
            f.write_char(')')?;
        }
        Ok(())
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub line: MeetingLine,
    pub cursor: Option<Cursor>,
}

#[must_use]
pub fn search_hits(hits: &[(&Meeting, Option<Cursor>)], filter: &MeetingFilter) -> Vec<SearchHit> {
    hits.iter()
        .map(|(meeting, cursor)| SearchHit { line: MeetingLine::new(meeting, filter), cursor: *cursor })
        .collect()
}

#[must_use]
pub fn search_text(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "no matching meetings".to_owned();
    }
    hits.iter()
        .map(|hit| {
            let line = &hit.line;
            let link = hit.cursor.map(|c| format!("  [{}:{}]", c.day(), c.slot())).unwrap_or_default();
            format!("#{:<6} {:<9} {}  {}{link}", line.id, weekday_name(line.weekday), line.start, line.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// DETAILS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MeetingDetails<'a> {
    pub meeting: &'a Meeting,
    pub attended: bool,
    pub cursor: Option<Cursor>,
}

impl fmt::Display for MeetingDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.meeting;
        writeln!(f, "#{} {}", m.id, m.name)?;
        write!(f, "  when:     {} {}", weekday_name(m.weekday), m.start_clock())?;
        if let Some(minutes) = m.duration_minutes {
            write!(f, " ({minutes} min)")?;
        }
        write!(f, "\n  venue:    {}", m.venue.label())?;
        if m.service {
            f.write_str(", service")?;
        }
        let optional = [
            ("location", &m.location),
            ("online", &m.virtual_url),
            ("phone", &m.phone),
            ("timezone", &m.timezone),
            ("notes", &m.notes),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                write!(f, "\n  {:<9} {value}", format!("{label}:"))?;
            }
        }
        write!(f, "\n  attended: {}", if self.attended { "yes" } else { "no" })?;
        if let Some(cursor) = self.cursor {
            write!(f, "\n  slot:     [{}:{}]", cursor.day(), cursor.slot())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
