//! Shared meeting record model and JSON feed codec.
//!
//! This crate owns the record shape consumed by `slots` and by the terminal
//! host. Decoding is lenient per record: one malformed entry is skipped and
//! reported without failing the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minutes in one day; valid start minutes are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned by [`decode_feed`].
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The document is not JSON, or is neither a list nor a `{"meetings": [...]}` object.
    #[error("failed to decode meeting feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single feed entry was left out of a [`DecodedFeed`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// Missing or mistyped fields.
    #[error("malformed record: {0}")]
    Malformed(String),
    /// Weekday outside `1..=7`.
    #[error("weekday {0} is outside 1..=7")]
    WeekdayOutOfRange(i64),
    /// Start time that is not a valid `HH:MM` clock value.
    #[error("invalid start time `{0}`")]
    InvalidStartTime(String),
    /// Negative or oversized duration.
    #[error("invalid duration {0}")]
    InvalidDuration(i64),
}

/// How a meeting is attended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    #[default]
    InPerson,
    Virtual,
    Hybrid,
}

impl Venue {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InPerson => "in person",
            Self::Virtual => "virtual",
            Self::Hybrid => "hybrid",
        }
    }
}

/// One recurring weekly meeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Opaque feed identifier.
    pub id: u64,
    /// Day of week, 1 = Sunday through 7 = Saturday.
    pub weekday: u8,
    /// Start time as minutes since local midnight.
    pub start_minute: u16,
    /// Length of the meeting, when the feed provides one.
    pub duration_minutes: Option<u16>,
    pub name: String,
    pub venue: Venue,
    /// Business/service meeting rather than a regular one.
    pub service: bool,
    pub location: Option<String>,
    pub virtual_url: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub notes: Option<String>,
}

impl Meeting {
    /// Build an in-person, non-service meeting with no contact details.
    #[must_use]
    pub fn new(id: u64, weekday: u8, start_minute: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            weekday,
            start_minute,
            duration_minutes: None,
            name: name.into(),
            venue: Venue::InPerson,
            service: false,
            location: None,
            virtual_url: None,
            phone: None,
            timezone: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, minutes: u16) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.venue = venue;
        self
    }

    #[must_use]
    pub fn with_service(mut self, service: bool) -> Self {
        self.service = service;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_virtual_url(mut self, url: impl Into<String>) -> Self {
        self.virtual_url = Some(url.into());
        self
    }

    /// Start time rendered as `HH:MM`.
    #[must_use]
    pub fn start_clock(&self) -> String {
        format_clock(self.start_minute)
    }
}

/// A feed entry that was not turned into a [`Meeting`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the entry in the feed list.
    pub index: usize,
    /// The entry's `id`, when it had a readable one.
    pub id: Option<u64>,
    pub reason: SkipReason,
}

/// Result of [`decode_feed`]: accepted meetings plus everything left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedFeed {
    pub meetings: Vec<Meeting>,
    pub skipped: Vec<SkippedRecord>,
}

/// Decode a JSON meeting feed.
///
/// Accepts either a bare array of records or an object with a `meetings`
/// array. Records with out-of-range weekdays, bad clock strings, or missing
/// fields are skipped and listed in [`DecodedFeed::skipped`].
///
/// # Errors
///
/// Returns [`FeedError::Json`] when the document itself cannot be decoded.
pub fn decode_feed(bytes: &[u8]) -> Result<DecodedFeed, FeedError> {
    let items = match serde_json::from_slice::<WireFeed>(bytes)? {
        WireFeed::Wrapped { meetings } => meetings,
        WireFeed::Bare(items) => items,
    };

    let mut decoded = DecodedFeed::default();
    for (index, item) in items.into_iter().enumerate() {
        let id = item.get("id").and_then(Value::as_u64);
        match wire_to_meeting(item) {
            Ok(meeting) => decoded.meetings.push(meeting),
            Err(reason) => decoded.skipped.push(SkippedRecord { index, id, reason }),
        }
    }
    Ok(decoded)
}

/// Encode meetings as a `{"meetings": [...]}` feed document.
///
/// # Errors
///
/// Returns [`FeedError::Json`] if serialization fails.
pub fn encode_feed(meetings: &[Meeting]) -> Result<Vec<u8>, FeedError> {
    let items = meetings.iter().map(meeting_to_wire).collect::<Vec<_>>();
    Ok(serde_json::to_vec_pretty(&serde_json::json!({ "meetings": items }))?)
}

/// Parse `HH:MM` or `HH:MM:SS` into minutes since midnight. Seconds are dropped.
#[must_use]
pub fn parse_clock(raw: &str) -> Option<u16> {
    let mut parts = raw.trim().split(':');
    let hour = parts.next()?.parse::<u16>().ok()?;
    let minute = parts.next()?.parse::<u16>().ok()?;
    if let Some(seconds) = parts.next() {
        if seconds.parse::<u16>().ok()? >= 60 {
            return None;
        }
    }
    if parts.next().is_some() || hour >= 24 || minute >= 60 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Render minutes since midnight as `HH:MM`.
#[must_use]
pub fn format_clock(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn wire_to_meeting(item: Value) -> Result<Meeting, SkipReason> {
    let wire = serde_json::from_value::<WireMeeting>(item)
        .map_err(|e| SkipReason::Malformed(e.to_string()))?;

    let weekday = u8::try_from(wire.weekday)
        .ok()
        .filter(|day| (1..=7).contains(day))
        .ok_or(SkipReason::WeekdayOutOfRange(wire.weekday))?;
    let start_minute =
        parse_clock(&wire.start_time).ok_or_else(|| SkipReason::InvalidStartTime(wire.start_time.clone()))?;
    let duration_minutes = match wire.duration_minutes {
        None => None,
        Some(raw) => Some(u16::try_from(raw).map_err(|_| SkipReason::InvalidDuration(raw))?),
    };

    Ok(Meeting {
        id: wire.id,
        weekday,
        start_minute,
        duration_minutes,
        name: wire.name,
        venue: wire.venue,
        service: wire.service,
        location: non_empty(wire.location),
        virtual_url: non_empty(wire.virtual_url),
        phone: non_empty(wire.phone),
        timezone: non_empty(wire.timezone),
        notes: non_empty(wire.notes),
    })
}

fn meeting_to_wire(meeting: &Meeting) -> WireMeeting {
    WireMeeting {
        id: meeting.id,
        weekday: i64::from(meeting.weekday),
        start_time: meeting.start_clock(),
        duration_minutes: meeting.duration_minutes.map(i64::from),
        name: meeting.name.clone(),
        venue: meeting.venue,
        service: meeting.service,
        location: meeting.location.clone(),
        virtual_url: meeting.virtual_url.clone(),
        phone: meeting.phone.clone(),
        timezone: meeting.timezone.clone(),
        notes: meeting.notes.clone(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireFeed {
    Wrapped { meetings: Vec<Value> },
    Bare(Vec<Value>),
}

#[derive(Serialize, Deserialize)]
struct WireMeeting {
    id: u64,
    weekday: i64,
    start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<i64>,
    name: String,
    #[serde(default)]
    venue: Venue,
    #[serde(default)]
    service: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    virtual_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
