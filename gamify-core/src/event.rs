//! Calendar events as read-only input to the month grid.
//!
//! Events use the JSON shape served by the dashboard backend:
//! `title`, `description`, `start_time`, `end_time`, `location`, `all_day`.
//! Extra fields (`created_at`, `updated_at`, ...) are ignored.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::date::same_calendar_day;
use crate::error::{GamifyError, GamifyResult};
use crate::zone::ViewZone;

/// A point in time attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventTime {
    /// All-day value without a time component
    Date(NaiveDate),
    /// Wall-clock time with no offset, interpreted in the viewer's zone
    Floating(NaiveDateTime),
    /// Absolute time with a UTC offset
    Zoned(DateTime<FixedOffset>),
}

impl EventTime {
    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.f]]` or RFC 3339.
    pub fn parse(s: &str) -> GamifyResult<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(EventTime::Date(date));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(EventTime::Zoned(dt));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(EventTime::Floating(dt));
            }
        }

        Err(GamifyError::EventParse(format!("Unrecognized timestamp '{s}'")))
    }

    /// The calendar day this time falls on when viewed in `zone`.
    /// Dates and floating times ignore the zone.
    pub fn calendar_date(&self, zone: &ViewZone) -> NaiveDate {
        self.local_datetime(zone).date()
    }

    /// Wall-clock time in `zone`, used for ordering and range checks.
    /// All-day values sort at midnight.
    pub fn local_datetime(&self, zone: &ViewZone) -> NaiveDateTime {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN),
            EventTime::Floating(dt) => *dt,
            EventTime::Zoned(dt) => zone.localize(dt),
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            EventTime::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl TryFrom<String> for EventTime {
    type Error = GamifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EventTime::parse(&value)
    }
}

impl From<EventTime> for String {
    fn from(time: EventTime) -> Self {
        time.to_string()
    }
}

/// A calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "start_time")]
    pub start: EventTime,
    #[serde(alias = "end_time")]
    pub end: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start: EventTime, end: EventTime) -> Self {
        CalendarEvent {
            id: None,
            title: title.into(),
            description: None,
            start,
            end,
            location: None,
            all_day: start.is_date(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day || self.start.is_date()
    }

    /// Whether the event starts on `date` (calendar-day equality).
    pub fn starts_on(&self, date: NaiveDate, zone: &ViewZone) -> bool {
        same_calendar_day(&self.start.calendar_date(zone), &date)
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Parse a JSON array of events.
pub fn parse_events(json: &str) -> GamifyResult<Vec<CalendarEvent>> {
    serde_json::from_str(json).map_err(|e| GamifyError::EventParse(e.to_string()))
}

/// Load a JSON array of events from disk.
pub fn load_events(path: &Path) -> GamifyResult<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)
        .map_err(|e| GamifyError::EventParse(format!("{}: {e}", path.display())))?;

    log::debug!("Loaded {} events from {}", events.len(), path.display());

    Ok(events)
}
