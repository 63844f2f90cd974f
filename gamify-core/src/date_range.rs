//! Date range for filtering events.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::date::parse_date;
use crate::error::GamifyResult;
use crate::event::CalendarEvent;
use crate::grid::MonthGrid;
use crate::zone::ViewZone;

/// Date range for filtering events, in wall-clock time.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    /// Parse optional YYYY-MM-DD bounds.
    /// - `from` starts at the beginning of its day
    /// - `to` ends at the last second of its day, so the whole day is included
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> GamifyResult<Self> {
        let from = from.map(parse_date).transpose()?;
        let to = to.map(parse_date).transpose()?;

        Ok(Self::days(from, to))
    }

    /// Whole days from `from` through `to`.
    pub fn days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange {
            from: from.map(start_of_day),
            to: to.map(end_of_day),
        }
    }

    /// Every day visible in `grid`.
    pub fn for_grid(grid: &MonthGrid) -> Self {
        let (first, last) = grid.visible_range();
        Self::days(Some(first), Some(last))
    }

    /// An event is in range when it starts at or after `from` and ends at or
    /// before `to`.
    pub fn contains(&self, event: &CalendarEvent, zone: &ViewZone) -> bool {
        let start = event.start.local_datetime(zone);
        let end = event.end.local_datetime(zone);

        self.from.map_or(true, |from| start >= from) && self.to.map_or(true, |to| end <= to)
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59
const LAST_SECOND: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(LAST_SECOND)
}

/// Events inside `range`, ordered by start time.
pub fn events_in_range<'a>(
    events: &'a [CalendarEvent],
    range: &DateRange,
    zone: &ViewZone,
) -> Vec<&'a CalendarEvent> {
    let mut matching: Vec<&CalendarEvent> =
        events.iter().filter(|e| range.contains(e, zone)).collect();

    matching.sort_by_key(|e| e.start.local_datetime(zone));
    matching
}

/// Events starting on `date`, ordered by start time.
pub fn events_on<'a>(
    events: &'a [CalendarEvent],
    date: NaiveDate,
    zone: &ViewZone,
) -> Vec<&'a CalendarEvent> {
    let mut matching: Vec<&CalendarEvent> =
        events.iter().filter(|e| e.starts_on(date, zone)).collect();

    matching.sort_by_key(|e| e.start.local_datetime(zone));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTime;
    use crate::grid::MonthGridBuilder;
    use chrono::FixedOffset;

    fn utc() -> ViewZone {
        ViewZone::Fixed(FixedOffset::east_opt(0).unwrap())
    }

    fn event(title: &str, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::new(
            title,
            EventTime::parse(start).unwrap(),
            EventTime::parse(end).unwrap(),
        )
    }

    fn sample() -> Vec<CalendarEvent> {
        vec![
            event("late", "2025-10-20T18:00:00", "2025-10-20T19:00:00"),
            event("early", "2025-10-05T08:00:00", "2025-10-05T09:00:00"),
            event("spanning", "2025-10-31T22:00:00", "2025-11-01T02:00:00"),
            event("before", "2025-09-30T10:00:00", "2025-09-30T11:00:00"),
        ]
    }

    #[test]
    fn test_from_args_parses_whole_days() {
        let range = DateRange::from_args(Some("2025-10-01"), Some("2025-10-31")).unwrap();
        assert_eq!(range.from.unwrap().to_string(), "2025-10-01 00:00:00");
        assert_eq!(range.to.unwrap().to_string(), "2025-10-31 23:59:59");

        assert_eq!(DateRange::from_args(None, None).unwrap(), DateRange::default());
        assert!(DateRange::from_args(Some("10/01/2025"), None).is_err());
    }

    #[test]
    fn test_to_bound_includes_events_ending_late_that_day() {
        let events = vec![event("late night", "2025-10-31T22:00:00", "2025-10-31T23:45:00")];
        let range = DateRange::from_args(None, Some("2025-10-31")).unwrap();
        assert_eq!(events_in_range(&events, &range, &utc()).len(), 1);
    }

    #[test]
    fn test_events_in_range_filters_and_sorts() {
        let events = sample();
        let range = DateRange::from_args(Some("2025-10-01"), Some("2025-10-31")).unwrap();

        let titles: Vec<&str> = events_in_range(&events, &range, &utc())
            .iter()
            .map(|e| e.title.as_str())
            .collect();

        // "spanning" ends after the range, "before" starts before it
        assert_eq!(titles, vec!["early", "late"]);
    }

    #[test]
    fn test_unbounded_range_keeps_everything() {
        let events = sample();
        let all = events_in_range(&events, &DateRange::default(), &utc());
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].title, "before");
        assert_eq!(all[3].title, "spanning");
    }

    #[test]
    fn test_range_for_grid_covers_adjacent_days() {
        let grid = MonthGridBuilder::now()
            .build(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(), None, &[])
            .unwrap();
        let range = DateRange::for_grid(&grid);

        let events = sample();
        assert_eq!(events_in_range(&events, &range, &utc()).len(), 4);
    }

    #[test]
    fn test_events_on_day() {
        let events = sample();
        let day = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        let found = events_on(&events, day, &utc());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "spanning");
    }
}
