//! Built-in events shown when no events file is configured.

use gamify_core::{CalendarEvent, EventTime};

const SAMPLE_EVENTS: &[(&str, &str, &str, Option<&str>)] = &[
    ("I&C 6B: ZyBook", "2025-10-05T09:00:00", "2025-10-05T10:00:00", None),
    ("I&C 6B: Reading Quiz", "2025-10-05T13:00:00", "2025-10-05T13:30:00", None),
    ("I&C 6B: ICA", "2025-10-07T10:00:00", "2025-10-07T11:30:00", Some("Lecture Hall")),
    ("Study group", "2025-10-09T18:00:00", "2025-10-09T20:00:00", Some("Library")),
    ("Hackathon", "2025-10-11", "2025-10-12", None),
    ("Midterm review", "2025-10-30T15:00:00", "2025-10-30T16:00:00", None),
    ("Project demo", "2025-11-03T10:00:00", "2025-11-03T11:00:00", None),
];

pub fn events() -> Vec<CalendarEvent> {
    SAMPLE_EVENTS
        .iter()
        .filter_map(|(title, start, end, location)| {
            let start = EventTime::parse(start).ok()?;
            let end = EventTime::parse(end).ok()?;
            let event = CalendarEvent::new(*title, start, end);

            Some(match location {
                Some(location) => event.with_location(*location),
                None => event,
            })
        })
        .collect()
}
