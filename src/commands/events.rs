use anyhow::Result;
use chrono::NaiveDate;
use gamify_core::config::GamifyConfig;
use gamify_core::date_range::{events_in_range, DateRange};
use owo_colors::OwoColorize;

use crate::commands::EventSource;
use crate::render::render_event_line;

pub fn run(from: Option<&str>, to: Option<&str>, source: &EventSource) -> Result<()> {
    let config = GamifyConfig::load()?;
    let builder = source.builder(&config)?;
    let events = source.load(&config)?;
    let zone = builder.zone();

    let range = DateRange::from_args(from, to)?;
    let matching = events_in_range(&events, &range, &zone);

    if matching.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in matching {
        let date = event.start.calendar_date(&zone);

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(date, builder.today()).bold());
            current_date = Some(date);
        }

        println!("  {}", render_event_line(event, &zone));
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}
