//! Terminal rendering for calendar types.
//!
//! Extension traits that add colored output to gamify-core types using
//! owo_colors.

use chrono::NaiveDate;
use gamify_core::date_range::events_on;
use gamify_core::{CalendarEvent, DayCell, EventTime, MonthGrid, ViewZone};
use owo_colors::{OwoColorize, Style};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayCell {
    fn render(&self) -> String {
        let mut style = Style::new();
        if !self.is_current_month {
            style = style.dimmed();
        }
        if self.is_today {
            style = style.bold().underline();
        }
        if self.is_selected {
            style = style.reversed();
        }

        let day = format!("{:>2}", self.day_num()).style(style).to_string();
        let marker = if self.has_events() {
            "•".yellow().to_string()
        } else {
            " ".to_string()
        };

        format!("{day}{marker}")
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::with_capacity(8);

        let title = self.month().format("%B %Y").to_string();
        lines.push(format!("{:^27}", title).bold().to_string());
        lines.push(WEEKDAY_HEADER.map(|d| format!("{d} ")).join(" ").dimmed().to_string());

        for week in self.weeks() {
            let cells: Vec<String> = week.iter().map(Render::render).collect();
            lines.push(cells.join(" "));
        }

        lines.join("\n")
    }
}

/// Render a grid followed by the events of its selected day.
pub fn render_month(grid: &MonthGrid, events: &[CalendarEvent], zone: &ViewZone) -> String {
    let mut out = grid.render();
    out.push('\n');

    if let Some(cell) = grid.selected_cell() {
        out.push('\n');
        out.push_str(&render_day_events(cell.date, events, zone));
    }

    out
}

/// Events starting on `date`, one per line under a date heading.
pub fn render_day_events(date: NaiveDate, events: &[CalendarEvent], zone: &ViewZone) -> String {
    let mut lines = vec![date.format("%A %-m/%-d/%Y").to_string().bold().to_string()];

    let day_events = events_on(events, date, zone);
    if day_events.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
    }

    for event in day_events {
        lines.push(format!("  {}", render_event_line(event, zone)));
    }

    lines.join("\n") + "\n"
}

/// "  10:00 Title @ Location"
pub fn render_event_line(event: &CalendarEvent, zone: &ViewZone) -> String {
    let time = format_time(&event.start, event.is_all_day(), zone);
    let mut line = format!("{} {}", time, event.title);

    if let Some(location) = &event.location {
        line.push_str(&format!(" {}", format!("@ {location}").dimmed()));
    }

    line
}

/// Format the time portion of an event (e.g. "15:00" or "all-day")
fn format_time(time: &EventTime, all_day: bool, zone: &ViewZone) -> String {
    if all_day {
        return format!("{:>7}", "all-day");
    }

    format!("{:>7}", time.local_datetime(zone).format("%H:%M"))
}
