pub mod config;
pub mod events;
pub mod month;
pub mod select;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gamify_core::config::GamifyConfig;
use gamify_core::{CalendarState, MonthGrid};
use gamify_core::date::parse_date;
use gamify_core::event::load_events;
use gamify_core::{CalendarEvent, MonthGridBuilder};

use crate::sample;

/// Where events come from, and the reference "today".
#[derive(Args, Debug, Default)]
pub struct EventSource {
    /// JSON file with events; overrides `events_file` from the config
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Use the built-in sample events even if an events file is configured
    #[arg(long, conflicts_with = "events")]
    pub sample: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

impl EventSource {
    pub fn load(&self, config: &GamifyConfig) -> Result<Vec<CalendarEvent>> {
        if self.sample {
            return Ok(sample::events());
        }

        match self.events.clone().or_else(|| config.events_path()) {
            Some(path) => load_events(&path)
                .with_context(|| format!("Could not load events from {}", path.display())),
            None => {
                log::info!("No events file configured, showing sample events");
                Ok(sample::events())
            }
        }
    }

    pub fn builder(&self, config: &GamifyConfig) -> Result<MonthGridBuilder> {
        let builder = MonthGridBuilder::now().with_zone(config.zone()?);

        match self.today.as_deref() {
            Some(today) => Ok(builder.with_today(parse_date(today)?)),
            None => Ok(builder),
        }
    }
}

/// Print a state snapshot and its grid for another program to render.
pub fn print_json(state: &CalendarState, grid: &MonthGrid) -> Result<()> {
    let output = serde_json::json!({
        "state": state,
        "grid": grid,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
