use anyhow::Result;
use gamify_core::config::GamifyConfig;
use gamify_core::date::{parse_date, parse_month};
use gamify_core::CalendarState;
use owo_colors::OwoColorize;

use crate::commands::{print_json, EventSource};
use crate::render::render_month;

pub fn run(date: &str, month: Option<&str>, json: bool, source: &EventSource) -> Result<()> {
    let config = GamifyConfig::load()?;
    let builder = source.builder(&config)?;
    let events = source.load(&config)?;
    let day = parse_date(date)?;

    let before = match month {
        Some(month) => CalendarState::new(parse_month(month)?, None),
        None => CalendarState::initial(builder.today(), &config.initial_selection),
    };

    let grid = builder.build(before.displayed_month(), before.selected(), &events)?;
    let Some(cell) = grid.cell(day) else {
        anyhow::bail!(
            "{} is not visible in {}. Visible days: {} to {}",
            day,
            before.displayed_month().format("%B %Y"),
            grid.visible_range().0,
            grid.visible_range().1
        );
    };

    let after = before.clicked(cell);
    log::debug!("Selected {} from {:?}", day, before);

    let grid = builder.build(after.displayed_month(), after.selected(), &events)?;

    if json {
        return print_json(&after, &grid);
    }

    if after.displayed_month() != before.displayed_month() {
        println!(
            "{} {}\n",
            "Moved to".dimmed(),
            after.displayed_month().format("%B %Y")
        );
    }

    print!("{}", render_month(&grid, &events, &builder.zone()));

    Ok(())
}
