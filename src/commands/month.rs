use anyhow::Result;
use gamify_core::config::GamifyConfig;
use gamify_core::date::{parse_date, parse_month};
use gamify_core::CalendarState;

use crate::commands::{print_json, EventSource};
use crate::render::render_month;

pub fn run(
    month: Option<&str>,
    select: Option<&str>,
    delta: i32,
    json: bool,
    source: &EventSource,
) -> Result<()> {
    let config = GamifyConfig::load()?;
    let builder = source.builder(&config)?;
    let events = source.load(&config)?;

    let mut state = CalendarState::initial(builder.today(), &config.initial_selection);

    if let Some(select) = select {
        let day = parse_date(select)?;
        state = CalendarState::new(day, Some(day));
    }

    if let Some(month) = month {
        state = CalendarState::new(parse_month(month)?, state.selected());
    }

    let state = state.advanced_by(delta)?;
    let grid = builder.build(state.displayed_month(), state.selected(), &events)?;

    if json {
        return print_json(&state, &grid);
    }

    print!("{}", render_month(&grid, &events, &builder.zone()));

    Ok(())
}
