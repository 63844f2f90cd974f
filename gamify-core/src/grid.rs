//! Month grid generation.
//!
//! A grid always holds 42 cells (6 weeks × 7 days), Sunday first. The leading
//! run comes from the previous month, then every day of the displayed month,
//! then the next month fills the remainder. Grids are snapshots: any change of
//! month, selection or events means building a new one.

use std::collections::HashMap;

use chrono::{Datelike, Days, FixedOffset, Local, NaiveDate};
use serde::Serialize;

use crate::date::{
    days_in_month, first_of_month, same_month, weekday_index, DAYS_PER_WEEK, GRID_CELLS,
};
use crate::error::{GamifyError, GamifyResult};
use crate::event::CalendarEvent;
use crate::zone::ViewZone;

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub event_count: usize,
}

impl DayCell {
    pub fn day_num(&self) -> u32 {
        self.date.day()
    }

    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }
}

/// The 42 cells of a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: NaiveDate,
    leading: usize,
    days: usize,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Number of backfill cells from the previous month.
    pub fn leading_count(&self) -> usize {
        self.leading
    }

    /// Number of forward-fill cells from the next month.
    pub fn trailing_count(&self) -> usize {
        GRID_CELLS - self.leading - self.days
    }

    pub fn current_month_cells(&self) -> &[DayCell] {
        &self.cells[self.leading..self.leading + self.days]
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.is_selected)
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.is_today)
    }

    /// The cell showing `date`, if it is visible in this grid.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        let first = self.cells.first()?.date;
        let index = (date - first).num_days();

        if (0..GRID_CELLS as i64).contains(&index) {
            self.cells.get(index as usize)
        } else {
            None
        }
    }

    /// First and last visible dates.
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        (self.cells[0].date, self.cells[GRID_CELLS - 1].date)
    }

    pub fn total_events(&self) -> usize {
        self.cells.iter().map(|c| c.event_count).sum()
    }
}

/// Builds month grids relative to a reference "today" and the zone used to
/// place zoned event timestamps on calendar days.
#[derive(Debug, Clone, Copy)]
pub struct MonthGridBuilder {
    today: NaiveDate,
    zone: ViewZone,
}

impl MonthGridBuilder {
    /// Builder using the local wall clock for "today" and the local zone for
    /// events.
    pub fn now() -> Self {
        MonthGridBuilder {
            today: Local::now().date_naive(),
            zone: ViewZone::Local,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_zone(mut self, zone: ViewZone) -> Self {
        self.zone = zone;
        self
    }

    /// Use a constant offset for every event.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        self.with_zone(ViewZone::Fixed(offset))
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn zone(&self) -> ViewZone {
        self.zone
    }

    /// Build the grid for the month containing `displayed_month`.
    ///
    /// Only the year and month of `displayed_month` matter. `selected` may be
    /// any date; it is highlighted only when visible. Events are counted on
    /// the calendar day their start falls on.
    pub fn build(
        &self,
        displayed_month: NaiveDate,
        selected: Option<NaiveDate>,
        events: &[CalendarEvent],
    ) -> GamifyResult<MonthGrid> {
        let first = first_of_month(displayed_month);
        let leading = weekday_index(first);
        let days = days_in_month(first)? as usize;

        let start = first
            .checked_sub_days(Days::new(leading as u64))
            .ok_or_else(|| GamifyError::DateOutOfRange(format!("grid before {first}")))?;

        let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
        for event in events {
            *counts.entry(event.start.calendar_date(&self.zone)).or_default() += 1;
        }

        let cells: Vec<DayCell> = start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| DayCell {
                date,
                is_current_month: same_month(&date, &first),
                is_today: date == self.today,
                is_selected: selected == Some(date),
                event_count: counts.get(&date).copied().unwrap_or(0),
            })
            .collect();

        // iter_days stops at NaiveDate::MAX
        if cells.len() != GRID_CELLS {
            return Err(GamifyError::DateOutOfRange(format!("grid after {first}")));
        }

        log::debug!(
            "Built grid for {}: {} leading, {} days, {} trailing",
            first.format("%Y-%m"),
            leading,
            days,
            GRID_CELLS - leading - days
        );

        Ok(MonthGrid {
            month: first,
            leading,
            days,
            cells,
        })
    }
}

impl Default for MonthGridBuilder {
    fn default() -> Self {
        Self::now()
    }
}

/// Build a month grid against the local wall clock.
pub fn build_month_grid(
    displayed_month: NaiveDate,
    selected: Option<NaiveDate>,
    events: &[CalendarEvent],
) -> GamifyResult<MonthGrid> {
    MonthGridBuilder::now().build(displayed_month, selected, events)
}
