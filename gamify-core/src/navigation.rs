//! Month paging and day selection.
//!
//! The displayed month and the selected day belong to the caller. These
//! functions take that state by value and hand back a new snapshot.

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::config::InitialSelection;
use crate::date::first_of_month;
use crate::error::{GamifyError, GamifyResult};
use crate::grid::DayCell;

/// Direction of a one-month page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

impl MonthStep {
    /// Accepts only -1 and +1.
    pub fn from_delta(delta: i32) -> GamifyResult<Self> {
        match delta {
            -1 => Ok(MonthStep::Previous),
            1 => Ok(MonthStep::Next),
            other => Err(GamifyError::InvalidMonthStep(other)),
        }
    }

    pub fn delta(&self) -> i32 {
        match self {
            MonthStep::Previous => -1,
            MonthStep::Next => 1,
        }
    }
}

/// First day of the month before or after `current`'s month.
pub fn advance_month(current: NaiveDate, step: MonthStep) -> GamifyResult<NaiveDate> {
    let first = first_of_month(current);
    let one = Months::new(1);

    let advanced = match step {
        MonthStep::Previous => first.checked_sub_months(one),
        MonthStep::Next => first.checked_add_months(one),
    };

    advanced.ok_or_else(|| {
        GamifyError::DateOutOfRange(format!("{} month from {}", step.delta(), first))
    })
}

/// Result of selecting a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub selected: NaiveDate,
    /// First day of the month to display after the selection
    pub displayed_month: NaiveDate,
}

/// Select `cell`. Cells from an adjacent month also move the display to
/// that month.
pub fn select_day(cell: &DayCell) -> Selection {
    Selection {
        selected: cell.date,
        displayed_month: first_of_month(cell.date),
    }
}

/// Caller-owned calendar state: the displayed month and the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarState {
    displayed_month: NaiveDate,
    selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(displayed_month: NaiveDate, selected: Option<NaiveDate>) -> Self {
        CalendarState {
            displayed_month: first_of_month(displayed_month),
            selected,
        }
    }

    /// Starting state for a session. The displayed month follows the
    /// selection when there is one, otherwise `today`.
    pub fn initial(today: NaiveDate, policy: &InitialSelection) -> Self {
        let selected = policy.resolve(today);
        Self::new(selected.unwrap_or(today), selected)
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Page one month, keeping the selection.
    pub fn advanced(self, step: MonthStep) -> GamifyResult<Self> {
        Ok(CalendarState {
            displayed_month: advance_month(self.displayed_month, step)?,
            ..self
        })
    }

    /// Page `delta` months in either direction.
    pub fn advanced_by(self, delta: i32) -> GamifyResult<Self> {
        let step = if delta < 0 {
            MonthStep::Previous
        } else {
            MonthStep::Next
        };

        (0..delta.unsigned_abs()).try_fold(self, |state, _| state.advanced(step))
    }

    pub fn with_selection(self, selection: Selection) -> Self {
        CalendarState {
            displayed_month: selection.displayed_month,
            selected: Some(selection.selected),
        }
    }

    /// Apply a click on `cell`.
    pub fn clicked(self, cell: &DayCell) -> Self {
        self.with_selection(select_day(cell))
    }

    pub fn cleared(self) -> Self {
        CalendarState {
            selected: None,
            ..self
        }
    }

    /// Display and select `today`.
    pub fn jump_to_today(self, today: NaiveDate) -> Self {
        CalendarState::new(today, Some(today))
    }
}
