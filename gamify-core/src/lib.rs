//! Calendar engine for the gamify dashboard.
//!
//! The crate is pure and stateless:
//! - `grid` builds the fixed 6×7 month grid with today/selection/event markers
//! - `navigation` pages between months and turns cell clicks into new state
//! - `event` and `date_range` model the read-only event input
//! - `config` holds the user's initial-selection policy

pub mod config;
pub mod date;
pub mod date_range;
pub mod error;
pub mod event;
pub mod grid;
pub mod navigation;
pub mod zone;

pub use error::{GamifyError, GamifyResult};
pub use event::{CalendarEvent, EventTime};
pub use grid::{build_month_grid, DayCell, MonthGrid, MonthGridBuilder};
pub use navigation::{advance_month, select_day, CalendarState, MonthStep, Selection};
pub use zone::ViewZone;
