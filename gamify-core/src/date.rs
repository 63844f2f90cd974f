//! Calendar-day helpers and boundary validation.
//!
//! Everything in the engine compares dates by calendar day (year, month, day).
//! Callers parse user input with the functions here so malformed values never
//! reach the grid builder.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{GamifyError, GamifyResult};

/// Number of columns in a month grid (Sunday through Saturday).
pub const DAYS_PER_WEEK: usize = 7;

/// Number of rows in a month grid.
pub const WEEKS_PER_GRID: usize = 6;

/// Total cells in a month grid.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date - chrono::Days::new(u64::from(date.day0()))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> GamifyResult<u32> {
    let first = first_of_month(date);
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| GamifyError::DateOutOfRange(format!("month after {first}")))?;

    Ok((next - first).num_days() as u32)
}

/// Weekday index of `date` with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Two values are the same calendar day when year, month and day match.
/// Time-of-day components are ignored.
pub fn same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Two values fall in the same month of the same year.
pub fn same_month<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Build a date from components, rejecting impossible combinations such as
/// February 30 or month 13.
pub fn validate_ymd(year: i32, month: u32, day: u32) -> GamifyResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| GamifyError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> GamifyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| GamifyError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> GamifyResult<NaiveDate> {
    let trimmed = s.trim();
    let (year, month) = trimmed
        .split_once('-')
        .ok_or_else(|| GamifyError::InvalidMonth(s.to_string()))?;

    let year: i32 = year
        .parse()
        .map_err(|_| GamifyError::InvalidMonth(s.to_string()))?;
    let month: u32 = month
        .parse()
        .map_err(|_| GamifyError::InvalidMonth(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| GamifyError::InvalidMonth(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month_covers_all_lengths() {
        assert_eq!(days_in_month(date(2025, 10, 17)).unwrap(), 31);
        assert_eq!(days_in_month(date(2025, 9, 1)).unwrap(), 30);
        assert_eq!(days_in_month(date(2025, 2, 10)).unwrap(), 28);
        assert_eq!(days_in_month(date(2024, 2, 29)).unwrap(), 29);
        assert_eq!(days_in_month(date(2024, 12, 31)).unwrap(), 31);
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(date(2025, 10, 31)), date(2025, 10, 1));
        assert_eq!(first_of_month(date(2025, 1, 1)), date(2025, 1, 1));
    }

    #[test]
    fn test_weekday_index_starts_on_sunday() {
        // 2025-10-05 is a Sunday, 2025-10-01 a Wednesday
        assert_eq!(weekday_index(date(2025, 10, 5)), 0);
        assert_eq!(weekday_index(date(2025, 10, 1)), 3);
        assert_eq!(weekday_index(date(2025, 10, 4)), 6);
    }

    #[test]
    fn test_same_calendar_day_ignores_time() {
        let morning: NaiveDateTime = date(2025, 10, 5).and_hms_opt(0, 0, 1).unwrap();
        let night: NaiveDateTime = date(2025, 10, 5).and_hms_opt(23, 59, 59).unwrap();

        assert!(same_calendar_day(&morning, &night));
        assert!(same_calendar_day(&morning, &date(2025, 10, 5)));
        assert!(!same_calendar_day(&morning, &date(2025, 10, 6)));
        assert!(!same_calendar_day(&date(2024, 10, 5), &date(2025, 10, 5)));
    }

    #[test]
    fn test_validate_ymd_rejects_impossible_dates() {
        assert!(validate_ymd(2025, 2, 30).is_err());
        assert!(validate_ymd(2025, 13, 1).is_err());
        assert!(validate_ymd(2025, 0, 1).is_err());
        assert_eq!(validate_ymd(2024, 2, 29).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-10").unwrap(), date(2025, 10, 1));
        assert_eq!(parse_month(" 2025-1 ").unwrap(), date(2025, 1, 1));
        assert!(matches!(parse_month("2025-13"), Err(GamifyError::InvalidMonth(_))));
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-10-05").is_err());
        assert!(parse_month("october").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-10-05").unwrap(), date(2025, 10, 5));
        assert!(matches!(parse_date("2025-02-30"), Err(GamifyError::InvalidDate(_))));
        assert!(parse_date("10/5/2025").is_err());
    }
}
