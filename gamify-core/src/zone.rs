//! Time zone used to place zoned event timestamps on calendar days.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::{GamifyError, GamifyResult};

/// The zone a calendar is viewed in. Each timestamp is resolved with the
/// zone's rules at that instant, so daylight-saving changes are honored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewZone {
    /// The system's local zone
    #[default]
    Local,
    /// An IANA zone such as `Europe/Berlin`
    Named(Tz),
    /// A constant offset with no daylight-saving rules
    Fixed(FixedOffset),
}

impl ViewZone {
    /// Parse `local`, an IANA zone name, or an offset such as `+02:00`.
    pub fn parse(s: &str) -> GamifyResult<Self> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("local") {
            return Ok(ViewZone::Local);
        }

        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(ViewZone::Named(tz));
        }

        s.parse::<FixedOffset>()
            .map(ViewZone::Fixed)
            .map_err(|_| GamifyError::Config(format!("Unknown time zone '{s}'")))
    }

    /// Wall-clock time of `dt` in this zone.
    pub fn localize(&self, dt: &DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            ViewZone::Local => dt.with_timezone(&Local).naive_local(),
            ViewZone::Named(tz) => dt.with_timezone(tz).naive_local(),
            ViewZone::Fixed(offset) => dt.with_timezone(offset).naive_local(),
        }
    }
}

impl From<FixedOffset> for ViewZone {
    fn from(offset: FixedOffset) -> Self {
        ViewZone::Fixed(offset)
    }
}

impl From<Tz> for ViewZone {
    fn from(tz: Tz) -> Self {
        ViewZone::Named(tz)
    }
}

impl fmt::Display for ViewZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewZone::Local => write!(f, "local"),
            ViewZone::Named(tz) => write!(f, "{}", tz.name()),
            ViewZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zone() {
        assert_eq!(ViewZone::parse("local").unwrap(), ViewZone::Local);
        assert_eq!(
            ViewZone::parse("Europe/Berlin").unwrap(),
            ViewZone::Named(chrono_tz::Europe::Berlin)
        );
        assert_eq!(
            ViewZone::parse("+02:00").unwrap(),
            ViewZone::Fixed(FixedOffset::east_opt(2 * 3600).unwrap())
        );
        assert!(matches!(ViewZone::parse("Mars/Olympus"), Err(GamifyError::Config(_))));
    }

    #[test]
    fn test_named_zone_resolves_each_instant() {
        let berlin = ViewZone::Named(chrono_tz::Europe::Berlin);
        let winter = DateTime::parse_from_rfc3339("2025-12-05T22:30:00Z").unwrap();
        let summer = DateTime::parse_from_rfc3339("2025-07-05T22:30:00Z").unwrap();

        assert_eq!(berlin.localize(&winter).to_string(), "2025-12-05 23:30:00");
        assert_eq!(berlin.localize(&summer).to_string(), "2025-07-06 00:30:00");
    }

    #[test]
    fn test_local_zone_matches_chrono_local_per_instant() {
        for stamp in ["2025-01-15T23:30:00Z", "2025-07-15T23:30:00Z"] {
            let dt = DateTime::parse_from_rfc3339(stamp).unwrap();
            assert_eq!(
                ViewZone::Local.localize(&dt),
                dt.with_timezone(&Local).naive_local()
            );
        }
    }
}
