//! User configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::{GamifyError, GamifyResult};
use crate::zone::ViewZone;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "GAMIFY_CONFIG";

/// The date the dashboard opens on when nothing else is configured.
pub const SAMPLE_DATE: &str = "2025-10-05";

/// Which day is selected when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InitialSelection {
    /// Track the wall-clock date
    Today,
    /// Start with nothing selected
    None,
    /// Always start on this date
    Fixed(NaiveDate),
}

impl InitialSelection {
    pub fn parse(s: &str) -> GamifyResult<Self> {
        match s.trim() {
            "today" => Ok(InitialSelection::Today),
            "none" => Ok(InitialSelection::None),
            other => parse_date(other).map(InitialSelection::Fixed).map_err(|_| {
                GamifyError::Config(format!(
                    "initial_selection must be \"today\", \"none\" or YYYY-MM-DD, got '{other}'"
                ))
            }),
        }
    }

    /// The selected date for a session starting on `today`.
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            InitialSelection::Today => Some(today),
            InitialSelection::None => None,
            InitialSelection::Fixed(date) => Some(*date),
        }
    }
}

impl Default for InitialSelection {
    fn default() -> Self {
        parse_date(SAMPLE_DATE)
            .map(InitialSelection::Fixed)
            .unwrap_or(InitialSelection::Today)
    }
}

impl fmt::Display for InitialSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialSelection::Today => write!(f, "today"),
            InitialSelection::None => write!(f, "none"),
            InitialSelection::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl TryFrom<String> for InitialSelection {
    type Error = GamifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        InitialSelection::parse(&value)
    }
}

impl From<InitialSelection> for String {
    fn from(selection: InitialSelection) -> Self {
        selection.to_string()
    }
}

/// Configuration at ~/.config/gamify/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct GamifyConfig {
    #[serde(default)]
    pub initial_selection: InitialSelection,

    /// JSON file with events to show on the calendar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Zone for placing timestamped events on days: "local", an IANA name or
    /// an offset like "+02:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl GamifyConfig {
    pub fn config_path() -> GamifyResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| GamifyError::Config("Could not determine config directory".into()))?
            .join("gamify");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> GamifyResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> GamifyResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    pub fn parse(content: &str) -> GamifyResult<Self> {
        toml::from_str(content).map_err(|e| GamifyError::Config(e.to_string()))
    }

    /// `events_file` with a leading `~` expanded to the home directory.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand_path)
    }

    /// The configured zone, or the local zone when unset.
    pub fn zone(&self) -> GamifyResult<ViewZone> {
        self.timezone
            .as_deref()
            .map(ViewZone::parse)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GamifyResult<()> {
        let contents = format!(
            "\
# gamify configuration

# Day selected when the calendar opens: \"today\", \"none\" or a YYYY-MM-DD date
# initial_selection = \"{}\"

# JSON file with events to show on the calendar
# events_file = \"~/events.json\"

# Zone for timestamped events: \"local\", an IANA name or an offset like \"+02:00\"
# timezone = \"local\"
",
            SAMPLE_DATE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GamifyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GamifyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Expand a leading `~` in a configured path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_fixed_sample_date() {
        let config = GamifyConfig::default();
        assert_eq!(
            config.initial_selection,
            InitialSelection::Fixed(NaiveDate::from_ymd_opt(2025, 10, 5).unwrap())
        );
        assert_eq!(config.events_file, None);
    }

    #[test]
    fn test_parse_config() {
        let config = GamifyConfig::parse(
            r#"
initial_selection = "today"
events_file = "/tmp/events.json"
"#,
        )
        .unwrap();
        assert_eq!(config.initial_selection, InitialSelection::Today);
        assert_eq!(config.events_file, Some(PathBuf::from("/tmp/events.json")));

        let config = GamifyConfig::parse(r#"initial_selection = "2026-01-31""#).unwrap();
        assert_eq!(
            config.initial_selection,
            InitialSelection::Fixed(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())
        );

        let config = GamifyConfig::parse("").unwrap();
        assert_eq!(config, GamifyConfig::default());
    }

    #[test]
    fn test_parse_config_rejects_bad_selection() {
        let err = GamifyConfig::parse(r#"initial_selection = "tomorrow""#).unwrap_err();
        assert!(matches!(err, GamifyError::Config(_)));

        assert!(InitialSelection::parse("2025-02-30").is_err());
    }

    #[test]
    fn test_initial_selection_resolve() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(InitialSelection::Today.resolve(today), Some(today));
        assert_eq!(InitialSelection::None.resolve(today), None);
    }

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(GamifyConfig::load_from(&path).unwrap(), GamifyConfig::default());

        GamifyConfig::create_default_config(&path).unwrap();
        assert!(path.exists());
        assert_eq!(GamifyConfig::load_from(&path).unwrap(), GamifyConfig::default());
    }

    #[test]
    fn test_config_serializes_selection_as_string() {
        let config = GamifyConfig {
            initial_selection: InitialSelection::None,
            ..GamifyConfig::default()
        };
        let content = toml::to_string(&config).unwrap();
        assert_eq!(content.trim(), r#"initial_selection = "none""#);
    }

    #[test]
    fn test_events_file_expands_home() {
        let config = GamifyConfig::parse(r#"events_file = "~/events.json""#).unwrap();
        let path = config.events_path().unwrap();

        assert!(!path.starts_with("~"));
        assert!(path.ends_with("events.json"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("events.json"));
        }

        let config = GamifyConfig::parse(r#"events_file = "/srv/events.json""#).unwrap();
        assert_eq!(config.events_path(), Some(PathBuf::from("/srv/events.json")));
    }

    #[test]
    fn test_timezone_setting() {
        assert_eq!(GamifyConfig::default().zone().unwrap(), ViewZone::Local);

        let config = GamifyConfig::parse(r#"timezone = "Europe/Berlin""#).unwrap();
        assert_eq!(config.zone().unwrap(), ViewZone::Named(chrono_tz::Europe::Berlin));

        let config = GamifyConfig::parse(r#"timezone = "Nowhere/Special""#).unwrap();
        assert!(matches!(config.zone(), Err(GamifyError::Config(_))));
    }
}
