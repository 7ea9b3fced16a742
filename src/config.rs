//! File-based configuration.
//!
//! A TOML file with two optional tables; anything omitted takes its
//! default:
//!
//! ```toml
//! [timetabler]
//! lab_attempt_factor = 2
//! seed = 7
//!
//! [settings]
//! breaks = [{ after = 3, name = "Tea Break" }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::ScheduleConfiguration;
use crate::scheduler::{Timetabler, TimetablerOptions};

/// Generator options plus the grid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub timetabler: TimetablerOptions,
    pub settings: ScheduleConfiguration,
}

impl TimetableConfig {
    /// Loads configuration from `path`, or defaults if the file is missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            periods_per_day = config.settings.periods_per_day(),
            breaks = config.settings.breaks.len(),
            "Loaded timetable config"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Builds a generator with these options.
    pub fn timetabler(&self) -> Timetabler {
        Timetabler::new().with_options(self.timetabler.clone())
    }
}
