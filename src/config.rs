//! Finder configuration.

use std::env::{self, VarError};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Environment variable naming the reference timezone.
pub const TIMEZONE_ENV_VAR: &str = "STUDY_SPACES_TZ";

/// Timezone the campus venues operate in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

/// Settings shared by every query against the finder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Zone used to interpret "now" against opening hours.
    #[serde(default = "default_timezone")]
    pub reference_timezone: Tz,
}

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            reference_timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl FinderConfig {
    /// Builds a config for the named IANA timezone, e.g. "Europe/London".
    pub fn with_timezone_name(name: &str) -> Result<Self, FinderError> {
        let reference_timezone = name.parse::<Tz>().map_err(|_| FinderError::InvalidTimezone {
            name: name.to_string(),
        })?;
        Ok(FinderConfig { reference_timezone })
    }

    /// Reads the reference timezone from [`TIMEZONE_ENV_VAR`].
    ///
    /// Falls back to [`DEFAULT_TIMEZONE`] when the variable is unset. A
    /// value that is not valid unicode is an invalid timezone.
    pub fn from_env() -> Result<Self, FinderError> {
        Self::from_var(env::var(TIMEZONE_ENV_VAR))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, FinderError> {
        match var {
            Ok(name) => {
                let config = Self::with_timezone_name(name.trim())?;
                info!("Using reference timezone {}", config.reference_timezone);
                Ok(config)
            }
            Err(VarError::NotPresent) => {
                debug!(
                    "{} not set, using {}",
                    TIMEZONE_ENV_VAR, DEFAULT_TIMEZONE
                );
                Ok(Self::default())
            }
            Err(VarError::NotUnicode(raw)) => {
                error!("{} is not valid unicode", TIMEZONE_ENV_VAR);
                Err(FinderError::InvalidTimezone {
                    name: raw.to_string_lossy().into_owned(),
                })
            }
        }
    }
}
