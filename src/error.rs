//! Error types for the study space finder.
//!
//! Errors only ever surface at the validation boundary (parsing records,
//! building coordinates, configuring the finder). The opening-hours and
//! distance computations themselves never fail.

use thiserror::Error;

/// Errors that can occur while loading or querying study spaces.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinderError {
    /// Longitude or latitude outside its degree range, or not finite.
    #[error("Invalid coordinate: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    /// A time of day that is not a valid "HH:MM" 24-hour string.
    #[error("Invalid time of day: {value:?}")]
    InvalidTime { value: String },

    /// Location records could not be parsed.
    #[error("Invalid location data: {message}")]
    InvalidData { message: String },

    /// Two records share the same id.
    #[error("Duplicate study space id: {id}")]
    DuplicateId { id: String },

    /// A search or generation radius that is negative or not finite.
    #[error("Invalid radius: {radius_km} km")]
    InvalidRadius { radius_km: f64 },

    /// The reference timezone name is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone { name: String },

    /// The finder state was queried before being initialized.
    #[error("Finder not initialized. Try to load some study spaces first.")]
    NotInitialized,

    /// The finder state can only be initialized once.
    #[error("Finder already initialized")]
    AlreadyInitialized,

    /// No study space with the given id.
    #[error("Study space not found by id: {id}")]
    SpaceNotFound { id: String },
}

impl From<serde_json::Error> for FinderError {
    fn from(err: serde_json::Error) -> Self {
        FinderError::InvalidData {
            message: err.to_string(),
        }
    }
}
