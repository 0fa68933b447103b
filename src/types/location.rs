//! Struct definitions and implementations for [`Coordinate`].
//!
//! A coordinate is the only geographic input the finder understands.
//! Anything that sits somewhere on the map can take part in proximity
//! queries by implementing [`AsCoordinate`].

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Since Rust doesn't allow for inheritance, we use a `trait` to allow
/// passing "positioned" objects to the distance functions.
pub trait AsCoordinate {
    /// Returns the position of the object.
    fn as_coordinate(&self) -> &Coordinate;
}

/// A [`Coordinate`] is an immutable (longitude, latitude) pair in
/// degrees.
///
/// Values are kept as double precision floats. Wrapping them in
/// [`OrderedFloat`] lets a coordinate be used as a map key.
///
/// On the wire a coordinate is a `[longitude, latitude]` array, which
/// is the order map libraries expect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    longitude: OrderedFloat<f64>,
    latitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate after checking both components.
    ///
    /// # Arguments
    /// * `longitude` - Degrees in `[-180, 180]`.
    /// * `latitude` - Degrees in `[-90, 90]`.
    ///
    /// # Returns
    /// [`FinderError::InvalidCoordinate`] if either value is out of range
    /// or not finite.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, FinderError> {
        let in_range = longitude.is_finite()
            && latitude.is_finite()
            && (-180.0..=180.0).contains(&longitude)
            && (-90.0..=90.0).contains(&latitude);
        if !in_range {
            return Err(FinderError::InvalidCoordinate {
                longitude,
                latitude,
            });
        }
        Ok(Coordinate {
            longitude: OrderedFloat(longitude),
            latitude: OrderedFloat(latitude),
        })
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }
}

impl AsCoordinate for Coordinate {
    fn as_coordinate(&self) -> &Coordinate {
        self
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = FinderError;

    fn try_from([longitude, latitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.longitude(), coordinate.latitude()]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude(), self.latitude())
    }
}
