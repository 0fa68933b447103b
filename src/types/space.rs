//! Struct definitions and implementations for [`StudySpace`].
//!
//! A study space is the record the finder works on: where it is, when
//! it opens, and a handful of presentation fields the core carries
//! around without interpreting.

use serde::{Deserialize, Serialize};

use super::location::{AsCoordinate, Coordinate};
use crate::haversine;
use super::schedule::WeeklySchedule;

/// A place on campus where students can work.
///
/// Records are supplied whole by a data source and never mutated by
/// the finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySpace {
    /// Unique identifier of the space.
    pub id: String,

    /// Display name, matched by the search box.
    pub name: String,

    /// Image path or URL.
    pub image: String,

    /// Average user rating.
    pub rating: f64,

    /// Label of the closest public transport station.
    pub nearest_station: String,

    /// Static approximate distance in kilometers, shown when no user
    /// position is known.
    pub distance: f64,

    /// Position of the entrance.
    #[serde(rename = "coordinates")]
    pub coordinate: Coordinate,

    /// Weekly opening hours.
    pub opening_hours: WeeklySchedule,
}

impl StudySpace {
    /// Link to a map search centred on the space.
    pub fn maps_search_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.coordinate.latitude(),
            self.coordinate.longitude()
        )
    }

    /// Distance shown on the space's card.
    ///
    /// With a known user position this is the live great-circle distance
    /// to two decimals, otherwise the static approximate distance.
    pub fn distance_label(&self, user_location: Option<&Coordinate>) -> String {
        match user_location {
            Some(user) => format!(
                "{:.2} km away",
                haversine::distance(user, &self.coordinate)
            ),
            None => format!("{} km away", self.distance),
        }
    }
}

impl AsCoordinate for StudySpace {
    fn as_coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

#[cfg(test)]
mod space_tests {
    use super::*;
    use crate::schedule::DaySchedule;

    fn central_library() -> StudySpace {
        StudySpace {
            id: "7".to_string(),
            name: "Central Library".to_string(),
            image: "/images/central-library.png".to_string(),
            rating: 4.6,
            nearest_station: "St Peter's Square Station".to_string(),
            distance: 0.4,
            coordinate: Coordinate::new(-2.244521, 53.477839).unwrap(),
            opening_hours: WeeklySchedule::uniform(DaySchedule::closed()),
        }
    }

    #[test]
    fn test_maps_search_url_is_lat_lon() {
        assert_eq!(
            central_library().maps_search_url(),
            "https://www.google.com/maps/search/?api=1&query=53.477839,-2.244521"
        );
    }

    #[test]
    fn test_as_coordinate() {
        let space = central_library();
        assert_eq!(space.as_coordinate(), &space.coordinate);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(central_library()).unwrap();
        assert_eq!(value["nearestStation"], "St Peter's Square Station");
        assert_eq!(value["coordinates"][0], -2.244521);
        assert_eq!(value["openingHours"]["Sunday"]["open"], "00:00");
    }

    #[test]
    fn test_distance_label_static_fallback() {
        assert_eq!(central_library().distance_label(None), "0.4 km away");
    }

    #[test]
    fn test_distance_label_live() {
        let space = central_library();
        assert_eq!(
            space.distance_label(Some(&space.coordinate)),
            "0.00 km away"
        );
        // The Oxford Road library is about 0.75 km away.
        let user = Coordinate::new(-2.239082521145019, 53.47188923579268).unwrap();
        let label = space.distance_label(Some(&user));
        assert_eq!(
            label,
            format!("{:.2} km away", haversine::distance(&user, &space.coordinate))
        );
        assert!(label.starts_with("0."), "label was {label}");
    }
}
