//! Generates random study spaces around a centre point.
//!
//! Useful for exercising proximity queries on more than the handful of
//! catalog entries.

use chrono::Weekday;
use rand::Rng;

use crate::error::FinderError;
use crate::haversine::EARTH_RADIUS_KM;
use crate::location::Coordinate;
use crate::schedule::{DaySchedule, TimeOfDay, WeeklySchedule};
use crate::space::StudySpace;

/// Generates `capacity` coordinates within `radius_km` of `centre`.
///
/// Points are spread uniformly over the disc: the bearing is uniform
/// and the distance is `radius * sqrt(u)`.
///
/// # Returns
/// [`FinderError::InvalidRadius`] if `radius_km` is negative or not
/// finite.
pub fn generate_coordinates_near(
    centre: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Result<Vec<Coordinate>, FinderError> {
    if !(radius_km.is_finite() && radius_km >= 0.0) {
        error!("Invalid radius: {}", radius_km);
        return Err(FinderError::InvalidRadius { radius_km });
    }
    let mut rng = rand::thread_rng();
    (0..capacity)
        .map(|_| {
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance_km = radius_km * rng.gen::<f64>().sqrt();
            destination(centre, bearing, distance_km)
        })
        .collect()
}

/// Generates `capacity` study spaces within `radius_km` of `centre`.
///
/// Every space is open 08:00 to 20:00 on weekdays and closed at the
/// weekend.
pub fn generate_spaces_near(
    centre: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Result<Vec<StudySpace>, FinderError> {
    let weekday = DaySchedule::new(TimeOfDay::from_hm(8, 0)?, TimeOfDay::from_hm(20, 0)?);
    let opening_hours = WeeklySchedule::uniform(weekday)
        .with_day(Weekday::Sat, DaySchedule::closed())
        .with_day(Weekday::Sun, DaySchedule::closed());

    let mut rng = rand::thread_rng();
    let spaces = generate_coordinates_near(centre, radius_km, capacity)?
        .into_iter()
        .enumerate()
        .map(|(index, coordinate)| StudySpace {
            id: format!("generated_{index}"),
            name: format!("Study Space {index}"),
            image: String::new(),
            rating: (rng.gen_range(10..=50) as f64) / 10.0,
            nearest_station: String::new(),
            distance: 0.0,
            coordinate,
            opening_hours: opening_hours.clone(),
        })
        .collect();
    Ok(spaces)
}

/// Point reached from `start` after travelling `distance_km` along
/// `bearing` (radians, clockwise from north).
fn destination(
    start: &Coordinate,
    bearing: f64,
    distance_km: f64,
) -> Result<Coordinate, FinderError> {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat1 = start.latitude().to_radians();
    let lon1 = start.longitude().to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    let latitude = lat2.to_degrees().clamp(-90.0, 90.0);
    let longitude = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Coordinate::new(longitude, latitude)
}
