//! Great-circle distance between two coordinates.

use crate::location::Coordinate;

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two points in kilometers.
///
/// The intermediate `a` term is clamped to `[0, 1]`. Rounding can push
/// it marginally above 1 for antipodal points, which would otherwise
/// turn `sqrt(1 - a)` into NaN.
///
/// # Arguments
/// * `from` - The first point.
/// * `to` - The second point.
///
/// # Returns
/// A non-negative distance. Symmetric in its arguments and zero when
/// both points are equal.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
