//! Proximity queries over anything that has a [`Coordinate`].

use ordered_float::OrderedFloat;

use crate::haversine;
use crate::location::{AsCoordinate, Coordinate};

/// Finds the item closest to `point`.
///
/// The items are scanned left to right and the current best is only
/// replaced by a strictly shorter distance, so ties go to the item that
/// comes first.
///
/// # Returns
/// [`None`] if `items` is empty.
///
/// # Time Complexity
/// *O*(*n*).
pub fn nearest<'a, T: AsCoordinate>(point: &Coordinate, items: &'a [T]) -> Option<&'a T> {
    let (first, rest) = items.split_first()?;
    let mut best = first;
    let mut best_distance = haversine::distance(point, first.as_coordinate());
    debug!("(nearest) initial distance: {}", best_distance);
    for item in rest {
        let distance = haversine::distance(point, item.as_coordinate());
        if distance < best_distance {
            debug!("(nearest) closer item at {}: {}", item.as_coordinate(), distance);
            best_distance = distance;
            best = item;
        }
    }
    Some(best)
}

/// Orders items by ascending distance from `point`.
///
/// The sort is stable and `items` is left untouched; the returned
/// vector borrows from it.
///
/// # Time Complexity
/// *O*(*n* log *n*), with one distance computation per item.
pub fn sort_by_distance<'a, T: AsCoordinate>(point: &Coordinate, items: &'a [T]) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| OrderedFloat(haversine::distance(point, item.as_coordinate())));
    sorted
}
