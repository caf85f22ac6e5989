//! Great-circle distance and walking-time derivation.

use geo::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Assumed pedestrian speed used when deriving edge walking times.
pub const WALKING_SPEED_MPS: f64 = 1.4;

/// Haversine great-circle distance between two points, in meters.
///
/// Points are (lng, lat) in degrees, following the `geo` x/y convention.
/// NaN coordinates propagate to a NaN distance.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lng = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Walking time in seconds for a distance in meters at [`WALKING_SPEED_MPS`].
pub fn walking_time(distance_m: f64) -> f64 {
    distance_m / WALKING_SPEED_MPS
}
