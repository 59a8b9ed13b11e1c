//! Great-circle distance on a spherical Earth.
//!
//! Every distance in this crate comes through here; the route approximator
//! sums it per leg and the ranker sorts on it.

use crate::types::Point;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// Always non-negative and symmetric; effectively zero for identical
/// points. Coordinates outside the valid latitude/longitude ranges still
/// produce a mathematically defined result; validating input ranges is
/// the caller's responsibility.
pub fn distance_km(a: Point, b: Point) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}
