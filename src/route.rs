//! Straight-line route estimation.
//!
//! When no routing engine is reachable, travel cost falls back to
//! great-circle distance and a tiered average-speed model: short hops move
//! at barangay-street speeds, longer trips on faster roads, with a winding
//! factor that grows with distance.

use crate::haversine;
use crate::types::Point;

/// Road factor and average speed applied to one distance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTier {
    /// Multiplier turning straight-line distance into assumed road distance.
    pub road_factor: f64,
    /// Assumed average travel speed in km/h.
    pub speed_kmh: f64,
}

/// Distance-banded travel assumptions for duration estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModel {
    /// Applied below `short_limit_km`.
    pub short: SpeedTier,
    /// Applied from `short_limit_km` up to and including `medium_limit_km`.
    pub medium: SpeedTier,
    /// Applied above `medium_limit_km`.
    pub long: SpeedTier,
    pub short_limit_km: f64,
    pub medium_limit_km: f64,
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            short: SpeedTier {
                road_factor: 1.2,
                speed_kmh: 25.0, // city streets
            },
            medium: SpeedTier {
                road_factor: 1.4,
                speed_kmh: 35.0,
            },
            long: SpeedTier {
                road_factor: 1.6,
                speed_kmh: 45.0, // provincial highway
            },
            short_limit_km: 5.0,
            medium_limit_km: 15.0,
        }
    }
}

impl SpeedModel {
    pub fn tier_for(&self, distance_km: f64) -> SpeedTier {
        if distance_km < self.short_limit_km {
            self.short
        } else if distance_km <= self.medium_limit_km {
            self.medium
        } else {
            self.long
        }
    }
}

/// Estimated travel cost for an ordered list of waypoints.
///
/// `distance_km` is the raw great-circle sum; the road factor only feeds
/// the duration figure.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RouteError {
    /// A route needs at least two waypoints; carries the count received.
    TooFewPoints(usize),
}

/// Estimates distance and duration along the waypoints in order.
pub fn approximate(points: &[Point], model: &SpeedModel) -> Result<RouteEstimate, RouteError> {
    if points.len() < 2 {
        return Err(RouteError::TooFewPoints(points.len()));
    }

    let distance_km: f64 = points
        .windows(2)
        .map(|pair| haversine::distance_km(pair[0], pair[1]))
        .sum();

    let tier = model.tier_for(distance_km);
    let duration_minutes = distance_km * tier.road_factor / tier.speed_kmh * 60.0;

    Ok(RouteEstimate {
        distance_km,
        duration_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Degrees of latitude spanning the given distance along a meridian.
    fn lat_degrees_for_km(km: f64) -> f64 {
        km / (haversine::EARTH_RADIUS_KM * std::f64::consts::PI / 180.0)
    }

    fn points_km_apart(km: f64) -> [Point; 2] {
        [
            Point::new(13.0, 123.0),
            Point::new(13.0 + lat_degrees_for_km(km), 123.0),
        ]
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            approximate(&[], &SpeedModel::default()),
            Err(RouteError::TooFewPoints(0))
        );
        assert_eq!(
            approximate(&[Point::new(13.0, 123.0)], &SpeedModel::default()),
            Err(RouteError::TooFewPoints(1))
        );
    }

    #[test]
    fn test_identical_points_cost_nothing() {
        let p = Point::new(13.1391, 123.7438);
        let estimate = approximate(&[p, p], &SpeedModel::default()).unwrap();
        assert!(estimate.distance_km.abs() < 1e-9);
        assert!(estimate.duration_minutes.abs() < 1e-9);
    }

    #[test]
    fn test_short_trip_duration() {
        // 2 km at factor 1.2 and 25 km/h is 5.76 minutes.
        let estimate = approximate(&points_km_apart(2.0), &SpeedModel::default()).unwrap();
        assert!((estimate.distance_km - 2.0).abs() < 1e-6);
        assert!((estimate.duration_minutes - 5.76).abs() < 1e-4);
    }

    #[test]
    fn test_medium_trip_duration() {
        // 10 km at factor 1.4 and 35 km/h is 24 minutes.
        let estimate = approximate(&points_km_apart(10.0), &SpeedModel::default()).unwrap();
        assert!((estimate.duration_minutes - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_long_trip_duration() {
        // 30 km at factor 1.6 and 45 km/h is 64 minutes.
        let estimate = approximate(&points_km_apart(30.0), &SpeedModel::default()).unwrap();
        assert!((estimate.duration_minutes - 64.0).abs() < 1e-4);
    }

    #[test]
    fn test_duration_grows_with_distance() {
        let near = approximate(&points_km_apart(3.0), &SpeedModel::default()).unwrap();
        let far = approximate(&points_km_apart(30.0), &SpeedModel::default()).unwrap();
        assert!(far.duration_minutes > near.duration_minutes);
    }

    #[test]
    fn test_tier_edges() {
        let model = SpeedModel::default();
        assert_eq!(model.tier_for(4.99), model.short);
        assert_eq!(model.tier_for(5.0), model.medium);
        assert_eq!(model.tier_for(15.0), model.medium);
        assert_eq!(model.tier_for(15.01), model.long);
    }

    #[test]
    fn test_multi_leg_distance_sums() {
        let step = lat_degrees_for_km(4.0);
        let points = [
            Point::new(13.0, 123.0),
            Point::new(13.0 + step, 123.0),
            Point::new(13.0 + 2.0 * step, 123.0),
        ];
        let estimate = approximate(&points, &SpeedModel::default()).unwrap();
        assert!((estimate.distance_km - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_model() {
        let model = SpeedModel {
            short: SpeedTier {
                road_factor: 1.0,
                speed_kmh: 60.0,
            },
            ..SpeedModel::default()
        };
        // 2 km at 60 km/h flat is exactly 2 minutes.
        let estimate = approximate(&points_km_apart(2.0), &model).unwrap();
        assert!((estimate.duration_minutes - 2.0).abs() < 1e-4);
    }
}
