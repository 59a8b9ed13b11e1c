//! Polyline representation for route geometries.
//!
//! This module provides a type for working with route shapes as decoded
//! coordinate sequences. Encoding/decoding happens at the boundary
//! (when receiving from OSRM or sending to the frontend).

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Encoding to/from compact polyline formats should happen at API
/// boundaries, not within the routing core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Picks the geometry to display for a route.
///
/// A non-empty road-following geometry from the routing engine wins,
/// kept verbatim. Otherwise the shape degrades to straight lines through
/// origin, intermediate waypoints, and destination, in that order.
pub fn build_geometry(
    origin: Point,
    waypoints: &[Point],
    destination: Point,
    external: Option<&[Point]>,
) -> Polyline {
    if let Some(geometry) = external {
        if !geometry.is_empty() {
            return Polyline::new(geometry.to_vec());
        }
    }

    let mut points = Vec::with_capacity(waypoints.len() + 2);
    points.push(origin);
    points.extend_from_slice(waypoints);
    points.push(destination);
    Polyline::new(points)
}
