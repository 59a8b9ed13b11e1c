//! Polygon closing.
//!
//! A stitched boundary path is only usable for display and lookup once it
//! forms a closed ring. Closing is forgiving: paths that cannot form a
//! valid ring yield `None` rather than an error, and the caller falls back
//! to whatever boundary it already has.

use serde::Serialize;
use tracing::debug;

use crate::types::Point;

/// Tolerance in decimal degrees for treating a path as already closed.
pub const CLOSE_TOLERANCE_DEG: f64 = 1e-4;

/// A ring whose first and last points coincide within tolerance and which
/// carries at least four points. Serializes as a bare point array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClosedRing {
    points: Vec<Point>,
}

impl ClosedRing {
    /// Validates an already-materialized point list, e.g. one read back
    /// from a cache. Returns `None` unless the list is a well-formed ring.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.len() < 4 {
            return None;
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if !first.close_to(&last, CLOSE_TOLERANCE_DEG) {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points including the closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Closes an open path into a ring.
///
/// Paths with fewer than three points cannot enclose area and yield
/// `None`. A path whose endpoints already coincide is returned as-is;
/// otherwise a copy of the first point is appended. A degenerate
/// already-closed triangle (three points, two distinct) also yields
/// `None` since it cannot satisfy the four-point minimum.
pub fn close(points: &[Point]) -> Option<ClosedRing> {
    if points.len() < 3 {
        debug!(points = points.len(), "ring: too few points to close");
        return None;
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut ring = points.to_vec();
    if !first.close_to(&last, CLOSE_TOLERANCE_DEG) {
        ring.push(first);
    }

    let closed = ClosedRing::from_points(ring);
    if closed.is_none() {
        debug!(points = points.len(), "ring: path degenerates, no ring produced");
    }
    closed
}
