//! Integration seams for the routing core.
//!
//! These are intentionally minimal. The crate ships OSRM and file-backed
//! implementations; tests and embedding apps substitute their own.

use std::io;

use crate::types::Point;

/// A routed result from an external routing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_minutes: f64,
    /// Road-following geometry, in visit order. May be empty when the
    /// engine returns no overview.
    pub geometry: Vec<Point>,
}

/// Produces routed results through an ordered list of waypoints.
///
/// Implementations return `None` on any failure; callers fall back to
/// straight-line estimates.
pub trait RouteSource {
    fn route(&self, waypoints: &[Point]) -> Option<RouteSummary>;
}

/// Durable key-value storage for serialized boundary rings.
///
/// Values are opaque JSON strings; the store neither parses nor
/// validates them.
pub trait BoundaryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn clear(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err)
    }
}
