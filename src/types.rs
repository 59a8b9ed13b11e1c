//! Core value types exchanged with the surrounding application.
//!
//! The map, list, and geolocation collaborators all speak these shapes;
//! everything else in the crate consumes and produces them unchanged.

use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether another point lies within `tolerance_deg` of this one,
    /// measured as Euclidean distance on the raw degree deltas.
    ///
    /// Endpoint matching and ring closing both use this check rather than
    /// great-circle distance; at the tolerances involved (1e-4 degrees,
    /// roughly 11 m) the difference is immaterial.
    pub fn close_to(&self, other: &Point, tolerance_deg: f64) -> bool {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt() <= tolerance_deg
    }
}

/// One contiguous piece of a larger boundary, as supplied by the external
/// geodata source.
///
/// Points are ordered; the first and last are the segment's endpoints.
/// Segments are immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaySegment {
    pub id: String,
    pub points: Vec<Point>,
}

impl WaySegment {
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Both endpoints, or None for a segment with no points.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((*self.points.first()?, *self.points.last()?))
    }
}

/// Operational status of an evacuation center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterStatus {
    Open,
    Full,
    Closed,
}

/// An evacuation center record from the directory backend.
///
/// Read-only to this crate: ranking annotates a copy, it never mutates
/// the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationCenter {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub capacity: u32,
    pub current_occupancy: u32,
    pub status: CenterStatus,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
}

impl EvacuationCenter {
    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

/// An evacuation center annotated with its computed distance and travel
/// time from a user origin. Produced fresh on every ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCenter {
    pub center: EvacuationCenter,
    pub distance_km: f64,
    pub duration_minutes: f64,
}
