//! evac-routes core
//!
//! Geospatial core for evacuation routing: boundary assembly from raw
//! way segments, cached city boundaries, straight-line route estimates,
//! and nearest-center ranking.

pub mod traits;
pub mod types;
pub mod haversine;
pub mod stitch;
pub mod ring;
pub mod boundary;
pub mod cache;
pub mod route;
pub mod rank;
pub mod polyline;
pub mod normalize;
pub mod osrm;
pub mod osrm_data;
