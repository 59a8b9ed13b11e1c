//! Test fixtures for evac-routes.
//!
//! Provides realistic test data including:
//! - Real Legazpi City evacuation sites (schools, gyms, covered courts)
//! - A simplified city boundary split into way segments

pub mod legazpi_locations;

pub use legazpi_locations::*;
