//! OSRM HTTP adapter for road-following routes.

use serde::Deserialize;
use tracing::debug;

use crate::traits::{RouteSource, RouteSummary};
use crate::types::Point;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteSource for OsrmClient {
    fn route(&self, waypoints: &[Point]) -> Option<RouteSummary> {
        if waypoints.len() < 2 {
            return None;
        }

        let coords = waypoints
            .iter()
            .map(|p| format!("{:.6},{:.6}", p.lng, p.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, coords
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>());

        match response {
            Ok(body) => summary_from_response(body),
            Err(err) => {
                debug!(err = ?err, "osrm: route request failed");
                None
            }
        }
    }
}

fn summary_from_response(body: OsrmRouteResponse) -> Option<RouteSummary> {
    let route = body.routes.unwrap_or_default().into_iter().next()?;
    Some(RouteSummary {
        distance_km: route.distance / 1000.0,
        duration_minutes: route.duration / 60.0,
        geometry: route
            .geometry
            .map(|geometry| {
                geometry
                    .coordinates
                    .into_iter()
                    .map(|[lng, lat]| Point::new(lat, lng))
                    .collect()
            })
            .unwrap_or_default(),
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    routes: Option<Vec<OsrmRoute>>,
}

/// Distance arrives in meters and duration in seconds.
#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: Option<OsrmGeometry>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
