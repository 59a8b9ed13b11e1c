//! Nearest-center ranking.
//!
//! Orders candidate evacuation centers by estimated travel cost from a
//! user location. Estimates come from the straight-line approximator, so
//! ranking works even when the routing engine is down.

use tracing::debug;

use crate::route::{self, SpeedModel};
use crate::types::{EvacuationCenter, Point, RankedCenter};

/// Knobs for a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankOptions {
    /// Keep only centers at most this far away (straight-line km).
    pub max_radius_km: Option<f64>,
    /// Keep only the closest N centers after sorting.
    pub top_k: Option<usize>,
    /// Travel assumptions for the duration estimates.
    pub speed_model: SpeedModel,
}

/// Annotates each center with distance and duration from `from`, sorted
/// closest first. Centers the approximator cannot estimate are skipped.
/// Equal distances keep their input order.
pub fn rank(from: Point, centers: &[EvacuationCenter], options: &RankOptions) -> Vec<RankedCenter> {
    let mut ranked: Vec<RankedCenter> = centers
        .iter()
        .filter_map(|center| {
            let estimate =
                route::approximate(&[from, center.point()], &options.speed_model).ok()?;
            Some(RankedCenter {
                center: center.clone(),
                distance_km: estimate.distance_km,
                duration_minutes: estimate.duration_minutes,
            })
        })
        .filter(|entry| match options.max_radius_km {
            Some(limit) => entry.distance_km <= limit,
            None => true,
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    if let Some(top_k) = options.top_k {
        ranked.truncate(top_k);
    }

    debug!(
        candidates = centers.len(),
        ranked = ranked.len(),
        "rank: nearest centers"
    );
    ranked
}
