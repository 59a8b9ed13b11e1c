//! Boundary assembly pipeline.
//!
//! Ties the pieces together: raw way segments are stitched into paths,
//! the longest path becomes the candidate boundary, and closing turns it
//! into a ring. `load_or_assemble` fronts the pipeline with the two-tier
//! cache so the expensive fetch happens rarely.

use tracing::{debug, info};

use crate::cache::BoundaryCache;
use crate::ring::{self, ClosedRing};
use crate::stitch;
use crate::traits::BoundaryStore;
use crate::types::WaySegment;

/// Builds a boundary ring from raw way segments.
///
/// Returns `None` when the segments cannot produce a valid ring; callers
/// keep whatever boundary they already display.
pub fn assemble(segments: &[WaySegment]) -> Option<ClosedRing> {
    let paths = stitch::stitch(segments);
    let longest = stitch::select_longest(paths)?;
    let ring = ring::close(longest.points())?;

    info!(
        segments = segments.len(),
        stitched = longest.segment_ids().len(),
        points = ring.len(),
        "boundary: assembled ring"
    );
    Some(ring)
}

/// Returns the cached ring, or fetches segments and assembles one.
///
/// `fetch` is only invoked on a full cache miss; it returns `None` when
/// the upstream source is unreachable, and that `None` propagates without
/// touching the cache.
pub fn load_or_assemble<S, F>(cache: &mut BoundaryCache<S>, fetch: F) -> Option<ClosedRing>
where
    S: BoundaryStore,
    F: FnOnce() -> Option<Vec<WaySegment>>,
{
    if let Some(ring) = cache.get() {
        debug!(key = %cache.key(), "boundary: cache hit");
        return Some(ring);
    }

    let segments = fetch()?;
    let ring = assemble(&segments)?;
    cache.put(ring.clone());
    Some(ring)
}
