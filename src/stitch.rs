//! Way-segment stitching.
//!
//! The boundary source returns a relation's member ways in arbitrary order
//! and orientation. This module chains them back into continuous paths by
//! matching endpoints within a small tolerance; the longest resulting path
//! is what callers treat as the authoritative boundary.

use tracing::{debug, warn};

use crate::types::{Point, WaySegment};

/// Endpoint match tolerance in decimal degrees (~11 m on the ground).
pub const ENDPOINT_TOLERANCE_DEG: f64 = 1e-4;

/// A continuous path assembled from one or more way segments.
///
/// Tracks which segment ids it consumed; a segment id never appears twice
/// in one path, and never in two paths of the same stitching run.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedPath {
    points: Vec<Point>,
    segment_ids: Vec<String>,
}

impl StitchedPath {
    fn from_segment(segment: &WaySegment) -> Self {
        Self {
            points: segment.points.clone(),
            segment_ids: vec![segment.id.clone()],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn segment_ids(&self) -> &[String] {
        &self.segment_ids
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Segment start touches path end: append in segment order, dropping
    /// the duplicated joint point.
    fn append_forward(&mut self, segment: &WaySegment) {
        self.points.extend(segment.points.iter().skip(1).copied());
        self.segment_ids.push(segment.id.clone());
    }

    /// Segment end touches path end: append in reverse order, dropping
    /// the duplicated joint point.
    fn append_reversed(&mut self, segment: &WaySegment) {
        self.points.extend(segment.points.iter().rev().skip(1).copied());
        self.segment_ids.push(segment.id.clone());
    }

    /// Segment end touches path start: the segment goes in front, its last
    /// point dropped in favor of the path's first.
    fn prepend_forward(&mut self, segment: &WaySegment) {
        let mut points = segment.points.clone();
        points.pop();
        points.extend(std::mem::take(&mut self.points));
        self.points = points;
        self.segment_ids.push(segment.id.clone());
    }

    /// Segment start touches path start: the segment goes in front
    /// reversed, the joint point dropped.
    fn prepend_reversed(&mut self, segment: &WaySegment) {
        let mut points: Vec<Point> = segment.points.iter().rev().copied().collect();
        points.pop();
        points.extend(std::mem::take(&mut self.points));
        self.points = points;
        self.segment_ids.push(segment.id.clone());
    }
}

/// Chains segments sharing endpoints into continuous paths.
///
/// Returns every path built, connected or not; a segment that matches
/// nothing becomes its own single-segment path, and an empty input yields
/// an empty list. Seeding always starts from the lowest-index unused
/// segment so the output is reproducible for a given input order.
pub fn stitch(segments: &[WaySegment]) -> Vec<StitchedPath> {
    let workable: Vec<&WaySegment> = segments
        .iter()
        .filter(|segment| !segment.points.is_empty())
        .collect();

    if workable.is_empty() {
        return Vec::new();
    }
    if workable.len() == 1 {
        return vec![StitchedPath::from_segment(workable[0])];
    }

    // Hard stop per path so malformed input cannot spin the scan forever.
    let extension_cap = workable.len() * 2;

    let mut used = vec![false; workable.len()];
    let mut paths: Vec<StitchedPath> = Vec::new();

    for seed in 0..workable.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut path = StitchedPath::from_segment(workable[seed]);

        let mut extensions = 0;
        while extensions < extension_cap {
            if !extend_once(&mut path, &workable, &mut used) {
                break;
            }
            extensions += 1;
        }
        if extensions >= extension_cap {
            warn!(
                segments = workable.len(),
                path_points = path.len(),
                "stitch: extension cap reached, leaving path as built"
            );
        }

        paths.push(path);
    }

    debug!(
        segments = workable.len(),
        paths = paths.len(),
        longest = paths.iter().map(StitchedPath::len).max().unwrap_or(0),
        "stitch: complete"
    );

    paths
}

/// Connects at most one unused segment onto either end of the path.
/// Returns false when nothing within tolerance remains.
fn extend_once(path: &mut StitchedPath, segments: &[&WaySegment], used: &mut [bool]) -> bool {
    let (Some(path_first), Some(path_last)) = (path.first(), path.last()) else {
        return false;
    };

    for (idx, segment) in segments.iter().enumerate() {
        if used[idx] {
            continue;
        }
        let Some((seg_first, seg_last)) = segment.endpoints() else {
            used[idx] = true;
            continue;
        };

        if seg_first.close_to(&path_last, ENDPOINT_TOLERANCE_DEG) {
            path.append_forward(segment);
        } else if seg_last.close_to(&path_last, ENDPOINT_TOLERANCE_DEG) {
            path.append_reversed(segment);
        } else if seg_last.close_to(&path_first, ENDPOINT_TOLERANCE_DEG) {
            path.prepend_forward(segment);
        } else if seg_first.close_to(&path_first, ENDPOINT_TOLERANCE_DEG) {
            path.prepend_reversed(segment);
        } else {
            continue;
        }

        used[idx] = true;
        return true;
    }

    false
}

/// Picks the path with the most points as the authoritative boundary.
/// Ties keep the earliest-built path.
pub fn select_longest(paths: Vec<StitchedPath>) -> Option<StitchedPath> {
    let mut best: Option<StitchedPath> = None;
    for path in paths {
        let longer = match &best {
            None => true,
            Some(current) => path.len() > current.len(),
        };
        if longer {
            best = Some(path);
        }
    }
    best
}
