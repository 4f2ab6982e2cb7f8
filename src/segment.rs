// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::GeoPoint;

/// Non-empty run of consecutive points which doesn't jump over the antimeridian.
pub type PathSegment = Vec<GeoPoint>;

/// Path split into [PathSegments](PathSegment), as returned by [segment_at_antimeridian].
pub type SegmentedPath = Vec<PathSegment>;

/// Longitude difference between consecutive points above which
/// the path is assumed to cross the antimeridian.
const CROSSING_THRESHOLD: f64 = 180.0;

/// Splits a path into segments which can be drawn as separate lines on a map
/// where the ±180° meridian is a discontinuity.
///
/// A segment is closed after a point whenever the absolute difference between
/// its longitude and the longitude of the next point exceeds 180°. Concatenating
/// the returned segments gives back `path`: no points are dropped, duplicated or
/// reordered. An empty `path` results in no segments.
///
/// This is a heuristic, not an exact crossing test. It assumes that consecutive
/// points are close together, as they are in a [compute_arc](crate::compute_arc)
/// result with a sufficiently large `sample_count` (like
/// [DEFAULT_SAMPLE_COUNT](crate::DEFAULT_SAMPLE_COUNT)). With very sparse samples
/// a real crossing might produce a jump smaller than 180°, and a legitimate
/// long hop might produce a larger one.
pub fn segment_at_antimeridian(path: &[GeoPoint]) -> SegmentedPath {
    let mut segments = SegmentedPath::default();
    let mut current = PathSegment::default();

    for (i, &point) in path.iter().enumerate() {
        current.push(point);

        if let Some(next) = path.get(i + 1) {
            if (point.lon - next.lon).abs() > CROSSING_THRESHOLD {
                segments.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    if segments.len() > 1 {
        log::debug!("path split into {} segments at the antimeridian", segments.len());
    }

    segments
}
