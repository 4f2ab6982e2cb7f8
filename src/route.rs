// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::airport::{Airport, CoordinateSource};
use crate::{
    compute_arc, earth_distance, segment_at_antimeridian, ArcPath, ArcRequest, Bounds,
    SegmentedPath,
};

/// Everything needed to draw a flight on a map.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRoute {
    pub from: Airport,
    pub to: Airport,

    /// Great-circle arc from `from` to `to`.
    pub path: ArcPath,

    /// `path` split at the antimeridian, one line to draw per segment.
    pub segments: SegmentedPath,

    /// Bounds of both airports, for framing the map view.
    pub bounds: Bounds,

    /// Great-circle distance between the airports, in kilometers.
    pub distance_km: f64,
}

/// Resolves both airport codes with the provided [CoordinateSource]
/// and prepares a [FlightRoute] between them.
///
/// The codes are looked up one after another, `from_code` first.
/// Returns `Ok(None)` if either airport is unknown - there is nothing to draw
/// in that case. Errors of the source are passed through.
pub fn plan_route<S: CoordinateSource>(
    source: &mut S,
    from_code: &str,
    to_code: &str,
    sample_count: usize,
) -> Result<Option<FlightRoute>, S::Error> {
    let Some(from) = source.lookup(from_code)? else {
        log::warn!("unknown airport: {from_code}");
        return Ok(None);
    };

    let Some(to) = source.lookup(to_code)? else {
        log::warn!("unknown airport: {to_code}");
        return Ok(None);
    };

    let path = compute_arc(&ArcRequest {
        start: from.position,
        end: to.position,
        sample_count,
    });
    let segments = segment_at_antimeridian(&path);
    let mut bounds = Bounds::around(from.position);
    bounds.extend(to.position);
    let distance_km = earth_distance(from.position, to.position);

    log::debug!(
        "route {} -> {}: {:.0} km, {} segment(s)",
        from.code,
        to.code,
        distance_km,
        segments.len()
    );

    Ok(Some(FlightRoute {
        from,
        to,
        path,
        segments,
        bounds,
        distance_km,
    }))
}
