// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::GeoPoint;

/// Recommended number of interpolation steps for [compute_arc](crate::compute_arc).
/// Enough for the [antimeridian split](crate::segment_at_antimeridian) to be reliable
/// on any flight, and for the line to look smooth on a world map.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Describes a great-circle arc to interpolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,

    /// Number of interpolation steps along the arc. The produced path
    /// has `sample_count + 1` points, including both endpoints.
    ///
    /// Must be at least 1; [compute_arc](crate::compute_arc) treats 0 as 1.
    pub sample_count: usize,
}

impl ArcRequest {
    /// Creates a checked [ArcRequest], ensuring both positions are within
    /// valid coordinate ranges and that at least one step is requested.
    pub fn new(start: GeoPoint, end: GeoPoint, sample_count: usize) -> Result<Self, ArcError> {
        if !start.is_valid() {
            return Err(ArcError::InvalidPoint(start));
        }
        if !end.is_valid() {
            return Err(ArcError::InvalidPoint(end));
        }
        if sample_count == 0 {
            return Err(ArcError::ZeroSampleCount);
        }
        Ok(Self {
            start,
            end,
            sample_count,
        })
    }

    /// Creates an [ArcRequest] with [DEFAULT_SAMPLE_COUNT] steps, without any checks.
    pub fn between(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            start,
            end,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Error conditions which may occur when building an [ArcRequest] with [ArcRequest::new].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ArcError {
    /// Latitude or longitude is out of range, or not a finite number.
    #[error("invalid position: {0}")]
    InvalidPoint(GeoPoint),

    /// An arc needs at least one interpolation step.
    #[error("sample count must be at least 1")]
    ZeroSampleCount,
}
