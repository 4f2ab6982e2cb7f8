// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Great-circle flight routes, ready to be drawn on flat maps.
//!
//! The core of the crate interpolates the shortest path between two positions
//! on a sphere ([compute_arc]) and splits the resulting polyline wherever it
//! jumps over the ±180° meridian ([segment_at_antimeridian]), so that a map
//! layer using an equirectangular-like projection can draw one line per segment.
//!
//! Around that core sit the pieces needed to plot an actual flight:
//! an [airport] table to resolve codes into positions, an explicit [cache]
//! and [throttle] for slow remote lookups, a [route planner](plan_route),
//! [viewport] fitting and [geojson] export.
//!
//! # Example
//!
//! ```
//! let tokyo = flightarc::GeoPoint::new(35.55, 139.78);
//! let los_angeles = flightarc::GeoPoint::new(33.94, -118.41);
//!
//! let path = flightarc::compute_arc(&flightarc::ArcRequest {
//!     start: tokyo,
//!     end: los_angeles,
//!     sample_count: flightarc::DEFAULT_SAMPLE_COUNT,
//! });
//! let segments = flightarc::segment_at_antimeridian(&path);
//!
//! assert_eq!(path.len(), 101);
//! assert_eq!(segments.len(), 2);
//! ```

pub mod airport;
mod arc;
mod bounds;
pub mod c;
pub mod cache;
mod distance;
pub mod geojson;
mod route;
mod segment;
pub mod throttle;
pub mod viewport;

pub use arc::{compute_arc, ArcError, ArcPath, ArcRequest, DEFAULT_SAMPLE_COUNT};
pub use bounds::{bounds_of, Bounds};
pub use distance::{central_angle, earth_distance};
pub use route::{plan_route, FlightRoute};
pub use segment::{segment_at_antimeridian, PathSegment, SegmentedPath};

/// Represents a position on Earth, in degrees.
///
/// `lat` must be within \[-90, 90\] and `lon` within \[-180, 180\].
/// The router trusts its inputs; use [GeoPoint::is_valid] or [ArcRequest::new]
/// to check positions coming from outside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const ZERO: Self = Self { lat: 0.0, lon: 0.0 };

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both coordinates are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Returns `(lat, lon)` converted to radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
