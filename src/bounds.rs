// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::GeoPoint;

/// Axis-aligned box over latitudes and longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Bounds {
    /// Minimum latitude and minimum longitude (bottom-left corner)
    pub min: GeoPoint,

    /// Maximum latitude and maximum longitude (top-right corner)
    pub max: GeoPoint,
}

impl Bounds {
    /// Creates degenerate bounds around a single point.
    pub fn around(p: GeoPoint) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the bounds to contain `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.min.lat = self.min.lat.min(p.lat);
        self.min.lon = self.min.lon.min(p.lon);
        self.max.lat = self.max.lat.max(p.lat);
        self.max.lon = self.max.lon.max(p.lon);
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min.lat..=self.max.lat).contains(&p.lat)
            && (self.min.lon..=self.max.lon).contains(&p.lon)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min.lat + self.max.lat) * 0.5,
            (self.min.lon + self.max.lon) * 0.5,
        )
    }
}

/// Computes the smallest [Bounds] containing all provided points,
/// or `None` if there are no points.
///
/// Longitudes are compared as plain numbers: bounds of points on both sides
/// of the antimeridian span (almost) the whole world, instead of the
/// narrow box across the ±180° meridian.
pub fn bounds_of<I: IntoIterator<Item = GeoPoint>>(points: I) -> Option<Bounds> {
    let mut points = points.into_iter();
    let mut bounds = Bounds::around(points.next()?);
    points.for_each(|p| bounds.extend(p));
    Some(bounds)
}
