// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::GeoPoint;

/// Mean radius of Earth, in kilometers.
/// Source: https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
const EARTH_RADIUS: f64 = 6371.0088;

/// Calculates the central angle between two positions, in radians,
/// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
///
/// The result is within \[0, π\].
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();

    let sin_dlat_half = ((lat1 - lat2) * 0.5).sin();
    let sin_dlon_half = ((lon1 - lon2) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Rounding might push h slightly above 1 for antipodal positions
    2.0 * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Calculates the great-circle distance between two positions on Earth.
/// Returns the result in kilometers.
pub fn earth_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    EARTH_RADIUS * central_angle(a, b)
}
