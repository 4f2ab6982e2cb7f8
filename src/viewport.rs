// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Framing [Bounds] on a [Web Mercator](https://en.wikipedia.org/wiki/Web_Mercator_projection)
//! slippy map.

use std::f64::consts::PI;

use crate::{Bounds, GeoPoint};

/// Size of a map tile, in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitudes beyond this value are outside of the Web Mercator square.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Describes the map view which should be fitted to some [Bounds].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Width of the map view, in pixels.
    pub width: f64,

    /// Height of the map view, in pixels.
    pub height: f64,

    /// Minimal distance between the bounds and the edges of the view, in pixels.
    pub padding: f64,

    /// Zoom level ceiling, so that short flights don't end up zoomed in on a single runway.
    pub max_zoom: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 50.0,
            max_zoom: 10.0,
        }
    }
}

/// Center and (fractional) zoom level of a map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

/// Projects a longitude onto the \[0, 1\] Web Mercator x axis.
fn lon_to_x(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Projects a latitude onto the \[0, 1\] Web Mercator y axis (pointing south).
fn lat_to_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0
}

fn y_to_lat(y: f64) -> f64 {
    (PI - 2.0 * PI * y).sinh().atan().to_degrees()
}

/// Finds the highest zoom level (up to `options.max_zoom`) at which `bounds`
/// fit into the view with the requested padding, and the center of the view.
///
/// The bounds are taken as-is, see [bounds_of](crate::bounds_of) on antimeridian handling.
/// The returned zoom is never negative, even if the view is too small
/// to fit the bounds.
pub fn fit_viewport(bounds: &Bounds, options: &ViewportOptions) -> Viewport {
    let x0 = lon_to_x(bounds.min.lon);
    let x1 = lon_to_x(bounds.max.lon);
    let y0 = lat_to_y(bounds.max.lat);
    let y1 = lat_to_y(bounds.min.lat);

    let center = GeoPoint::new(y_to_lat((y0 + y1) * 0.5), (x0 + x1) * 0.5 * 360.0 - 180.0);

    let available_width = (options.width - 2.0 * options.padding).max(1.0);
    let available_height = (options.height - 2.0 * options.padding).max(1.0);

    let zoom_x = zoom_to_fit(x1 - x0, available_width);
    let zoom_y = zoom_to_fit(y1 - y0, available_height);
    let zoom = zoom_x.min(zoom_y).clamp(0.0, options.max_zoom.max(0.0));

    Viewport { center, zoom }
}

/// Returns the zoom level at which `span` (a fraction of the whole world)
/// takes exactly `pixels` pixels.
fn zoom_to_fit(span: f64, pixels: f64) -> f64 {
    if span > 0.0 {
        (pixels / (TILE_SIZE * span)).log2()
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-4),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn single_point_uses_max_zoom() {
        let p = GeoPoint::new(52.23, 21.01);
        let v = fit_viewport(&Bounds::around(p), &ViewportOptions::default());

        assert_eq!(v.zoom, 10.0);
        assert_almost_eq!(v.center.lat, p.lat);
        assert_almost_eq!(v.center.lon, p.lon);
    }

    #[test]
    fn symmetric_bounds_are_centered() {
        let bounds = Bounds {
            min: GeoPoint::new(-10.0, -20.0),
            max: GeoPoint::new(10.0, 20.0),
        };
        let v = fit_viewport(&bounds, &ViewportOptions::default());

        assert_almost_eq!(v.center.lat, 0.0);
        assert_almost_eq!(v.center.lon, 0.0);
    }

    #[test]
    fn wide_bounds() {
        let bounds = Bounds {
            min: GeoPoint::new(33.0, -117.0),
            max: GeoPoint::new(35.0, 135.0),
        };
        let v = fit_viewport(&bounds, &ViewportOptions::default());

        // 700 px of available width for 70% of the world
        assert_almost_eq!(v.zoom, (700.0_f64 / (256.0 * 0.7)).log2());
        assert_almost_eq!(v.center.lon, 9.0);
    }

    #[test]
    fn small_view_clamps_to_zero() {
        let bounds = Bounds {
            min: GeoPoint::new(-60.0, -170.0),
            max: GeoPoint::new(60.0, 170.0),
        };
        let options = ViewportOptions {
            width: 100.0,
            height: 100.0,
            padding: 60.0,
            ..Default::default()
        };

        assert_eq!(fit_viewport(&bounds, &options).zoom, 0.0);
    }

    #[test]
    fn mercator_round_trip() {
        for lat in [-80.0, -45.0, 0.0, 12.5, 60.0] {
            assert_almost_eq!(y_to_lat(lat_to_y(lat)), lat);
        }
        assert_almost_eq!(lat_to_y(0.0), 0.5);
        assert_almost_eq!(lat_to_y(90.0), 0.0);
    }
}
