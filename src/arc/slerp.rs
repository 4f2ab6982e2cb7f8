// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::f64::consts::FRAC_PI_2;

use crate::{central_angle, ArcRequest, GeoPoint};

/// Below this value of `sin(d)` the interpolation weights can't be computed reliably.
/// Depending on `d`, the endpoints are then either considered equal or antipodal.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Ordered samples along a great-circle arc, as returned by [compute_arc].
pub type ArcPath = Vec<GeoPoint>;

/// Position on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    fn from_geo(p: GeoPoint) -> Self {
        let (lat, lon) = p.to_radians();
        Self {
            x: lat.cos() * lon.cos(),
            y: lat.cos() * lon.sin(),
            z: lat.sin(),
        }
    }

    fn to_geo(self) -> GeoPoint {
        let lat = self.z.atan2(self.x.hypot(self.y));
        let lon = self.y.atan2(self.x);
        GeoPoint::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Returns `a * u + b * v`.
    #[inline]
    fn weighted_sum(a: f64, u: Self, b: f64, v: Self) -> Self {
        Self {
            x: a * u.x + b * v.x,
            y: a * u.y + b * v.y,
            z: a * u.z + b * v.z,
        }
    }
}

/// Interpolates the shortest path between `request.start` and `request.end`
/// using [spherical linear interpolation](https://en.wikipedia.org/wiki/Slerp).
///
/// Returns `request.sample_count + 1` points, evenly spaced in angle along the
/// minor great-circle arc, with the first and last points equal to the
/// endpoints (up to floating-point rounding). Contrary to interpolating
/// latitudes and longitudes directly, the path correctly bends towards
/// the poles on long east-west flights.
///
/// If the endpoints coincide, all returned points are equal to `request.start`.
///
/// If the endpoints are antipodal, there are infinitely many shortest paths.
/// In that case the returned path leaves `request.start` along its meridian towards
/// the nearer pole (north for points on the equator), passes over that pole, and
/// arrives at `request.end`. Callers which care about the exact route between
/// antipodes should choose a waypoint and request two arcs instead.
///
/// A `sample_count` of 0 is treated as 1.
pub fn compute_arc(request: &ArcRequest) -> ArcPath {
    let steps = request.sample_count.max(1);
    let d = central_angle(request.start, request.end);
    let sin_d = d.sin();

    if sin_d < DEGENERATE_EPSILON {
        if d < FRAC_PI_2 {
            return vec![request.start; steps + 1];
        }

        log::debug!(
            "{} and {} are antipodal, routing over the pole",
            request.start,
            request.end
        );
        return antipodal_arc(request.start, request.end, steps, d);
    }

    let u = Vec3::from_geo(request.start);
    let v = Vec3::from_geo(request.end);

    (0..=steps)
        .map(|i| {
            let f = i as f64 / steps as f64;
            let a = ((1.0 - f) * d).sin() / sin_d;
            let b = (f * d).sin() / sin_d;
            Vec3::weighted_sum(a, u, b, v).to_geo()
        })
        .collect()
}

/// Walks `d` radians along the meridian of `start`, towards the nearer pole.
fn antipodal_arc(start: GeoPoint, end: GeoPoint, steps: usize, d: f64) -> ArcPath {
    let s = Vec3::from_geo(start);

    // Unit vector tangent to the sphere at `start`, pointing along its meridian
    let (lat, lon) = start.to_radians();
    let heading = if start.lat < 0.0 { -1.0 } else { 1.0 };
    let t = Vec3 {
        x: -heading * lat.sin() * lon.cos(),
        y: -heading * lat.sin() * lon.sin(),
        z: heading * lat.cos(),
    };

    let mut path: ArcPath = (0..=steps)
        .map(|i| {
            let angle = d * (i as f64 / steps as f64);
            Vec3::weighted_sum(angle.cos(), s, angle.sin(), t).to_geo()
        })
        .collect();

    path[0] = start;
    path[steps] = end;
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    macro_rules! assert_point_eq {
        ($a:expr, $b:expr) => {{
            let (a, b): (GeoPoint, GeoPoint) = ($a, $b);
            assert!(
                (a.lat - b.lat).abs() < EPS && (a.lon - b.lon).abs() < EPS,
                "assertion failed: {} ≈ {}",
                a,
                b
            )
        }};
    }

    fn arc(start: GeoPoint, end: GeoPoint, sample_count: usize) -> ArcPath {
        compute_arc(&ArcRequest {
            start,
            end,
            sample_count,
        })
    }

    fn sample_pairs() -> Vec<(GeoPoint, GeoPoint)> {
        vec![
            (GeoPoint::new(35.0, 135.0), GeoPoint::new(33.0, -117.0)),
            (GeoPoint::new(52.23, 21.01), GeoPoint::new(40.64, -73.78)),
            (GeoPoint::new(-33.95, 151.18), GeoPoint::new(51.47, -0.45)),
            (GeoPoint::new(0.0, -170.0), GeoPoint::new(0.0, 170.0)),
            (GeoPoint::new(-54.8, -68.3), GeoPoint::new(64.1, -21.9)),
            (GeoPoint::new(10.0, 10.0), GeoPoint::new(10.0001, 10.0001)),
        ]
    }

    #[test]
    fn endpoints_are_preserved() {
        for (start, end) in sample_pairs() {
            let path = arc(start, end, 100);
            assert_point_eq!(path[0], start);
            assert_point_eq!(path[100], end);
        }
    }

    #[test]
    fn sample_count_determines_length() {
        let start = GeoPoint::new(35.0, 135.0);
        let end = GeoPoint::new(33.0, -117.0);
        for n in 1..=20 {
            assert_eq!(arc(start, end, n).len(), n + 1);
        }
    }

    #[test]
    fn zero_sample_count_is_one_step() {
        let path = arc(GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0), 0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn same_point() {
        let path = arc(GeoPoint::ZERO, GeoPoint::ZERO, 10);
        assert_eq!(path, vec![GeoPoint::ZERO; 11]);

        let p = GeoPoint::new(-12.5, 179.9);
        assert_eq!(arc(p, p, 5), vec![p; 6]);
    }

    #[test]
    fn points_lie_on_minor_arc() {
        for (start, end) in sample_pairs() {
            let d = central_angle(start, end);
            let path = arc(start, end, 50);
            for &p in &path {
                let via = central_angle(start, p) + central_angle(p, end);
                assert!((via - d).abs() < 1e-9, "{p} is off the arc {start} - {end}");
            }
        }
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let start = GeoPoint::new(52.23, 21.01);
        let end = GeoPoint::new(40.64, -73.78);
        let step = central_angle(start, end) / 40.0;
        let path = arc(start, end, 40);
        for pair in path.windows(2) {
            assert!((central_angle(pair[0], pair[1]) - step).abs() < 1e-9);
        }
    }

    #[test]
    fn reversed_request_gives_reversed_path() {
        for (a, b) in sample_pairs() {
            let forward = arc(a, b, 64);
            let mut backward = arc(b, a, 64);
            backward.reverse();
            for (&p, &q) in forward.iter().zip(backward.iter()) {
                // Points on the antimeridian may come out as either +180° or -180°
                let dlon = (p.lon - q.lon).rem_euclid(360.0);
                assert!(
                    (p.lat - q.lat).abs() < EPS && dlon.min(360.0 - dlon) < EPS,
                    "assertion failed: {p} ≈ {q}"
                );
            }
        }
    }

    #[test]
    fn bends_over_the_pole() {
        let path = arc(GeoPoint::new(60.0, 0.0), GeoPoint::new(60.0, 180.0), 100);
        assert!((path[50].lat - 90.0).abs() < EPS);
        assert!(path.iter().all(|p| p.lat >= 60.0 - EPS));
    }

    #[test]
    fn follows_the_equator() {
        let path = arc(GeoPoint::new(0.0, -170.0), GeoPoint::new(0.0, 170.0), 10);
        for (i, p) in path.iter().enumerate() {
            assert!(p.lat.abs() < EPS);
            let expected = -170.0 - 2.0 * i as f64;
            let expected = if expected < -180.0 { expected + 360.0 } else { expected };
            assert!(
                (p.lon - expected).abs() < EPS || (p.lon.abs() - 180.0).abs() < EPS,
                "unexpected longitude at {i}: {}",
                p.lon
            );
        }
    }

    #[test]
    fn antipodal_points() {
        let start = GeoPoint::new(0.0, 0.0);
        let end = GeoPoint::new(0.0, 180.0);
        let path = arc(start, end, 10);

        assert_eq!(path.len(), 11);
        assert_eq!(path[0], start);
        assert_eq!(path[10], end);
        assert!(path.iter().all(|p| p.lat.is_finite() && p.lon.is_finite()));
        assert!((path[5].lat - 90.0).abs() < EPS);

        for &p in &path {
            let via = central_angle(start, p) + central_angle(p, end);
            assert!((via - std::f64::consts::PI).abs() < 1e-9);
        }
    }

    #[test]
    fn antipodal_points_in_southern_hemisphere() {
        let start = GeoPoint::new(-30.0, 40.0);
        let end = GeoPoint::new(30.0, -140.0);
        let path = arc(start, end, 12);

        assert_eq!(path.len(), 13);
        assert_eq!(path[12], end);
        assert!((path[4].lat + 90.0).abs() < EPS);

        // Down the meridian of start, over the south pole, up the meridian of end
        for p in &path[..4] {
            assert!((p.lon - 40.0).abs() < EPS);
        }
        for p in &path[5..] {
            assert!((p.lon + 140.0).abs() < EPS);
        }
    }
}
