// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

use std::mem::forget;
use std::ptr::null_mut;
use std::slice;

/// Vector of [GeoPoints](GeoPoint) owned by Rust, handed over to C.
/// Must be released with [flightarc_point_list_delete].
#[repr(C)]
pub struct CPointList {
    pub points: *mut GeoPoint,
    pub len: usize,
    pub capacity: usize,
}

impl CPointList {
    fn from_vec(mut points: Vec<GeoPoint>) -> Self {
        let list = Self {
            points: points.as_mut_ptr(),
            len: points.len(),
            capacity: points.capacity(),
        };
        forget(points);
        list
    }
}

/// Vector of sizes owned by Rust, handed over to C.
/// Must be released with [flightarc_size_list_delete].
#[repr(C)]
pub struct CSizeList {
    pub sizes: *mut usize,
    pub len: usize,
    pub capacity: usize,
}

impl CSizeList {
    const EMPTY: Self = Self {
        sizes: null_mut(),
        len: 0,
        capacity: 0,
    };

    fn from_vec(mut sizes: Vec<usize>) -> Self {
        let list = Self {
            sizes: sizes.as_mut_ptr(),
            len: sizes.len(),
            capacity: sizes.capacity(),
        };
        forget(sizes);
        list
    }
}

unsafe fn points_as_slice<'a>(points: *const GeoPoint, len: usize) -> &'a [GeoPoint] {
    if points.is_null() || len == 0 {
        &[]
    } else {
        slice::from_raw_parts(points, len)
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_compute_arc(
    start: GeoPoint,
    end: GeoPoint,
    sample_count: usize,
) -> CPointList {
    CPointList::from_vec(compute_arc(&ArcRequest {
        start,
        end,
        sample_count,
    }))
}

/// Splits the provided points at the antimeridian, and returns the number of points
/// in each consecutive segment. The lengths sum up to `len`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_segment_lengths(
    points: *const GeoPoint,
    len: usize,
) -> CSizeList {
    let points = points_as_slice(points, len);
    if points.is_empty() {
        return CSizeList::EMPTY;
    }

    CSizeList::from_vec(
        segment_at_antimeridian(points)
            .iter()
            .map(|segment| segment.len())
            .collect(),
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_point_list_delete(list: CPointList) {
    if !list.points.is_null() {
        drop(Vec::from_raw_parts(list.points, list.len, list.capacity));
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_size_list_delete(list: CSizeList) {
    if !list.sizes.is_null() {
        drop(Vec::from_raw_parts(list.sizes, list.len, list.capacity));
    }
}

/// Writes the bounds of the provided points into `out`.
/// Returns false (leaving `out` untouched) if there are no points or `out` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_bounds_of(
    points: *const GeoPoint,
    len: usize,
    out: *mut Bounds,
) -> bool {
    let points = points_as_slice(points, len);
    match (bounds_of(points.iter().copied()), out.as_mut()) {
        (Some(bounds), Some(out)) => {
            *out = bounds;
            true
        }
        _ => false,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn flightarc_earth_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    earth_distance(a, b)
}
