// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! [GeoJSON](https://geojson.org/) export of routes, for map layers which consume it directly.

use std::io;

use serde_json::{json, Value};

use crate::airport::Airport;
use crate::{FlightRoute, GeoPoint, SegmentedPath};

fn position(p: &GeoPoint) -> Value {
    // GeoJSON positions are longitude first
    json!([p.lon, p.lat])
}

fn line(segment: &[GeoPoint]) -> Value {
    let mut positions: Vec<Value> = segment.iter().map(position).collect();

    // A LineString needs at least two positions
    if let [only] = segment {
        positions.push(position(only));
    }

    Value::Array(positions)
}

/// Converts segments into a `MultiLineString` geometry, one line per segment.
///
/// Single-point segments, left by a crossing on the first or last step of a path,
/// become degenerate lines with the point repeated.
pub fn to_geometry(segments: &SegmentedPath) -> Value {
    let lines: Vec<Value> = segments.iter().map(|segment| line(segment)).collect();

    json!({
        "type": "MultiLineString",
        "coordinates": lines,
    })
}

/// Wraps segments in a `FeatureCollection` with a single feature without properties.
pub fn to_feature_collection(segments: &SegmentedPath) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {},
                "geometry": to_geometry(segments),
            }
        ],
    })
}

fn airport_feature(airport: &Airport, role: &str) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "role": role,
            "code": airport.code,
            "name": airport.name,
        },
        "geometry": {
            "type": "Point",
            "coordinates": position(&airport.position),
        },
    })
}

/// Converts a [FlightRoute] into a `FeatureCollection` with three features:
/// the flight path (`MultiLineString`), the departure and the arrival airports (`Point`s).
pub fn route_to_feature_collection(route: &FlightRoute) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "from": route.from.code,
                    "to": route.to.code,
                    "distance_km": route.distance_km,
                },
                "geometry": to_geometry(&route.segments),
            },
            airport_feature(&route.from, "departure"),
            airport_feature(&route.to, "arrival"),
        ],
    })
}

/// Pretty-prints a GeoJSON value into the provided writer, followed by a newline.
pub fn write_pretty<W: io::Write>(mut writer: W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)
}
