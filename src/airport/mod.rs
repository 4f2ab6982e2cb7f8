// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Resolving airport codes into positions.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::GeoPoint;

mod reader;

pub use reader::{
    add_airports_from_buffer, add_airports_from_file, add_airports_from_io, Error, FileFormat,
};

/// Airport (or any other named place) which a flight can depart from or arrive at.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Code under which the airport is looked up, e.g. "WAW". Always uppercase.
    pub code: String,

    /// Human-readable label, usually the name of the served city.
    pub name: String,

    pub position: GeoPoint,
}

/// Something which can resolve airport codes into [Airports](Airport),
/// like a geocoding service or an [AirportTable].
///
/// Unknown codes are not an error: `Ok(None)` must be returned instead,
/// and callers are expected to skip drawing the flight. `Err` is reserved
/// for failures of the source itself.
pub trait CoordinateSource {
    type Error;
    fn lookup(&mut self, code: &str) -> Result<Option<Airport>, Self::Error>;
}

/// Converts an airport code into its canonical, uppercase form.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// In-memory set of [Airports](Airport), indexed by their codes.
/// Lookups are case-insensitive.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AirportTable(BTreeMap<String, Airport>);

impl AirportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of airports in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all [Airports](Airport), ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.0.values()
    }

    /// Retrieves an [Airport] with the provided code.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.0.get(&normalize_code(code))
    }

    /// Creates or replaces an [Airport] with `airport.code`.
    /// The code is normalized to uppercase before insertion.
    pub fn insert(&mut self, mut airport: Airport) {
        airport.code = normalize_code(&airport.code);
        self.0.insert(airport.code.clone(), airport);
    }
}

impl CoordinateSource for AirportTable {
    type Error = Infallible;

    fn lookup(&mut self, code: &str) -> Result<Option<Airport>, Self::Error> {
        Ok(self.get(code).cloned())
    }
}

impl FromIterator<Airport> for AirportTable {
    fn from_iter<I: IntoIterator<Item = Airport>>(iter: I) -> Self {
        let mut table = Self::default();
        iter.into_iter().for_each(|a| table.insert(a));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(code: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            code: code.to_string(),
            name: String::default(),
            position: GeoPoint::new(lat, lon),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = AirportTable::from_iter([airport("waw", 52.17, 20.97)]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("WAW").map(|a| a.code.as_str()), Some("WAW"));
        assert_eq!(
            table.lookup(" Waw ").unwrap().map(|a| a.position),
            Some(GeoPoint::new(52.17, 20.97))
        );
    }

    #[test]
    fn lookup_unknown() {
        let mut table = AirportTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("XXX").unwrap(), None);
    }

    #[test]
    fn insert_replaces() {
        let mut table = AirportTable::new();
        table.insert(airport("LAX", 0.0, 0.0));
        table.insert(airport("lax", 33.94, -118.41));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("LAX").unwrap().position,
            GeoPoint::new(33.94, -118.41)
        );
    }
}
