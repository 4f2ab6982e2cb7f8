// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use super::{normalize_code, Airport, AirportTable};
use crate::GeoPoint;

/// Format of the input airport table.
///
/// All formats carry the same CSV data, with a header row and the following columns:
/// `code`, `name`, `lat` and `lon`. Additional columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Unknown format - guess the format based on the content
    Unknown,

    /// Force uncompressed CSV
    Csv,

    /// Force CSV with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    CsvGz,

    /// Force CSV with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    CsvBz2,
}

impl FileFormat {
    /// Guesses the format from the first bytes of a file.
    fn detect(head: &[u8]) -> Self {
        if head.starts_with(&[0x1F, 0x8B]) {
            FileFormat::CsvGz
        } else if head.starts_with(b"BZh") {
            FileFormat::CsvBz2
        } else {
            FileFormat::Csv
        }
    }
}

/// Error which can occur when loading an airport table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("airport {code}: invalid position ({lat}, {lon})")]
    InvalidCoordinate { code: String, lat: f64, lon: f64 },
}

#[derive(Debug, serde::Deserialize)]
struct Record {
    code: String,
    name: String,
    lat: f64,
    lon: f64,
}

fn add_records<R: io::Read>(table: &mut AirportTable, reader: R) -> Result<(), Error> {
    let mut r = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for record in r.deserialize() {
        let record: Record = record?;
        let code = normalize_code(&record.code);

        if code.is_empty() {
            log::warn!("skipping airport without a code ({:?})", record.name);
            continue;
        }

        let position = GeoPoint::new(record.lat, record.lon);
        if !position.is_valid() {
            return Err(Error::InvalidCoordinate {
                code,
                lat: record.lat,
                lon: record.lon,
            });
        }

        table.insert(Airport {
            code,
            name: record.name,
            position,
        });
    }

    Ok(())
}

/// Parse airports from a reader into an [AirportTable].
///
/// The provided stream will be automatically wrapped in a buffered reader.
/// With [FileFormat::Unknown], the format is guessed from the first bytes of the stream.
///
/// Airports already in the table are replaced by entries with the same code.
/// On error, the table is left unchanged.
pub fn add_airports_from_io<R: io::Read>(
    table: &mut AirportTable,
    format: FileFormat,
    reader: R,
) -> Result<(), Error> {
    let mut loaded = AirportTable::default();
    let mut b = io::BufReader::new(reader);

    let format = if format == FileFormat::Unknown {
        let detected = FileFormat::detect(b.fill_buf()?);
        log::debug!("detected airport table format: {:?}", detected);
        detected
    } else {
        format
    };

    match format {
        FileFormat::Unknown | FileFormat::Csv => add_records(&mut loaded, b)?,

        FileFormat::CsvGz => {
            let d = flate2::read::MultiGzDecoder::new(b);
            add_records(&mut loaded, d)?
        }

        FileFormat::CsvBz2 => {
            let d = bzip2::read::MultiBzDecoder::new(b);
            add_records(&mut loaded, d)?
        }
    }

    log::debug!("loaded {} airports", loaded.len());
    table.0.append(&mut loaded.0);
    Ok(())
}

/// Parse airports from a file at the provided path into an [AirportTable].
///
/// With [FileFormat::Unknown], the format is guessed from the file extension
/// (`.gz` or `.bz2`), falling back to guessing from the content.
pub fn add_airports_from_file<P: AsRef<Path>>(
    table: &mut AirportTable,
    format: FileFormat,
    path: P,
) -> Result<(), Error> {
    let path = path.as_ref();
    let format = if format == FileFormat::Unknown {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => FileFormat::CsvGz,
            Some("bz2") => FileFormat::CsvBz2,
            _ => FileFormat::Unknown,
        }
    } else {
        format
    };

    let f = File::open(path)?;
    add_airports_from_io(table, format, f)
}

/// Parse airports from a static buffer into an [AirportTable].
pub fn add_airports_from_buffer(
    table: &mut AirportTable,
    format: FileFormat,
    data: &[u8],
) -> Result<(), Error> {
    let format = if format == FileFormat::Unknown {
        FileFormat::detect(data)
    } else {
        format
    };
    add_airports_from_io(table, format, data)
}
