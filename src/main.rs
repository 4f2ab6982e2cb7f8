use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use flightarc::airport::{self, AirportTable, FileFormat};
use flightarc::viewport::{fit_viewport, ViewportOptions};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct TableLoadError(PathBuf, #[source] airport::Error);

#[derive(Debug, thiserror::Error)]
#[error("can't route {0} -> {1}: unknown airport")]
struct UnknownAirport(String, String);

#[derive(Parser)]
struct Cli {
    /// The path to the airport table (CSV with code, name, lat and lon columns;
    /// optionally gzip or bzip2 compressed)
    airports_file: PathBuf,

    /// Code of the departure airport
    from: String,

    /// Code of the arrival airport
    to: String,

    /// Number of interpolation steps along the route
    #[arg(short, long, default_value_t = flightarc::DEFAULT_SAMPLE_COUNT)]
    samples: usize,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let mut table = load_table(&cli.airports_file)?;

    let route = flightarc::plan_route(&mut table, &cli.from, &cli.to, cli.samples.max(1))?
        .ok_or_else(|| UnknownAirport(cli.from.clone(), cli.to.clone()))?;

    let view = fit_viewport(&route.bounds, &ViewportOptions::default());
    log::info!(
        "{} ({}) -> {} ({}): {:.0} km, view centered at {} with zoom {:.2}",
        route.from.code,
        route.from.name,
        route.to.code,
        route.to.name,
        route.distance_km,
        view.center,
        view.zoom,
    );

    let geojson = flightarc::geojson::route_to_feature_collection(&route);
    flightarc::geojson::write_pretty(io::stdout().lock(), &geojson)?;

    Ok(())
}

fn load_table<P: AsRef<Path>>(path: P) -> Result<AirportTable, TableLoadError> {
    let mut table = AirportTable::default();
    match airport::add_airports_from_file(&mut table, FileFormat::Unknown, path.as_ref()) {
        Ok(()) => Ok(table),
        Err(e) => Err(TableLoadError(PathBuf::from(path.as_ref()), e)),
    }
}
