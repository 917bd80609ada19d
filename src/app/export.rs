use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use serde::Serialize;

use super::CarbonAppError;
use crate::model::graph::RouteComparison;
use crate::model::plan::PlanSummary;

/// one row of the exported route comparison table. the best route is
/// rank 1 and alternatives follow in the order given.
#[derive(Debug, Clone, Serialize)]
struct RouteRow {
    rank: usize,
    route: String,
    hops: usize,
    distance_km: f64,
    emissions_kgco2e: f64,
}

/// writes the per-leg results of a trip plan as CSV, gzipped when the
/// path ends in .gz.
pub fn write_plan_csv(
    summary: &PlanSummary,
    path: &Path,
    overwrite: bool,
) -> Result<(), CarbonAppError> {
    let mut writer = create_writer(path, true, QuoteStyle::Necessary, overwrite)?;
    for leg in summary.legs.iter() {
        writer
            .serialize(leg)
            .map_err(|e| CarbonAppError::CsvWriteError(path.display().to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| CarbonAppError::OutputIoError(path.display().to_string(), e))?;
    Ok(())
}

/// writes a route comparison as CSV, best route first, gzipped when the
/// path ends in .gz.
pub fn write_routes_csv(
    comparison: &RouteComparison,
    path: &Path,
    overwrite: bool,
) -> Result<(), CarbonAppError> {
    let mut writer = create_writer(path, true, QuoteStyle::Necessary, overwrite)?;
    let routes = std::iter::once(&comparison.best).chain(comparison.alternatives.iter());
    for (index, route) in routes.enumerate() {
        let row = RouteRow {
            rank: index + 1,
            route: route.to_string(),
            hops: route.hops(),
            distance_km: route.distance_km,
            emissions_kgco2e: route.emissions_kgco2e,
        };
        writer
            .serialize(row)
            .map_err(|e| CarbonAppError::CsvWriteError(path.display().to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| CarbonAppError::OutputIoError(path.display().to_string(), e))?;
    Ok(())
}

/// helper to build a csv writer for plain or gzipped output while
/// respecting the user's overwrite preference.
fn create_writer(
    path: &Path,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<csv::Writer<Box<dyn Write>>, CarbonAppError> {
    if path.exists() && !overwrite {
        return Err(CarbonAppError::OutputFileExists(path.display().to_string()));
    }
    let file = File::create(path)
        .map_err(|e| CarbonAppError::OutputIoError(path.display().to_string(), e))?;
    let is_gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    let buffer: Box<dyn Write> = if is_gzip {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(file)
    };
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(writer)
}
