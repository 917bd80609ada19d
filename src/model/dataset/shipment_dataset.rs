use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use kdam::tqdm;

use super::{DatasetError, ShipmentRecord};

/// columns that must survive header normalization for a file to be
/// usable as a shipment history.
const REQUIRED_COLUMNS: [&str; 5] = [
    "origin",
    "destination",
    "mode",
    "distance_km",
    "emissions_kgco2e",
];

/// in-memory shipment history.
///
/// construction normalizes the raw column names so the rest of the crate
/// can rely on a single schema regardless of which export produced the
/// file. record order is preserved as read, which matters downstream:
/// later records overwrite earlier ones during graph construction, and
/// distance lookups return the first match.
#[derive(Debug, Clone, Default)]
pub struct ShipmentDataset {
    records: Vec<ShipmentRecord>,
}

impl ShipmentDataset {
    pub fn new(records: Vec<ShipmentRecord>) -> ShipmentDataset {
        ShipmentDataset { records }
    }

    /// reads a shipment history from a CSV file on disk.
    pub fn from_csv_path(path: &Path) -> Result<ShipmentDataset, DatasetError> {
        let file = File::open(path).map_err(|e| DatasetError::DatasetFileError {
            path: path.display().to_string(),
            source: e,
        })?;
        ShipmentDataset::from_csv_read(file)
    }

    /// reads a shipment history from any CSV source.
    pub fn from_csv_read<R: Read>(source: R) -> Result<ShipmentDataset, DatasetError> {
        let mut reader = csv::Reader::from_reader(source);
        let normalized = normalize_headers(reader.headers()?);
        for required in REQUIRED_COLUMNS.iter() {
            if !normalized.iter().any(|header| header == *required) {
                return Err(DatasetError::MissingColumn(String::from(*required)));
            }
        }
        reader.set_headers(normalized);

        let mut records: Vec<ShipmentRecord> = vec![];
        for row in tqdm!(reader.deserialize(), desc = "read shipment records") {
            let record: ShipmentRecord = row?;
            records.push(record);
        }
        eprintln!();
        Ok(ShipmentDataset { records })
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// distinct origin locations in first-appearance order.
    pub fn origins(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.origin.as_str())
            .unique()
            .collect_vec()
    }

    /// distinct destination locations in first-appearance order.
    pub fn destinations(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.destination.as_str())
            .unique()
            .collect_vec()
    }

    /// distinct transport modes in first-appearance order.
    pub fn modes(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.mode.as_str())
            .unique()
            .collect_vec()
    }

    /// historical distance of the first record matching the given origin,
    /// destination and transport mode.
    pub fn find_distance(&self, origin: &str, destination: &str, mode: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.origin == origin && r.destination == destination && r.mode == mode)
            .map(|r| r.distance_km)
    }
}

/// lowercases and trims raw column names, folding known aliases from
/// upstream exports into the canonical schema.
fn normalize_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    let columns: Vec<String> = headers.iter().map(normalize_column).collect();
    csv::StringRecord::from(columns)
}

fn normalize_column(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "transport_mode" => String::from("mode"),
        "co2_emissions_kg" => String::from("emissions_kgco2e"),
        "shipment_weight_kg" => String::from("weight_kg"),
        "load_utilization_%" => String::from("load_utilization"),
        _ => lowered,
    }
}
