//! CSV ingestion for the three required clustering tables
//!
//! The assignment table has a fixed schema and deserializes into
//! [`Observation`] rows. Profile and centroid tables are open-schema (the
//! upstream pipeline adds feature columns freely), so their rows are kept
//! as dynamic JSON records with per-cell numeric inference.

use crate::error::{CoreError, CoreResult};
use crate::observation::{Observation, ObservationTable};
use serde_json::{Map, Number, Value};
use std::path::Path;

/// One open-schema row (profile or centroid), column name to value
pub type Record = Map<String, Value>;

/// Read the clustering-assignment table. Required: any failure is fatal.
pub fn load_assignments(path: &Path) -> CoreResult<ObservationTable> {
    let mut reader = open_reader(path)?;
    let has_region = reader
        .headers()
        .map_err(|e| read_error(path, e))?
        .iter()
        .any(|h| h == "Region");

    let mut rows = Vec::new();
    for row in reader.deserialize::<Observation>() {
        let mut row = row.map_err(|e| CoreError::RowParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        // Empty cells in a present Region column are absent values
        if row.region.as_deref() == Some("") {
            row.region = None;
        }
        rows.push(row);
    }

    log::info!("Loaded {} assignment rows from {}", rows.len(), path.display());
    Ok(ObservationTable { rows, has_region })
}

/// Read an open-schema table (profiles or centroids) into dynamic records
pub fn load_records(path: &Path) -> CoreResult<Vec<Record>> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| read_error(path, e))?;
        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), infer_value(cell));
        }
        records.push(record);
    }
    Ok(records)
}

fn open_reader(path: &Path) -> CoreResult<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(CoreError::TableNotFound {
            path: path.display().to_string(),
        });
    }
    csv::Reader::from_path(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: csv::Error) -> CoreError {
    CoreError::TableReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// Narrowest numeric type a cell parses as; empty cells become null
fn infer_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::Number(Number::from(i));
    }
    if let Ok(f) = cell.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(cell.to_string())
}

/// Cluster id of a dynamic record, when it has an integer `Cluster` cell
pub fn record_cluster_id(record: &Record) -> Option<i64> {
    record.get("Cluster").and_then(Value::as_i64)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
