//! The canonical per-(entity, year) observation row
//!
//! Field names on the wire follow the upstream pipeline's CSV headers
//! (Indonesian statistics-office naming), so both CSV ingestion and JSON
//! responses share the same serde renames.

use serde::{Deserialize, Serialize};

/// One clustering-assignment row: a kabupaten/kota in a given year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// District/city name, the entity identifier
    #[serde(rename = "Kabupaten_Kota")]
    pub kabupaten_kota: String,

    #[serde(rename = "Tahun")]
    pub year: i64,

    /// Province-level region; the upstream export may omit the column
    #[serde(rename = "Region", default)]
    pub region: Option<String>,

    /// Fruit expenditure (Rp/capita/year)
    #[serde(rename = "Pengeluaran_Buah")]
    pub pengeluaran_buah: f64,

    /// Vegetable expenditure (Rp/capita/year)
    #[serde(rename = "Pengeluaran_Sayur")]
    pub pengeluaran_sayur: f64,

    #[serde(rename = "Cluster")]
    pub cluster: i64,

    /// Filled in by the enricher; None when the cluster id has no label
    #[serde(rename = "Cluster_Label", default)]
    pub cluster_label: Option<String>,
}

/// The assignment table plus schema facts that individual rows cannot carry
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    pub rows: Vec<Observation>,
    /// Whether the source CSV had a Region column at all. "No column" is a
    /// different condition than "every value empty" for the region
    /// endpoints, so it is recorded at load time.
    pub has_region: bool,
}

impl ObservationTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
