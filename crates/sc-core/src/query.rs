//! Read-side query functions over the loaded [`Dataset`]
//!
//! Every endpoint's filtering logic lives here as a pure function; the
//! HTTP layer only parses parameters and wraps results in envelopes.

use crate::dataset::Dataset;
use crate::forecast::Forecast;
use crate::loader::{record_cluster_id, Record};
use crate::observation::{Observation, ObservationTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Optional exact-match filters for the observation listing; absent
/// fields impose no restriction, present fields compose conjunctively.
#[derive(Debug, Default, Clone)]
pub struct ObservationFilter {
    pub year: Option<i64>,
    pub cluster: Option<i64>,
    pub region: Option<String>,
}

pub fn filter_observations<'a>(
    table: &'a ObservationTable,
    filter: &ObservationFilter,
) -> Vec<&'a Observation> {
    table
        .rows
        .iter()
        .filter(|r| filter.year.is_none_or(|y| r.year == y))
        .filter(|r| filter.cluster.is_none_or(|c| r.cluster == c))
        .filter(|r| {
            filter
                .region
                .as_deref()
                .is_none_or(|q| r.region.as_deref() == Some(q))
        })
        .collect()
}

/// Everything known about one cluster id. Absent profile or centroid rows
/// are None, not errors; a valid id can simply have no summary row.
#[derive(Debug)]
pub struct ClusterDetail<'a> {
    pub profile: Option<&'a Record>,
    pub centroid: Option<&'a Record>,
    pub rows: Vec<&'a Observation>,
}

pub fn cluster_detail(dataset: &Dataset, id: i64) -> ClusterDetail<'_> {
    ClusterDetail {
        profile: dataset
            .profiles
            .iter()
            .find(|r| record_cluster_id(r) == Some(id)),
        centroid: dataset
            .centroids
            .iter()
            .find(|r| record_cluster_id(r) == Some(id)),
        rows: dataset
            .observations
            .rows
            .iter()
            .filter(|r| r.cluster == id)
            .collect(),
    }
}

/// Filter the forecast table by latest cluster id and/or a
/// case-insensitive substring of the entity name.
pub fn filter_forecasts<'a>(
    forecasts: &'a [Forecast],
    cluster: Option<i64>,
    name: Option<&str>,
) -> Vec<&'a Forecast> {
    let needle = name.map(str::to_lowercase);
    forecasts
        .iter()
        .filter(|f| cluster.is_none_or(|c| f.cluster == c))
        .filter(|f| {
            needle
                .as_deref()
                .is_none_or(|n| f.kabupaten_kota.to_lowercase().contains(n))
        })
        .collect()
}

/// Distinct region names, sorted and deduplicated. None means the dataset
/// has no region column at all, which callers report as unavailable
/// rather than empty.
pub fn distinct_regions(table: &ObservationTable) -> Option<Vec<String>> {
    if !table.has_region {
        return None;
    }
    let mut regions: Vec<String> = table
        .rows
        .iter()
        .filter_map(|r| r.region.clone())
        .collect();
    regions.sort_unstable();
    regions.dedup();
    Some(regions)
}

/// Per-region aggregate row for /api/regions
#[derive(Debug, Clone, Serialize)]
pub struct RegionStats {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Avg_Buah")]
    pub avg_buah: f64,
    #[serde(rename = "Avg_Sayur")]
    pub avg_sayur: f64,
}

/// Observation count and mean expenditures per region, sorted by region.
/// None when the dataset has no region column.
pub fn region_stats(table: &ObservationTable) -> Option<Vec<RegionStats>> {
    if !table.has_region {
        return None;
    }
    let mut groups: BTreeMap<&str, (usize, f64, f64)> = BTreeMap::new();
    for row in &table.rows {
        if let Some(region) = &row.region {
            let entry = groups.entry(region.as_str()).or_default();
            entry.0 += 1;
            entry.1 += row.pengeluaran_buah;
            entry.2 += row.pengeluaran_sayur;
        }
    }
    Some(
        groups
            .into_iter()
            .map(|(region, (count, buah, sayur))| RegionStats {
                region: region.to_string(),
                count,
                avg_buah: buah / count as f64,
                avg_sayur: sayur / count as f64,
            })
            .collect(),
    )
}

/// Case-insensitive substring search over entity names
pub fn search_entities<'a>(table: &'a ObservationTable, query: &str) -> Vec<&'a Observation> {
    let needle = query.to_lowercase();
    table
        .rows
        .iter()
        .filter(|r| r.kabupaten_kota.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
