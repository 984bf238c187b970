//! Descriptive statistics and visualization aggregates
//!
//! Pure functions over the enriched table. Grouping uses BTreeMaps so the
//! serialized output has a stable key order run to run.

use crate::forecast::Forecast;
use crate::loader::Record;
use crate::observation::ObservationTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// The /api/statistics payload: one snapshot of the whole dataset
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    pub overview: Overview,
    /// Cluster id (stringified, JSON object keys) to row count
    pub cluster_distribution: BTreeMap<String, usize>,
    /// Cluster id to first label seen for it, null when never labeled
    pub cluster_labels: BTreeMap<String, Option<String>>,
    /// Region to row count; empty when the dataset has no region column
    pub regional_distribution: BTreeMap<String, usize>,
    pub expenditure_summary: ExpenditureSummary,
    pub cluster_profiles: Vec<Record>,
    pub centroids: Vec<Record>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_kabupaten: usize,
    pub total_clusters: usize,
    pub years_covered: Vec<i64>,
    pub total_data_points: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenditureSummary {
    pub avg_buah: f64,
    pub avg_sayur: f64,
    pub max_buah: f64,
    pub max_sayur: f64,
    pub min_buah: f64,
    pub min_sayur: f64,
}

/// The /api/visualization payload
#[derive(Debug, Clone, Serialize)]
pub struct VisualizationBundle {
    pub cluster_sizes: Vec<ClusterSizeRow>,
    pub expenditure_by_cluster: Vec<ClusterMeanRow>,
    pub predictions_summary: Vec<PredictionSummaryRow>,
}

/// Row count per (cluster id, label) pair. Grouping by the pair means a
/// label-map change can split one cluster into two rows; callers know.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSizeRow {
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    #[serde(rename = "Cluster_Label")]
    pub cluster_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterMeanRow {
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    #[serde(rename = "Pengeluaran_Buah")]
    pub pengeluaran_buah: f64,
    #[serde(rename = "Pengeluaran_Sayur")]
    pub pengeluaran_sayur: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionSummaryRow {
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    #[serde(rename = "Predicted_Buah_2025")]
    pub predicted_buah: f64,
    #[serde(rename = "Predicted_Sayur_2025")]
    pub predicted_sayur: f64,
    #[serde(rename = "Growth_Rate_Buah")]
    pub growth_rate_buah: f64,
    #[serde(rename = "Growth_Rate_Sayur")]
    pub growth_rate_sayur: f64,
}

/// Build the summary snapshot from the enriched table and the two
/// open-schema tables (embedded verbatim as record lists).
pub fn summarize(
    table: &ObservationTable,
    profiles: &[Record],
    centroids: &[Record],
) -> SummaryStatistics {
    let mut entities: Vec<&str> = table.rows.iter().map(|r| r.kabupaten_kota.as_str()).collect();
    entities.sort_unstable();
    entities.dedup();

    let mut years: Vec<i64> = table.rows.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut cluster_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut cluster_labels: BTreeMap<String, Option<String>> = BTreeMap::new();
    let mut regional_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        let key = row.cluster.to_string();
        *cluster_distribution.entry(key.clone()).or_default() += 1;
        let label = cluster_labels.entry(key).or_insert(None);
        if label.is_none() {
            label.clone_from(&row.cluster_label);
        }
        if let Some(region) = &row.region {
            *regional_distribution.entry(region.clone()).or_default() += 1;
        }
    }

    let buah: Vec<f64> = table.rows.iter().map(|r| r.pengeluaran_buah).collect();
    let sayur: Vec<f64> = table.rows.iter().map(|r| r.pengeluaran_sayur).collect();

    SummaryStatistics {
        overview: Overview {
            total_kabupaten: entities.len(),
            total_clusters: cluster_distribution.len(),
            years_covered: years,
            total_data_points: table.len(),
        },
        cluster_distribution,
        cluster_labels,
        regional_distribution,
        expenditure_summary: ExpenditureSummary {
            avg_buah: mean(&buah),
            avg_sayur: mean(&sayur),
            max_buah: buah.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            max_sayur: sayur.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min_buah: buah.iter().copied().fold(f64::INFINITY, f64::min),
            min_sayur: sayur.iter().copied().fold(f64::INFINITY, f64::min),
        },
        cluster_profiles: profiles.to_vec(),
        centroids: centroids.to_vec(),
    }
}

/// Build the visualization aggregates from the enriched table and the
/// forecast table.
pub fn visualize(table: &ObservationTable, forecasts: &[Forecast]) -> VisualizationBundle {
    // (cluster, label) pair grouping; unlabeled rows drop out of this view
    let mut sizes: BTreeMap<(i64, String), usize> = BTreeMap::new();
    let mut by_cluster: BTreeMap<i64, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for row in &table.rows {
        if let Some(label) = &row.cluster_label {
            *sizes.entry((row.cluster, label.clone())).or_default() += 1;
        }
        let (buah, sayur) = by_cluster.entry(row.cluster).or_default();
        buah.push(row.pengeluaran_buah);
        sayur.push(row.pengeluaran_sayur);
    }

    let mut pred: BTreeMap<i64, (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for f in forecasts {
        let entry = pred.entry(f.cluster).or_default();
        entry.0.push(f.predicted_buah);
        entry.1.push(f.predicted_sayur);
        entry.2.push(f.growth_rate_buah);
        entry.3.push(f.growth_rate_sayur);
    }

    VisualizationBundle {
        cluster_sizes: sizes
            .into_iter()
            .map(|((cluster, cluster_label), count)| ClusterSizeRow {
                cluster,
                cluster_label,
                count,
            })
            .collect(),
        expenditure_by_cluster: by_cluster
            .into_iter()
            .map(|(cluster, (buah, sayur))| ClusterMeanRow {
                cluster,
                pengeluaran_buah: mean(&buah),
                pengeluaran_sayur: mean(&sayur),
            })
            .collect(),
        predictions_summary: pred
            .into_iter()
            .map(|(cluster, (pb, ps, gb, gs))| PredictionSummaryRow {
                cluster,
                predicted_buah: mean(&pb),
                predicted_sayur: mean(&ps),
                growth_rate_buah: mean(&gb),
                growth_rate_sayur: mean(&gs),
            })
            .collect(),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
