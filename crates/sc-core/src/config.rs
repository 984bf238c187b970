//! Data-directory layout and static analysis configuration
//!
//! The upstream analysis pipeline drops its outputs under a single data
//! root: clustering tables in `result/`, optional JSON exports in
//! `api_exports/`. This module knows that layout so nothing else has to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Year every forecast is evaluated at. The wire format bakes this into
/// field names (`Predicted_Buah_2025`), so it is fixed, not derived from
/// the observed years.
pub const FORECAST_TARGET_YEAR: i64 = 2025;

/// Resolved locations of the input files under a data root
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the three required CSV tables
    pub fn results_dir(&self) -> PathBuf {
        self.root.join("result")
    }

    /// Directory holding the optional JSON export artifacts
    pub fn exports_dir(&self) -> PathBuf {
        self.root.join("api_exports")
    }

    pub fn assignments_path(&self) -> PathBuf {
        self.results_dir().join("clustering_results.csv")
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.results_dir().join("cluster_profiles.csv")
    }

    pub fn centroids_path(&self) -> PathBuf {
        self.results_dir().join("cluster_centroids.csv")
    }
}

/// Immutable cluster-id to human-label mapping
///
/// Passed explicitly into the enricher rather than read from a global, so
/// tests can substitute their own mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterLabels(BTreeMap<i64, String>);

impl ClusterLabels {
    pub fn new(map: BTreeMap<i64, String>) -> Self {
        Self(map)
    }

    pub fn get(&self, cluster: i64) -> Option<&str> {
        self.0.get(&cluster).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ClusterLabels {
    /// The production mapping used by the upstream K=3 clustering
    fn default() -> Self {
        Self(BTreeMap::from([
            (0, "Low Expenditure".to_string()),
            (1, "Balanced Expenditure".to_string()),
            (2, "High Expenditure".to_string()),
        ]))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
