//! Optional precomputed JSON export artifacts
//!
//! The upstream pipeline may drop up to six JSON exports next to the CSV
//! tables. None of them is required: a missing or unreadable file is
//! replaced by that artifact's empty default so the service can always
//! start from the CSVs alone.

use serde_json::{json, Value};
use std::path::Path;

/// The known sidecar artifacts, one variant per file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    AllClusters,
    ClusterDetails,
    PredictionsFull,
    RegionalAnalysis,
    ExpenditureTrends,
    ApiMetadata,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::AllClusters,
        ArtifactKind::ClusterDetails,
        ArtifactKind::PredictionsFull,
        ArtifactKind::RegionalAnalysis,
        ArtifactKind::ExpenditureTrends,
        ArtifactKind::ApiMetadata,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::AllClusters => "all_clusters.json",
            ArtifactKind::ClusterDetails => "cluster_details.json",
            ArtifactKind::PredictionsFull => "predictions_full.json",
            ArtifactKind::RegionalAnalysis => "regional_analysis.json",
            ArtifactKind::ExpenditureTrends => "expenditure_trends.json",
            ArtifactKind::ApiMetadata => "api_metadata.json",
        }
    }

    /// The shape substituted when the file is absent. Each artifact keeps
    /// its own collection key so consumers can index it without probing.
    pub fn empty_default(self) -> Value {
        match self {
            ArtifactKind::AllClusters => json!({"metadata": {}, "data": []}),
            ArtifactKind::ClusterDetails => json!({"metadata": {}, "clusters": []}),
            ArtifactKind::PredictionsFull => json!({"metadata": {}, "predictions": []}),
            ArtifactKind::RegionalAnalysis => json!({"metadata": {}, "regions": []}),
            ArtifactKind::ExpenditureTrends => json!({"metadata": {}, "trends": []}),
            ArtifactKind::ApiMetadata => {
                json!({"api_version": "1.0.0", "data_summary": {}})
            }
        }
    }

    /// Load the artifact from `dir`, falling back to the empty default.
    /// Never fails: absence and parse errors are both non-fatal.
    pub fn load_or_default(self, dir: &Path) -> Value {
        let path = dir.join(self.file_name());
        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Malformed artifact {}: {e}", path.display());
                    self.empty_default()
                }
            },
            Err(_) => {
                log::info!(
                    "Optional artifact {} not found, using empty default",
                    path.display()
                );
                self.empty_default()
            }
        }
    }
}

/// All six artifacts, loaded or defaulted, in one bundle
#[derive(Debug, Clone)]
pub struct SidecarArtifacts {
    pub all_clusters: Value,
    pub cluster_details: Value,
    pub predictions_full: Value,
    pub regional_analysis: Value,
    pub expenditure_trends: Value,
    pub api_metadata: Value,
}

impl SidecarArtifacts {
    pub fn load(dir: &Path) -> Self {
        Self {
            all_clusters: ArtifactKind::AllClusters.load_or_default(dir),
            cluster_details: ArtifactKind::ClusterDetails.load_or_default(dir),
            predictions_full: ArtifactKind::PredictionsFull.load_or_default(dir),
            regional_analysis: ArtifactKind::RegionalAnalysis.load_or_default(dir),
            expenditure_trends: ArtifactKind::ExpenditureTrends.load_or_default(dir),
            api_metadata: ArtifactKind::ApiMetadata.load_or_default(dir),
        }
    }

    /// Defaults for every artifact, as if no exports directory existed
    pub fn empty() -> Self {
        Self {
            all_clusters: ArtifactKind::AllClusters.empty_default(),
            cluster_details: ArtifactKind::ClusterDetails.empty_default(),
            predictions_full: ArtifactKind::PredictionsFull.empty_default(),
            regional_analysis: ArtifactKind::RegionalAnalysis.empty_default(),
            expenditure_trends: ArtifactKind::ExpenditureTrends.empty_default(),
            api_metadata: ArtifactKind::ApiMetadata.empty_default(),
        }
    }
}

#[cfg(test)]
#[path = "artifact_test.rs"]
mod artifact_test;
