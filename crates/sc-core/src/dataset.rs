//! Startup pipeline: load, enrich, aggregate, forecast
//!
//! [`Dataset::load`] runs the whole derivation sequentially and returns an
//! immutable bundle. There are no setters and no reload path; serving a
//! new dataset means building a new bundle and swapping the reference.

use crate::aggregate::{summarize, visualize, SummaryStatistics, VisualizationBundle};
use crate::artifact::SidecarArtifacts;
use crate::config::{ClusterLabels, DataPaths};
use crate::enrich::enrich;
use crate::error::{CoreError, CoreResult};
use crate::forecast::{build_forecasts, Forecast};
use crate::loader::{load_assignments, load_records, Record};
use crate::observation::ObservationTable;

/// Everything the query layer reads, derived once per process lifetime
#[derive(Debug)]
pub struct Dataset {
    pub observations: ObservationTable,
    pub profiles: Vec<Record>,
    pub centroids: Vec<Record>,
    pub summary: SummaryStatistics,
    pub forecasts: Vec<Forecast>,
    pub visualization: VisualizationBundle,
    pub artifacts: SidecarArtifacts,
}

impl Dataset {
    /// Run the full derivation pipeline. Fails only on the three required
    /// tables; sidecar artifacts degrade to their empty defaults.
    pub fn load(paths: &DataPaths, labels: &ClusterLabels) -> CoreResult<Self> {
        if !paths.root().is_dir() {
            return Err(CoreError::DataDirNotFound {
                path: paths.root().display().to_string(),
            });
        }

        let raw = load_assignments(&paths.assignments_path())?;
        let profiles = load_records(&paths.profiles_path())?;
        let centroids = load_records(&paths.centroids_path())?;
        let artifacts = SidecarArtifacts::load(&paths.exports_dir());

        let observations = enrich(raw, labels);
        let summary = summarize(&observations, &profiles, &centroids);
        let forecasts = build_forecasts(&observations);
        let visualization = visualize(&observations, &forecasts);

        log::info!(
            "Dataset ready: {} observations, {} clusters, {} forecasts",
            observations.len(),
            summary.overview.total_clusters,
            forecasts.len()
        );

        Ok(Self {
            observations,
            profiles,
            centroids,
            summary,
            forecasts,
            visualization,
            artifacts,
        })
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;
