//! sc-core - Core library for Spendcluster
//!
//! This crate owns the startup derivation pipeline (CSV loading, label
//! enrichment, summary aggregation, per-entity trend forecasting) and the
//! pure query functions the HTTP layer serves from. Everything is built
//! once at startup and read-only afterwards.

pub mod aggregate;
pub mod artifact;
pub mod config;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod forecast;
pub mod loader;
pub mod observation;
pub mod query;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aggregate::{summarize, visualize, SummaryStatistics, VisualizationBundle};
pub use artifact::{ArtifactKind, SidecarArtifacts};
pub use config::{ClusterLabels, DataPaths, FORECAST_TARGET_YEAR};
pub use dataset::Dataset;
pub use enrich::enrich;
pub use error::{CoreError, CoreResult};
pub use forecast::{build_forecasts, Forecast};
pub use loader::{load_assignments, load_records, Record};
pub use observation::{Observation, ObservationTable};
pub use query::{
    cluster_detail, distinct_regions, filter_forecasts, filter_observations, region_stats,
    search_entities, ClusterDetail, ObservationFilter, RegionStats,
};
