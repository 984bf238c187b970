//! Label enrichment: join the cluster-label map onto the assignment table
//!
//! The enriched table is the single source of truth for every downstream
//! aggregate and for the row-listing endpoints.

use crate::config::ClusterLabels;
use crate::observation::ObservationTable;

/// Fill in `cluster_label` on every row by map lookup. An id absent from
/// the map leaves the label as None; that is data, not an error.
pub fn enrich(mut table: ObservationTable, labels: &ClusterLabels) -> ObservationTable {
    for row in &mut table.rows {
        row.cluster_label = labels.get(row.cluster).map(str::to_string);
    }
    table
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod enrich_test;
