//! Request handlers for the nine read-only endpoints
//!
//! Handlers parse and validate parameters, call the pure query functions
//! in sc-core, and wrap the result in the response envelope. Nothing here
//! mutates state or performs I/O.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use sc_core::query::{
    cluster_detail, distinct_regions, filter_forecasts, filter_observations, region_stats,
    search_entities, ObservationFilter,
};

use crate::response::{success, success_list, ApiError};
use crate::server::AppState;

const REGION_UNAVAILABLE: &str = "Region data not available";

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ClustersQuery {
    year: Option<String>,
    cluster: Option<String>,
    region: Option<String>,
}

/// GET /api/clusters
pub async fn list_clusters(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClustersQuery>,
) -> Result<Json<Value>, ApiError> {
    let filter = ObservationFilter {
        year: parse_opt_int("year", query.year.as_deref())?,
        cluster: parse_opt_int("cluster", query.cluster.as_deref())?,
        region: query.region,
    };
    let rows = filter_observations(&state.dataset.observations, &filter);
    Ok(success_list(rows.len(), rows))
}

/// GET /api/clusters/{id}
pub async fn get_cluster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_int("cluster id", &id)?;
    let detail = cluster_detail(&state.dataset, id);
    let count = detail.rows.len();
    Ok(Json(json!({
        "success": true,
        "cluster_id": id,
        // A valid id with no summary row gets an empty object, not an error
        "profile": detail.profile.cloned().map_or_else(|| json!({}), Value::Object),
        "centroid": detail.centroid.cloned().map_or_else(|| json!({}), Value::Object),
        "data": detail.rows,
        "count": count,
    })))
}

/// GET /api/statistics
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Json<Value> {
    success(&state.dataset.summary)
}

#[derive(Debug, Deserialize)]
pub struct PredictionsQuery {
    cluster: Option<String>,
    kabupaten: Option<String>,
}

/// GET /api/predictions
pub async fn list_predictions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PredictionsQuery>,
) -> Result<Json<Value>, ApiError> {
    let cluster = parse_opt_int("cluster", query.cluster.as_deref())?;
    let hits = filter_forecasts(&state.dataset.forecasts, cluster, query.kabupaten.as_deref());
    Ok(success_list(hits.len(), hits))
}

/// GET /api/regions
pub async fn get_regions(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match region_stats(&state.dataset.observations) {
        Some(stats) => Ok(success(stats)),
        None => Err(ApiError::unavailable(REGION_UNAVAILABLE)),
    }
}

/// GET /api/regions/list
pub async fn list_regions(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match distinct_regions(&state.dataset.observations) {
        Some(regions) => Ok(success_list(regions.len(), regions)),
        None => Err(ApiError::unavailable(REGION_UNAVAILABLE)),
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

/// GET /api/search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let q = query.q.unwrap_or_default().to_lowercase();
    if q.is_empty() {
        return Err(ApiError::bad_request("Query parameter q is required"));
    }
    let hits = search_entities(&state.dataset.observations, &q);
    Ok(Json(json!({
        "success": true,
        "query": q,
        "count": hits.len(),
        "data": hits,
    })))
}

/// GET /api/visualization
pub async fn get_visualization(State(state): State<Arc<AppState>>) -> Json<Value> {
    success(&state.dataset.visualization)
}

fn parse_int(name: &str, value: &str) -> Result<i64, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid integer for {name}: '{value}'")))
}

fn parse_opt_int(name: &str, value: Option<&str>) -> Result<Option<i64>, ApiError> {
    value.map(|v| parse_int(name, v)).transpose()
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
