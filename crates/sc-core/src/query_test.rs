use super::*;
use crate::aggregate::{summarize, visualize};
use crate::artifact::SidecarArtifacts;
use crate::config::ClusterLabels;
use crate::enrich::enrich;
use crate::forecast::build_forecasts;
use crate::test_utils::{obs, table, table_without_region};
use serde_json::json;

fn sample() -> ObservationTable {
    enrich(
        table(vec![
            obs("Kota Bandung", 2022, Some("Jawa Barat"), 100.0, 200.0, 1),
            obs("Kota Bandung", 2023, Some("Jawa Barat"), 110.0, 220.0, 1),
            obs("Kab. Garut", 2023, Some("Jawa Barat"), 40.0, 80.0, 0),
            obs("Kota Surabaya", 2023, Some("Jawa Timur"), 300.0, 400.0, 2),
            obs("Kota Surabaya", 2024, Some("Jawa Timur"), 320.0, 420.0, 2),
        ]),
        &ClusterLabels::default(),
    )
}

fn record(cluster: i64, extra: (&str, f64)) -> Record {
    let mut r = Record::new();
    r.insert("Cluster".into(), json!(cluster));
    r.insert(extra.0.into(), json!(extra.1));
    r
}

fn sample_dataset() -> crate::dataset::Dataset {
    let observations = sample();
    let profiles = vec![record(0, ("Avg_Buah", 40.0)), record(1, ("Avg_Buah", 105.0))];
    let centroids = vec![record(0, ("Buah", 40.0))];
    let summary = summarize(&observations, &profiles, &centroids);
    let forecasts = build_forecasts(&observations);
    let visualization = visualize(&observations, &forecasts);
    crate::dataset::Dataset {
        observations,
        profiles,
        centroids,
        summary,
        forecasts,
        visualization,
        artifacts: SidecarArtifacts::empty(),
    }
}

#[test]
fn test_no_filters_returns_everything() {
    let t = sample();
    let rows = filter_observations(&t, &ObservationFilter::default());
    assert_eq!(rows.len(), 5);
}

#[test]
fn test_filters_compose_conjunctively() {
    let t = sample();
    let rows = filter_observations(
        &t,
        &ObservationFilter {
            year: Some(2023),
            cluster: Some(1),
            region: None,
        },
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kabupaten_kota, "Kota Bandung");
    assert_eq!(rows[0].year, 2023);
}

#[test]
fn test_region_filter_is_exact_match() {
    let t = sample();
    let rows = filter_observations(
        &t,
        &ObservationFilter {
            region: Some("Jawa".to_string()),
            ..Default::default()
        },
    );
    assert!(rows.is_empty());
}

#[test]
fn test_cluster_detail_with_profile_and_rows() {
    let dataset = sample_dataset();
    let detail = cluster_detail(&dataset, 0);
    assert!(detail.profile.is_some());
    assert!(detail.centroid.is_some());
    assert_eq!(detail.rows.len(), 1);
}

#[test]
fn test_cluster_detail_missing_centroid_is_none_not_error() {
    let dataset = sample_dataset();
    let detail = cluster_detail(&dataset, 1);
    assert!(detail.profile.is_some());
    assert!(detail.centroid.is_none());
    assert_eq!(detail.rows.len(), 2);
}

#[test]
fn test_cluster_detail_unknown_id_is_all_empty() {
    let dataset = sample_dataset();
    let detail = cluster_detail(&dataset, 42);
    assert!(detail.profile.is_none());
    assert!(detail.centroid.is_none());
    assert!(detail.rows.is_empty());
}

#[test]
fn test_forecast_name_match_is_case_insensitive_substring() {
    let dataset = sample_dataset();
    let hits = filter_forecasts(&dataset.forecasts, None, Some("BANDUNG"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kabupaten_kota, "Kota Bandung");
}

#[test]
fn test_forecast_filters_compose() {
    let dataset = sample_dataset();
    // Kota Bandung's latest cluster is 1, so cluster=2 excludes it
    let hits = filter_forecasts(&dataset.forecasts, Some(2), Some("kota"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kabupaten_kota, "Kota Surabaya");
}

#[test]
fn test_distinct_regions_sorted_and_deduped() {
    let t = sample();
    assert_eq!(
        distinct_regions(&t),
        Some(vec!["Jawa Barat".to_string(), "Jawa Timur".to_string()])
    );
}

#[test]
fn test_regions_unavailable_without_region_column() {
    let t = table_without_region(vec![obs("Kota Bandung", 2023, None, 1.0, 2.0, 0)]);
    assert_eq!(distinct_regions(&t), None);
    assert!(region_stats(&t).is_none());
}

#[test]
fn test_region_stats_counts_and_means() {
    let stats = region_stats(&sample()).unwrap();
    assert_eq!(stats.len(), 2);
    let barat = &stats[0];
    assert_eq!(barat.region, "Jawa Barat");
    assert_eq!(barat.count, 3);
    assert_eq!(barat.avg_buah, (100.0 + 110.0 + 40.0) / 3.0);
    assert_eq!(barat.avg_sayur, (200.0 + 220.0 + 80.0) / 3.0);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let t = sample();
    let hits = search_entities(&t, "garut");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kabupaten_kota, "Kab. Garut");
    assert_eq!(search_entities(&t, "kota").len(), 4);
    assert!(search_entities(&t, "medan").is_empty());
}
