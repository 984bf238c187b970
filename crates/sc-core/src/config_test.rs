use super::*;

#[test]
fn test_data_paths_layout() {
    let paths = DataPaths::new("/srv/data");
    assert_eq!(
        paths.assignments_path(),
        PathBuf::from("/srv/data/result/clustering_results.csv")
    );
    assert_eq!(
        paths.profiles_path(),
        PathBuf::from("/srv/data/result/cluster_profiles.csv")
    );
    assert_eq!(
        paths.centroids_path(),
        PathBuf::from("/srv/data/result/cluster_centroids.csv")
    );
    assert_eq!(paths.exports_dir(), PathBuf::from("/srv/data/api_exports"));
}

#[test]
fn test_default_labels() {
    let labels = ClusterLabels::default();
    assert_eq!(labels.get(0), Some("Low Expenditure"));
    assert_eq!(labels.get(1), Some("Balanced Expenditure"));
    assert_eq!(labels.get(2), Some("High Expenditure"));
    assert_eq!(labels.get(3), None);
    assert_eq!(labels.get(-1), None);
}

#[test]
fn test_custom_labels() {
    let labels = ClusterLabels::new(BTreeMap::from([(7, "Outlier".to_string())]));
    assert_eq!(labels.get(7), Some("Outlier"));
    assert_eq!(labels.get(0), None);
}
