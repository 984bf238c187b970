//! Shared fixture builders for unit tests

use crate::observation::{Observation, ObservationTable};

pub(crate) fn obs(
    name: &str,
    year: i64,
    region: Option<&str>,
    buah: f64,
    sayur: f64,
    cluster: i64,
) -> Observation {
    Observation {
        kabupaten_kota: name.to_string(),
        year,
        region: region.map(str::to_string),
        pengeluaran_buah: buah,
        pengeluaran_sayur: sayur,
        cluster,
        cluster_label: None,
    }
}

pub(crate) fn table(rows: Vec<Observation>) -> ObservationTable {
    ObservationTable {
        rows,
        has_region: true,
    }
}

pub(crate) fn table_without_region(rows: Vec<Observation>) -> ObservationTable {
    ObservationTable {
        rows,
        has_region: false,
    }
}
