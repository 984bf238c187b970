//! Per-entity linear trend forecasts
//!
//! Each kabupaten/kota with at least two observations gets an independent
//! ordinary-least-squares fit per expenditure measure, evaluated at
//! [`FORECAST_TARGET_YEAR`]. Closed-form fit, so repeated runs over the
//! same rows are bit-for-bit reproducible.

use crate::config::FORECAST_TARGET_YEAR;
use crate::observation::{Observation, ObservationTable};
use serde::Serialize;
use std::collections::HashMap;

/// One forecast row per entity. Field names carry the target and latest
/// year because the wire format does.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    #[serde(rename = "Kabupaten_Kota")]
    pub kabupaten_kota: String,
    /// "Unknown" when the entity has no region value
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    #[serde(rename = "Cluster_Label")]
    pub cluster_label: Option<String>,
    #[serde(rename = "Predicted_Buah_2025")]
    pub predicted_buah: f64,
    #[serde(rename = "Predicted_Sayur_2025")]
    pub predicted_sayur: f64,
    #[serde(rename = "Predicted_Total_2025")]
    pub predicted_total: f64,
    #[serde(rename = "Current_Buah_2024")]
    pub current_buah: f64,
    #[serde(rename = "Current_Sayur_2024")]
    pub current_sayur: f64,
    #[serde(rename = "Growth_Rate_Buah")]
    pub growth_rate_buah: f64,
    #[serde(rename = "Growth_Rate_Sayur")]
    pub growth_rate_sayur: f64,
}

/// Build the forecast table. Entities appear in first-occurrence order of
/// the source table; entities with fewer than two rows are skipped, so
/// this is a strict subset of the entity set.
pub fn build_forecasts(table: &ObservationTable) -> Vec<Forecast> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_entity: HashMap<&str, Vec<&Observation>> = HashMap::new();
    for row in &table.rows {
        by_entity
            .entry(row.kabupaten_kota.as_str())
            .or_insert_with(|| {
                order.push(row.kabupaten_kota.as_str());
                Vec::new()
            })
            .push(row);
    }

    let mut forecasts = Vec::new();
    for name in order {
        let mut rows = by_entity.remove(name).unwrap_or_default();
        if rows.len() < 2 {
            continue;
        }
        // Stable sort: the last row is the latest year, last occurrence
        // winning among duplicate years
        rows.sort_by_key(|r| r.year);

        let years: Vec<f64> = rows.iter().map(|r| r.year as f64).collect();
        let buah: Vec<f64> = rows.iter().map(|r| r.pengeluaran_buah).collect();
        let sayur: Vec<f64> = rows.iter().map(|r| r.pengeluaran_sayur).collect();

        let target = FORECAST_TARGET_YEAR as f64;
        let predicted_buah = linear_fit(&years, &buah).predict(target);
        let predicted_sayur = linear_fit(&years, &sayur).predict(target);

        let latest = rows[rows.len() - 1];
        forecasts.push(Forecast {
            kabupaten_kota: name.to_string(),
            region: latest.region.clone().unwrap_or_else(|| "Unknown".to_string()),
            cluster: latest.cluster,
            cluster_label: latest.cluster_label.clone(),
            predicted_buah,
            predicted_sayur,
            predicted_total: predicted_buah + predicted_sayur,
            current_buah: latest.pengeluaran_buah,
            current_sayur: latest.pengeluaran_sayur,
            growth_rate_buah: growth_rate(predicted_buah, latest.pengeluaran_buah),
            growth_rate_sayur: growth_rate(predicted_sayur, latest.pengeluaran_sayur),
        });
    }

    log::info!(
        "Built {} forecasts for target year {}",
        forecasts.len(),
        FORECAST_TARGET_YEAR
    );
    forecasts
}

/// Percentage change from the latest actual to the forecast. Exactly 0
/// when the latest actual is not positive, never a division by zero.
fn growth_rate(forecast: f64, latest: f64) -> f64 {
    if latest > 0.0 {
        (forecast / latest - 1.0) * 100.0
    } else {
        0.0
    }
}

struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form ordinary least squares of y on x. A degenerate x spread
/// (all observations in one year) fits a flat line through the mean, the
/// least-norm solution.
fn linear_fit(xs: &[f64], ys: &[f64]) -> LinearFit {
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        sxy += (x - x_mean) * (y - y_mean);
        sxx += (x - x_mean) * (x - x_mean);
    }

    if sxx == 0.0 {
        return LinearFit {
            slope: 0.0,
            intercept: y_mean,
        };
    }
    let slope = sxy / sxx;
    LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    }
}

#[cfg(test)]
#[path = "forecast_test.rs"]
mod forecast_test;
