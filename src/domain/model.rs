use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the raw dataset, exactly as the CSV export names its columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Resource Name")]
    pub resource_name: String,
    #[serde(rename = "National Register Number")]
    pub register_number: String,
    #[serde(rename = "National Register Date")]
    pub register_date: String,
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// A normalized historical-site record. `name` is the dedup key: after load
/// no two records in a store share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub name: String,
    pub register_number: String,
    pub register_date: NaiveDate,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Render-ready bar-chart descriptor consumed by a drawing collaborator.
/// Labels and values are parallel and keep the mapping order they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    pub edge_color: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub label_font_size: f32,
}
