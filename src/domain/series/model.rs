use chrono::{DateTime, Utc};
use serde::Serialize;

/// One averaged reading, keyed by window timestamp and tag id.
/// Serialized field names follow the Influx record layout the dashboards
/// already consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRow {
    #[serde(rename = "_time")]
    pub time: DateTime<Utc>,
    #[serde(rename = "TAGID")]
    pub tag_id: Option<String>,
    #[serde(rename = "_value")]
    pub value: Option<f64>,
}

/// One averaged process value joined with its control-limit fields for a
/// single window timestamp. A limit never reported in the window stays null;
/// null means "unavailable", not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    #[serde(rename = "_time")]
    pub time: DateTime<Utc>,
    #[serde(rename = "_value")]
    pub value: Option<f64>,
    pub lsl: Option<f64>,
    pub usl: Option<f64>,
    pub lcl: Option<f64>,
    pub ucl: Option<f64>,
}

impl PivotRow {
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self {
            time,
            value: None,
            lsl: None,
            usl: None,
            lcl: None,
            ucl: None,
        }
    }
}
