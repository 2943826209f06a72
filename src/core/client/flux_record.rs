use chrono::{DateTime, Utc};

/// One time-stamped scalar decoded from a Flux result table.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxRecord {
    pub time: DateTime<Utc>,
    pub tag_id: Option<String>,
    pub field: Option<String>,
    pub value: Option<f64>,
}
