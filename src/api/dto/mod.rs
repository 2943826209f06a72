//! API DTOs shared by the series endpoints.

pub mod series_dto;

use serde::Serialize;

/// Success envelope returned by both series endpoints.
#[derive(Debug, Serialize)]
pub struct SeriesEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    /// The bucket that was actually queried, after defaulting.
    pub bucket: String,
}

impl<T> SeriesEnvelope<T> {
    pub fn ok(data: Vec<T>, bucket: String) -> Self {
        Self {
            success: true,
            data,
            bucket,
        }
    }
}

/// Static identity payload for the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub influx: InfluxIdentity,
}

#[derive(Debug, Serialize)]
pub struct InfluxIdentity {
    pub url: String,
    pub org: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_success_flag() {
        let envelope = SeriesEnvelope::ok(vec![1, 2], "testspc".to_string());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["bucket"], "testspc");
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
