//! Series API DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn default_test_window() -> String {
    "1d".to_string()
}

fn default_test_measurement() -> String {
    "TESTSPC".to_string()
}

fn default_spec_window() -> String {
    "4h".to_string()
}

fn default_spec_measurement() -> String {
    "TESTSPECSPC".to_string()
}

/// Query parameters for `/gettest`. `tag` may repeat: `?tag=A&tag=B`.
#[derive(Deserialize, Debug, Validate)]
pub struct TestSeriesQuery {
    #[serde(default)]
    pub tag: Vec<String>,
    pub bucket: Option<String>,
    #[serde(default = "default_test_window")]
    #[validate(custom(function = validate_window))]
    pub window: String,
    #[serde(default = "default_test_measurement")]
    pub measurement: String,
}

/// Query parameters for `/getspectest` (single tag).
#[derive(Deserialize, Debug, Validate)]
pub struct SpecSeriesQuery {
    pub tag: Option<String>,
    pub bucket: Option<String>,
    #[serde(default = "default_spec_window")]
    #[validate(custom(function = validate_window))]
    pub window: String,
    #[serde(default = "default_spec_measurement")]
    pub measurement: String,
}

/// Reject anything that is not a Flux duration literal before it reaches
/// query construction.
fn validate_window(window: &str) -> Result<(), ValidationError> {
    if is_flux_duration(window) {
        Ok(())
    } else {
        let mut error = ValidationError::new("window");
        error.message = Some("window must be a duration like 1d, 4h or 90m".into());
        Err(error)
    }
}

fn is_flux_duration(input: &str) -> bool {
    // Longest units first so "mo"/"ms" win over "m".
    const UNITS: [&str; 10] = ["mo", "ms", "ns", "us", "s", "m", "h", "d", "w", "y"];

    if input.is_empty() {
        return false;
    }
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return false;
        }
        rest = &rest[digits..];
        match UNITS.iter().find(|unit| rest.starts_with(**unit)) {
            Some(unit) => rest = &rest[unit.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_defaults() {
        let q: TestSeriesQuery = serde_json::from_value(json!({ "tag": ["A"] })).unwrap();
        assert_eq!(q.tag, vec!["A".to_string()]);
        assert_eq!(q.bucket, None);
        assert_eq!(q.window, "1d");
        assert_eq!(q.measurement, "TESTSPC");
    }

    #[test]
    fn spec_query_defaults() {
        let q: SpecSeriesQuery = serde_json::from_value(json!({ "tag": "X" })).unwrap();
        assert_eq!(q.window, "4h");
        assert_eq!(q.measurement, "TESTSPECSPC");
    }

    #[test]
    fn missing_tag_deserializes_to_empty() {
        let q: TestSeriesQuery = serde_json::from_value(json!({})).unwrap();
        assert!(q.tag.is_empty());
        let q: SpecSeriesQuery = serde_json::from_value(json!({})).unwrap();
        assert!(q.tag.is_none());
    }

    #[test]
    fn window_validator_accepts_flux_durations() {
        for window in ["1d", "4h", "90m", "1h30m", "500ms", "2w", "1mo", "1y"] {
            assert!(is_flux_duration(window), "{window} should be accepted");
        }
    }

    #[test]
    fn window_validator_rejects_malformed_input() {
        for window in ["", "5", "abc", "1x", "h", "1h30", "1h x"] {
            assert!(!is_flux_duration(window), "{window} should be rejected");
        }
    }

    #[test]
    fn malformed_window_fails_validation() {
        let q: TestSeriesQuery =
            serde_json::from_value(json!({ "tag": ["A"], "window": "soon" })).unwrap();
        assert!(q.validate().is_err());
    }
}
