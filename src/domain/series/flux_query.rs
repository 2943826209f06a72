//! Flux source construction for the series endpoints.

/// Backslash-escape double quotes so a value can sit inside a Flux string
/// literal without terminating it.
pub fn escape_double_quotes(input: &str) -> String {
    input.replace('"', "\\\"")
}

/// Query averaging one series per tag id over `window`-sized buckets.
/// `tag_ids` must not be empty; the caller rejects empty input at the HTTP
/// boundary.
pub fn build_flat_query(
    bucket: &str,
    measurement: &str,
    tag_ids: &[String],
    window: &str,
) -> String {
    let conditions = tag_ids
        .iter()
        .map(|tag_id| tag_predicate(tag_id))
        .collect::<Vec<_>>()
        .join(" or ");

    render_query(bucket, measurement, &conditions, window)
}

/// Query averaging the process value and its control-limit fields for a
/// single tag id.
pub fn build_pivot_query(bucket: &str, measurement: &str, tag_id: &str, window: &str) -> String {
    render_query(bucket, measurement, &tag_predicate(tag_id), window)
}

fn tag_predicate(tag_id: &str) -> String {
    format!("r[\"TAGID\"] == \"{}\"", escape_double_quotes(tag_id))
}

fn render_query(bucket: &str, measurement: &str, conditions: &str, window: &str) -> String {
    format!(
        "from(bucket: \"{bucket}\")\n  \
         |> range(start: -5y, stop: now())\n  \
         |> filter(fn: (r) => r[\"_measurement\"] == \"{measurement}\")\n  \
         |> filter(fn: (r) => {conditions})\n  \
         |> aggregateWindow(every: {window}, fn: mean, createEmpty: false)",
        bucket = escape_double_quotes(bucket),
        measurement = escape_double_quotes(measurement),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tag_produces_single_predicate() {
        let flux = build_flat_query("testspc", "TESTSPC", &["A".to_string()], "1d");
        assert!(flux.contains("from(bucket: \"testspc\")"));
        assert!(flux.contains("range(start: -5y, stop: now())"));
        assert!(flux.contains("r[\"_measurement\"] == \"TESTSPC\""));
        assert!(flux.contains("(r) => r[\"TAGID\"] == \"A\")"));
        assert!(!flux.contains(" or "));
        assert!(flux.contains("aggregateWindow(every: 1d, fn: mean, createEmpty: false)"));
    }

    #[test]
    fn multiple_tags_join_with_or_in_caller_order() {
        let tags = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let flux = build_flat_query("testspc", "TESTSPC", &tags, "6h");
        assert!(flux.contains(
            "r[\"TAGID\"] == \"A\" or r[\"TAGID\"] == \"B\" or r[\"TAGID\"] == \"C\""
        ));
    }

    #[test]
    fn one_predicate_per_tag() {
        let tags: Vec<String> = (0..5).map(|i| format!("TAG-{i}")).collect();
        let flux = build_flat_query("testspc", "TESTSPC", &tags, "1d");
        assert_eq!(flux.matches("r[\"TAGID\"] ==").count(), 5);
        assert_eq!(flux.matches(" or ").count(), 4);
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let flux = build_pivot_query("bu\"cket", "MEAS\"URE", "TAG\"1", "4h");
        // Every double quote from the inputs must come out escaped.
        assert!(flux.contains("bu\\\"cket"));
        assert!(flux.contains("MEAS\\\"URE"));
        assert!(flux.contains("TAG\\\"1"));
        assert!(!escape_double_quotes("a\"b\"c").replace("\\\"", "").contains('"'));
    }

    #[test]
    fn pivot_query_uses_single_equality() {
        let flux = build_pivot_query("testspecspc", "TESTSPECSPC", "X", "4h");
        assert!(flux.contains("(r) => r[\"TAGID\"] == \"X\")"));
        assert!(flux.contains("every: 4h"));
    }
}
