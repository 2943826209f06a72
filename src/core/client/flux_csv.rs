//! Decoding of the annotated-CSV stream returned by the InfluxDB v2 query API.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::core::client::flux_record::FluxRecord;

/// Column positions resolved from a table's header row.
struct ColumnMap {
    time: Option<usize>,
    value: Option<usize>,
    field: Option<usize>,
    tag_id: Option<usize>,
    error: Option<usize>,
}

impl ColumnMap {
    fn from_header(fields: &[String]) -> Self {
        let position = |name: &str| fields.iter().position(|f| f == name);
        Self {
            time: position("_time"),
            value: position("_value"),
            field: position("_field"),
            tag_id: position("TAGID"),
            error: position("error"),
        }
    }
}

/// Decode a full annotated-CSV response body into records.
///
/// Annotation lines (`#…`) are skipped, a blank line ends the current table,
/// and the first non-annotation line of each table is its header. Rows of a
/// table whose header carries an `error` column abort decoding with the
/// message InfluxDB put there.
pub fn decode_flux_csv(body: &str) -> Result<Vec<FluxRecord>> {
    let mut records = Vec::new();
    let mut columns: Option<ColumnMap> = None;

    for raw_line in body.lines() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            // Table boundary; the next table starts with a fresh header.
            columns = None;
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let fields = split_record(line);
        match &columns {
            None => columns = Some(ColumnMap::from_header(&fields)),
            Some(map) => {
                if let Some(error_idx) = map.error {
                    let message = fields
                        .get(error_idx)
                        .map(String::as_str)
                        .unwrap_or("unknown error");
                    bail!("InfluxDB reported a query error: {message}");
                }
                if let Some(record) = decode_row(map, &fields)? {
                    records.push(record);
                }
            }
        }
    }

    Ok(records)
}

fn decode_row(map: &ColumnMap, fields: &[String]) -> Result<Option<FluxRecord>> {
    // Tables without a _time column (or rows without a value in it) carry no
    // series data for us.
    let Some(time_idx) = map.time else {
        return Ok(None);
    };
    let Some(raw_time) = fields.get(time_idx).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let time: DateTime<Utc> = DateTime::parse_from_rfc3339(raw_time)
        .map_err(|e| anyhow::anyhow!("Invalid _time value {raw_time:?} in query result: {e}"))?
        .with_timezone(&Utc);

    let text_at = |idx: Option<usize>| {
        idx.and_then(|i| fields.get(i))
            .filter(|s| !s.is_empty())
            .cloned()
    };

    Ok(Some(FluxRecord {
        time,
        tag_id: text_at(map.tag_id),
        field: text_at(map.field),
        value: text_at(map.value).and_then(|v| v.parse().ok()),
    }))
}

/// Split a single CSV record, honoring RFC-4180 quoting (quoted commas and
/// doubled quotes).
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
