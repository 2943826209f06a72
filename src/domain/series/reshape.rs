//! Reshaping of raw Flux records into the row shapes the dashboards consume.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::core::client::flux_record::FluxRecord;
use crate::domain::series::model::{FlatRow, PivotRow};

/// Round to 3 decimal places, matching the precision the dashboards display.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One output row per input record, in input order. Duplicates pass through
/// untouched.
pub fn reshape_flat(records: Vec<FluxRecord>) -> Vec<FlatRow> {
    records
        .into_iter()
        .map(|record| FlatRow {
            time: record.time,
            tag_id: record.tag_id,
            value: record.value.map(round3),
        })
        .collect()
}

/// Join the `VALUE`/`LSL`/`USL`/`LCL`/`UCL` fields into one row per
/// timestamp, ordered by first appearance. Unrecognized field names are
/// ignored; a duplicate field/timestamp pair is last-write-wins.
pub fn reshape_pivot(records: Vec<FluxRecord>) -> Vec<PivotRow> {
    let mut rows: Vec<PivotRow> = Vec::new();
    let mut index: HashMap<DateTime<Utc>, usize> = HashMap::new();

    for record in records {
        let row_idx = *index.entry(record.time).or_insert_with(|| {
            rows.push(PivotRow::empty(record.time));
            rows.len() - 1
        });

        let rounded = record.value.map(round3);
        let row = &mut rows[row_idx];
        match record.field.as_deref() {
            Some("VALUE") => row.value = rounded,
            Some("LSL") => row.lsl = rounded,
            Some("USL") => row.usl = rounded,
            Some("LCL") => row.lcl = rounded,
            Some("UCL") => row.ucl = rounded,
            _ => {}
        }
    }

    rows
}
