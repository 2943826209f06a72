//! Controller helpers: backend result mapping.

use anyhow::Result;

use crate::errors::{backend_error, AppError};

/// Map a backend query result into the API error space, logging the full
/// failure before the sanitized message goes to the caller.
pub fn require_query_result<T>(result: Result<T>) -> Result<T, AppError> {
    result.map_err(|err| {
        tracing::error!(error = ?err, "InfluxDB query failed");
        backend_error(err)
    })
}
