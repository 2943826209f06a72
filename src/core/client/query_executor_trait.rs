use anyhow::Result;
use async_trait::async_trait;

use crate::core::client::flux_record::FluxRecord;

/// Seam between the service layer and the InfluxDB backend, so tests can
/// substitute a canned executor.
#[async_trait]
pub trait FluxQueryExecutor: Send + Sync {
    async fn query(&self, flux: &str) -> Result<Vec<FluxRecord>>;
}
