// src/domain/series/service/mod.rs
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::api::dto::series_dto::{SpecSeriesQuery, TestSeriesQuery};
use crate::api::dto::{InfluxIdentity, ServiceInfo};
use crate::config::InfluxSettings;
use crate::core::client::influx_client::InfluxClient;
use crate::core::client::query_executor_trait::FluxQueryExecutor;
use crate::domain::series::flux_query::{build_flat_query, build_pivot_query};
use crate::domain::series::model::{FlatRow, PivotRow};
use crate::domain::series::reshape::{reshape_flat, reshape_pivot};

pub struct SeriesService {
    executor: Arc<InfluxClient>,
    settings: InfluxSettings,
}

impl SeriesService {
    pub fn new(executor: Arc<InfluxClient>, settings: InfluxSettings) -> Self {
        Self { executor, settings }
    }

    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            message: "SPC gateway is running".to_string(),
            influx: InfluxIdentity {
                url: self.settings.url.clone(),
                org: self.settings.org.clone(),
            },
        }
    }

    pub async fn get_test_series(&self, q: TestSeriesQuery) -> Result<(Vec<FlatRow>, String)> {
        get_test_series_with_executor(self.executor.as_ref(), &self.settings, q).await
    }

    pub async fn get_spec_series(
        &self,
        tag: String,
        q: SpecSeriesQuery,
    ) -> Result<(Vec<PivotRow>, String)> {
        get_spec_series_with_executor(self.executor.as_ref(), &self.settings, tag, q).await
    }
}

async fn get_test_series_with_executor<E: FluxQueryExecutor>(
    executor: &E,
    settings: &InfluxSettings,
    q: TestSeriesQuery,
) -> Result<(Vec<FlatRow>, String)> {
    let bucket = q.bucket.unwrap_or_else(|| settings.bucket_test.clone());
    let flux = build_flat_query(&bucket, &q.measurement, &q.tag, &q.window);
    debug!(%bucket, query = %flux, "Running flat series query");

    let records = executor.query(&flux).await?;
    Ok((reshape_flat(records), bucket))
}

async fn get_spec_series_with_executor<E: FluxQueryExecutor>(
    executor: &E,
    settings: &InfluxSettings,
    tag: String,
    q: SpecSeriesQuery,
) -> Result<(Vec<PivotRow>, String)> {
    let bucket = q.bucket.unwrap_or_else(|| settings.bucket_spec.clone());
    let flux = build_pivot_query(&bucket, &q.measurement, &tag, &q.window);
    debug!(%bucket, query = %flux, "Running spec series query");

    let records = executor.query(&flux).await?;
    Ok((reshape_pivot(records), bucket))
}
