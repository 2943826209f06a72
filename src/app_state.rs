use std::sync::Arc;

use anyhow::Result;

use crate::config::InfluxSettings;
use crate::core::client::influx_client::InfluxClient;
use crate::domain::series::service::SeriesService;

#[derive(Clone)]
pub struct AppState {
    pub series_service: Arc<SeriesService>,
}

pub fn build_app_state(settings: InfluxSettings) -> Result<AppState> {
    let client = Arc::new(InfluxClient::new(&settings)?);
    Ok(AppState {
        series_service: Arc::new(SeriesService::new(client, settings)),
    })
}
