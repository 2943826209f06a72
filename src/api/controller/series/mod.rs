//! Series controller: connects routes to the Influx series usecases.

use axum::extract::{Query, State};
use axum::Json;
use axum_extra::extract::Query as MultiQuery;
use validator::Validate;

use crate::api::dto::series_dto::{SpecSeriesQuery, TestSeriesQuery};
use crate::api::dto::{SeriesEnvelope, ServiceInfo};
use crate::api::util::backend::require_query_result;
use crate::app_state::AppState;
use crate::domain::series::model::{FlatRow, PivotRow};
use crate::errors::AppError;

pub struct SeriesController;

impl SeriesController {
    pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
        Json(state.series_service.service_info())
    }

    pub async fn get_test_series(
        State(state): State<AppState>,
        MultiQuery(q): MultiQuery<TestSeriesQuery>,
    ) -> Result<Json<SeriesEnvelope<FlatRow>>, AppError> {
        if q.tag.is_empty() {
            return Err(AppError::MissingParameter(
                "at least one tag must be provided".to_string(),
            ));
        }
        q.validate()
            .map_err(|e| AppError::InvalidParameter(e.to_string()))?;

        let (rows, bucket) = require_query_result(state.series_service.get_test_series(q).await)?;
        Ok(Json(SeriesEnvelope::ok(rows, bucket)))
    }

    pub async fn get_spec_series(
        State(state): State<AppState>,
        Query(q): Query<SpecSeriesQuery>,
    ) -> Result<Json<SeriesEnvelope<PivotRow>>, AppError> {
        let Some(tag) = q.tag.clone().filter(|tag| !tag.is_empty()) else {
            return Err(AppError::MissingParameter(
                "tag must be provided".to_string(),
            ));
        };
        q.validate()
            .map_err(|e| AppError::InvalidParameter(e.to_string()))?;

        let (rows, bucket) =
            require_query_result(state.series_service.get_spec_series(tag, q).await)?;
        Ok(Json(SeriesEnvelope::ok(rows, bucket)))
    }
}
