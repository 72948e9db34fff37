use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{routes::climate::ErrorBody, ApiError, AppState, DateKey, DateRange, TemperatureStats};

// Path segments are compared to stored dates as text without any format check,
// so a malformed date yields an empty aggregate ([null, null, null]) rather than a 400.

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "First date to include, yyyy-mm-dd"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] temperature from start onwards, all null when nothing matched", content_type = "application/json", body = Vec<Option<f64>>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperatures", body = ErrorBody)
    ))]
pub async fn temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, ApiError> {
    temperature_stats(&state, DateKey::new(start), None).await
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "First date to include, yyyy-mm-dd"),
         ("end" = String, Path, description = "Last date to include, yyyy-mm-dd"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] temperature between start and end inclusive, all null when nothing matched", content_type = "application/json", body = Vec<Option<f64>>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperatures", body = ErrorBody)
    ))]
pub async fn temperature_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, ApiError> {
    temperature_stats(&state, DateKey::new(start), Some(DateKey::new(end))).await
}

async fn temperature_stats(
    state: &AppState,
    start: DateKey,
    end: Option<DateKey>,
) -> Result<Json<TemperatureStats>, ApiError> {
    let range = DateRange { start, end };
    Ok(Json(state.climate_db.temperature_stats(&range).await?))
}
