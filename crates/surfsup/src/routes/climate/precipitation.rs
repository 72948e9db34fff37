use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{resolve_window, routes::climate::ErrorBody, ApiError, AppState, DateKey, Precipitation};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Every station's rainfall for the most recent year of data", content_type = "application/json", body = Vec<Precipitation>),
        (status = INTERNAL_SERVER_ERROR, description = "Store empty, unreadable or holding a malformed date", body = ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Precipitation>>, ApiError> {
    let window = DateKey::from(resolve_window(state.climate_db.as_ref()).await?);
    let records = state.climate_db.precipitation_since(&window).await?;
    Ok(Json(records))
}
