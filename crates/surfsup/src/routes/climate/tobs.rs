use axum::{extract::State, Json};
use log::debug;
use std::sync::Arc;

use crate::{
    resolve_window, routes::climate::ErrorBody, ApiError, AppState, DateKey,
    TemperatureObservation,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station for the most recent year of data", content_type = "application/json", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Store empty, unreadable or holding a malformed date", body = ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    let window = DateKey::from(resolve_window(state.climate_db.as_ref()).await?);
    debug!("temperature observations for {} since {}", state.station, window);
    let records = state
        .climate_db
        .temperatures_since(&state.station, &window)
        .await?;
    Ok(Json(records))
}
