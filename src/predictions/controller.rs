use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::Value;

use crate::{app::models::api_error::ApiError, AppState};

use super::service;

pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    match service::request_prediction(multipart, &state).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => Err(e),
    }
}
