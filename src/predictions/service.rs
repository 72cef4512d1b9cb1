use std::time::Duration;

use axum::extract::Multipart;
use reqwest::{
    multipart::{Form, Part},
    Response, StatusCode,
};
use serde_json::Value;

use crate::{
    app::{
        env::Envy,
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::multipart::{
            models::file_properties::FileProperties, multipart::get_files_properties,
        },
    },
    AppState,
};

use super::{
    errors::PredictionsApiError, structs::prediction_error_response::PredictionErrorResponse,
};

// Field name the inference service expects the scan under.
pub const OCT_SCAN_FIELD: &str = "oct_scan";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn predict_url(envy: &Envy) -> String {
    [envy.prediction_service_url.as_str(), "/predict"].concat()
}

pub async fn request_prediction(
    multipart: Multipart,
    state: &AppState,
) -> Result<Value, ApiError> {
    let files_properties = get_files_properties(multipart).await;

    let Some(scan) = files_properties
        .into_iter()
        .find(|properties| properties.field_name == OCT_SCAN_FIELD)
    else {
        return Err(PredictionsApiError::NoScanUploaded.value());
    };

    forward_scan(scan, state).await
}

async fn forward_scan(scan: FileProperties, state: &AppState) -> Result<Value, ApiError> {
    let part_result = Part::bytes(scan.data.to_vec())
        .file_name(scan.file_name)
        .mime_str(&scan.mime_type);

    let part = match part_result {
        Ok(part) => part,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let form = Form::new().part(OCT_SCAN_FIELD, part);

    let timeout_secs = state
        .envy
        .prediction_timeout_secs
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let result = state
        .http_client
        .post(predict_url(&state.envy))
        .multipart(form)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await;

    match result {
        Ok(res) => parse_prediction_response(res).await,
        Err(e) => {
            tracing::error!(%e);
            Err(classify_send_error(&e).value())
        }
    }
}

fn classify_send_error(e: &reqwest::Error) -> PredictionsApiError {
    if e.is_timeout() {
        return PredictionsApiError::ServiceTimeout;
    }

    if e.is_connect() {
        return PredictionsApiError::ServiceUnreachable;
    }

    PredictionsApiError::UnknownError
}

async fn parse_prediction_response(res: Response) -> Result<Value, ApiError> {
    let status = res.status();

    if status == StatusCode::METHOD_NOT_ALLOWED {
        return Err(PredictionsApiError::MisconfiguredService.value());
    }

    match res.text().await {
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                if status.is_success() {
                    return Ok(value);
                }

                // Pass the error from the inference service to the caller.
                match serde_json::from_str::<PredictionErrorResponse>(&text) {
                    Ok(error_response) => Err(ApiError {
                        code: StatusCode::INTERNAL_SERVER_ERROR,
                        message: error_response.error,
                    }),
                    Err(_) => {
                        tracing::error!(%text);
                        Err(PredictionsApiError::UnknownError.value())
                    }
                }
            }
            Err(_) => {
                tracing::error!(%text);
                Err(PredictionsApiError::UnknownError.value())
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(PredictionsApiError::UnknownError.value())
        }
    }
}
