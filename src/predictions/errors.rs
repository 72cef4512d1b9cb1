use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PredictionsApiError {
    NoScanUploaded,
    ServiceUnreachable,
    ServiceTimeout,
    MisconfiguredService,
    UnknownError,
}

impl PredictionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NoScanUploaded => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "No OCT scan file uploaded.".to_string(),
            },
            Self::ServiceUnreachable => ApiError {
                code: StatusCode::SERVICE_UNAVAILABLE,
                message: "Failed to connect to the prediction service. Please ensure the service is running and the URL is correct.".to_string(),
            },
            Self::ServiceTimeout => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The prediction service took too long to respond.".to_string(),
            },
            Self::MisconfiguredService => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Method not allowed by the prediction service. Check the configured prediction service URL.".to_string(),
            },
            Self::UnknownError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Unknown error during prediction process.".to_string(),
            },
        }
    }
}
