use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PredictionErrorResponse {
    pub error: String,
}
