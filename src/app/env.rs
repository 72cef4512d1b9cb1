use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub prediction_service_url: String,
    pub prediction_timeout_secs: Option<u64>,

    pub public_dir: Option<String>,
}
