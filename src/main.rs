use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::post,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
};

use crate::app::env::Envy;

mod app;
mod predictions;

const MAX_UPLOAD_SIZE_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub envy: Arc<Envy>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let public_dir = state
        .envy
        .public_dir
        .to_owned()
        .unwrap_or("public".to_string());

    Router::new()
        .route("/predict", post(predictions::controller::predict))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_SIZE_BYTES))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let state = AppState {
        http_client: reqwest::Client::new(),
        envy: Arc::new(envy),
    };

    println!(
        "forwarding /predict requests to {}",
        predictions::service::predict_url(&state.envy)
    );

    // app
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
