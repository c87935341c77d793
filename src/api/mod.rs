use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::client::SearchApi;
use crate::config::SearchConfig;

pub mod handlers;
pub mod models;

/// Shared by every request. Holds no UI state: each request builds its own
/// widget and regions.
pub struct AppState {
    pub api: Arc<dyn SearchApi>,
    pub config: SearchConfig,
}

impl AppState {
    pub fn new(api: Arc<dyn SearchApi>, config: SearchConfig) -> AppState {
        AppState { api, config }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    create_router_with_assets(state, "static")
}

pub fn create_router_with_assets(state: Arc<AppState>, assets_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::page_handler))
        .with_state(state)
        .nest_service("/static", ServeDir::new(assets_dir))
        .layer(cors)
}
