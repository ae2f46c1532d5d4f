use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::health;
use super::pages;
use super::predict;
use super::state::AppState;

/// Create the application router with its state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::form_page))
        .route("/predict", post(predict::predict))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
