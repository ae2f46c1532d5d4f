//! Health check endpoints

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check - reports degraded while the artifacts are not loaded.
/// The service still accepts requests; `/predict` answers with its fixed
/// system-error text in that state.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let artifacts_check = if state.artifacts.is_some() {
        HealthCheck {
            name: "artifacts".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        }
    } else {
        HealthCheck {
            name: "artifacts".to_string(),
            status: HealthStatus::Degraded,
            message: Some("model or encoder not loaded".to_string()),
        }
    };

    let response = HealthResponse {
        status: artifacts_check.status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![artifacts_check]),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
