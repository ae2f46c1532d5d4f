//! The prediction endpoint.
//!
//! Every failure here is rendered as human-readable text to the one
//! requester; nothing is fatal and no structured error ever leaves this
//! route.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::domain::{PredictError, TransactionForm};
use crate::infrastructure::artifacts::LoadedArtifacts;

use super::pages;
use super::state::AppState;

/// Fixed response when startup loading left the handles unset.
pub const SYSTEM_ERROR_TEXT: &str =
    "System Error: Model or Encoder is not loaded. Please check terminal logs.";

pub const FRAUD_TEXT: &str = "Fraud Transaction ❌";
pub const SAFE_TEXT: &str = "Safe Transaction ✅";

/// `POST /predict` - encode, assemble, infer, render a verdict.
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some(artifacts) = state.artifacts.as_deref() else {
        warn!("prediction refused: artifacts were never loaded");
        return SYSTEM_ERROR_TEXT.into_response();
    };

    match run_prediction(artifacts, &form) {
        Ok(label) => {
            let verdict = if label == 1 { FRAUD_TEXT } else { SAFE_TEXT };
            info!(label, "transaction scored");
            pages::render_result(verdict).into_response()
        }
        Err(error) => {
            warn!(%error, "prediction failed");
            format!("Prediction Error: {error}").into_response()
        }
    }
}

fn run_prediction(
    artifacts: &LoadedArtifacts,
    form: &TransactionForm,
) -> Result<u8, PredictError> {
    let features = form.feature_vector(artifacts.encoder.as_ref())?;
    artifacts.model.predict(&features)
}
