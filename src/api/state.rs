//! Application state shared across requests

use std::sync::Arc;

use crate::infrastructure::artifacts::LoadedArtifacts;

/// Injected into every handler. The artifacts are loaded once before the
/// server starts and never mutated afterwards; `None` means startup loading
/// failed and predictions are refused.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Option<Arc<LoadedArtifacts>>,
}

impl AppState {
    pub fn new(artifacts: Option<LoadedArtifacts>) -> Self {
        Self {
            artifacts: artifacts.map(Arc::new),
        }
    }
}
