//! Startup loading of the pre-trained artifacts.
//!
//! Both files live next to the executable by default so that loading does not
//! depend on the working directory the server was started from. A failed load
//! is logged and tolerated; the server runs without a usable model and
//! refuses predictions.

pub mod onnx;
pub mod vocab;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{CategoryEncoder, FraudModel, LoadError};

pub use onnx::OnnxModel;
pub use vocab::VocabEncoder;

pub const MODEL_FILE: &str = "model.onnx";
pub const ENCODER_FILE: &str = "encoder.json";

/// The two artifact handles, loaded together or not at all.
pub struct LoadedArtifacts {
    pub model: Arc<dyn FraudModel>,
    pub encoder: Arc<dyn CategoryEncoder>,
}

/// Directory the artifacts are expected in when no override is configured:
/// the directory containing the running executable.
pub fn default_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load both artifacts, logging the outcome. Never propagates an error; on
/// any failure both handles stay unset.
pub fn load(dir: &Path) -> Option<LoadedArtifacts> {
    match try_load(dir) {
        Ok(artifacts) => {
            info!(dir = %dir.display(), "Model and encoder loaded successfully");
            Some(artifacts)
        }
        Err(error @ LoadError::FileMissing { .. }) => {
            error!(%error, "artifact files missing, predictions will be refused");
            None
        }
        Err(error) => {
            error!(%error, "artifact load failed, predictions will be refused");
            None
        }
    }
}

fn try_load(dir: &Path) -> Result<LoadedArtifacts, LoadError> {
    let model_path = dir.join(MODEL_FILE);
    let encoder_path = dir.join(ENCODER_FILE);

    if !model_path.exists() || !encoder_path.exists() {
        return Err(LoadError::file_missing(dir.display().to_string()));
    }

    let model = OnnxModel::load(&model_path)?;
    let encoder = VocabEncoder::load(&encoder_path)?;

    Ok(LoadedArtifacts {
        model: Arc::new(model),
        encoder: Arc::new(encoder),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_yields_no_artifacts() {
        let dir = std::env::temp_dir().join("fraud-verdict-no-such-dir");
        assert!(load(&dir).is_none());
    }

    #[test]
    fn test_missing_files_reported_with_dir() {
        let dir = std::env::temp_dir();
        let Err(error) = try_load(&dir) else {
            panic!("load must fail without artifact files");
        };
        assert!(matches!(error, LoadError::FileMissing { .. }));
        assert!(error.to_string().contains(&dir.display().to_string()));
    }

    #[test]
    fn test_default_dir_is_absolute() {
        assert!(default_dir().is_absolute() || default_dir() == PathBuf::from("."));
    }
}
