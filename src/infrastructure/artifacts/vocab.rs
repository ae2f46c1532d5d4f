//! Category encoder backed by a JSON vocabulary file.
//!
//! The file is a flat map from transaction-type label to the integer code the
//! model was trained with, e.g. `{"CASH_IN": 0, "TRANSFER": 4}`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::{CategoryEncoder, LoadError, PredictError};

#[derive(Debug)]
pub struct VocabEncoder {
    vocab: HashMap<String, i64>,
}

impl VocabEncoder {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| LoadError::deserialize(path.display().to_string(), e.to_string()))?;
        let vocab: HashMap<String, i64> = serde_json::from_str(&raw)
            .map_err(|e| LoadError::deserialize(path.display().to_string(), e.to_string()))?;

        info!(path = %path.display(), categories = vocab.len(), "category encoder loaded");

        Ok(Self { vocab })
    }

    pub fn from_vocab(vocab: HashMap<String, i64>) -> Self {
        Self { vocab }
    }
}

impl CategoryEncoder for VocabEncoder {
    fn encode(&self, label: &str) -> Result<i64, PredictError> {
        self.vocab
            .get(label)
            .copied()
            .ok_or_else(|| PredictError::unknown_category(label))
    }
}
