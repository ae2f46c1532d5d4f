//! Capability traits for the pre-trained artifacts.
//!
//! The classifier and the category encoder are produced outside this
//! repository and consumed as opaque handles. Any concrete implementation
//! (loaded from a file, a stub for testing) satisfies these traits.

use super::error::PredictError;

/// Maps a categorical transaction-type label to the integer code it was
/// assigned at training time.
pub trait CategoryEncoder: Send + Sync {
    /// Encode a label, failing with `UnknownCategory` for labels outside the
    /// training-time vocabulary.
    fn encode(&self, label: &str) -> Result<i64, PredictError>;
}

/// A pre-trained binary classifier over a fixed-order 7-element feature
/// vector.
pub trait FraudModel: Send + Sync {
    /// Run inference on a single feature vector. Returns `1` for fraud and
    /// `0` for safe.
    fn predict(&self, features: &[f32; 7]) -> Result<u8, PredictError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;

    use super::*;

    /// Stub model returning a fixed label, or a fixed error.
    pub struct MockModel {
        label: u8,
        error: Option<String>,
    }

    impl MockModel {
        pub fn returning(label: u8) -> Self {
            Self { label, error: None }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                label: 0,
                error: Some(message.into()),
            }
        }
    }

    impl FraudModel for MockModel {
        fn predict(&self, _features: &[f32; 7]) -> Result<u8, PredictError> {
            if let Some(ref message) = self.error {
                return Err(PredictError::inference_failed(message.clone()));
            }
            Ok(self.label)
        }
    }

    /// Stub encoder over a small fixed vocabulary.
    pub struct MockEncoder {
        vocab: HashMap<String, i64>,
    }

    impl MockEncoder {
        pub fn new() -> Self {
            let mut vocab = HashMap::new();
            vocab.insert("CASH_OUT".to_string(), 1);
            vocab.insert("TRANSFER".to_string(), 2);
            Self { vocab }
        }
    }

    impl CategoryEncoder for MockEncoder {
        fn encode(&self, label: &str) -> Result<i64, PredictError> {
            self.vocab
                .get(label)
                .copied()
                .ok_or_else(|| PredictError::unknown_category(label))
        }
    }
}
