use thiserror::Error;

/// Errors raised while loading the model and encoder artifacts at startup.
///
/// These are logged and swallowed by the loader; the process keeps running
/// without a usable model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("artifact files not found in {dir}")]
    FileMissing { dir: String },

    #[error("failed to deserialize {artifact}: {message}")]
    Deserialize { artifact: String, message: String },
}

/// Errors raised while handling a single prediction request.
///
/// The `Display` text of these variants is what the requester sees, prefixed
/// with "Prediction Error: ".
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("could not convert string to float: {field}={value:?}")]
    BadInput { field: String, value: String },

    #[error("unseen transaction type: {label:?}")]
    UnknownCategory { label: String },

    #[error("inference failed: {message}")]
    InferenceFailed { message: String },
}

impl LoadError {
    pub fn file_missing(dir: impl Into<String>) -> Self {
        Self::FileMissing { dir: dir.into() }
    }

    pub fn deserialize(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Deserialize {
            artifact: artifact.into(),
            message: message.into(),
        }
    }
}

impl PredictError {
    pub fn bad_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::BadInput {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory {
            label: label.into(),
        }
    }

    pub fn inference_failed(message: impl Into<String>) -> Self {
        Self::InferenceFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_missing_display() {
        let error = LoadError::file_missing("/opt/app");
        assert_eq!(error.to_string(), "artifact files not found in /opt/app");
    }

    #[test]
    fn test_bad_input_display() {
        let error = PredictError::bad_input("amount", "abc");
        assert_eq!(
            error.to_string(),
            "could not convert string to float: amount=\"abc\""
        );
    }

    #[test]
    fn test_unknown_category_display() {
        let error = PredictError::unknown_category("WIRE");
        assert_eq!(error.to_string(), "unseen transaction type: \"WIRE\"");
    }

    #[test]
    fn test_inference_failed_display() {
        let error = PredictError::inference_failed("no usable output");
        assert_eq!(error.to_string(), "inference failed: no usable output");
    }
}
