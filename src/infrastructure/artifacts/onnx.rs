//! ONNX-backed classifier handle.

use std::path::Path;
use std::sync::Mutex;

use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::tensor::Shape;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::domain::{FraudModel, LoadError, PredictError};

/// A pre-trained classifier loaded from an ONNX export.
///
/// The session is behind a `Mutex` because `Session::run` takes `&mut self`;
/// the handle itself is immutable after load.
pub struct OnnxModel {
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxModel {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let session = build_session(path)
            .map_err(|e| LoadError::deserialize(path.display().to_string(), e.to_string()))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        info!(path = %path.display(), input = %input_name, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }
}

fn build_session(path: &Path) -> ort::Result<Session> {
    ort::init().commit()?;
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?
        .commit_from_file(path)
}

impl FraudModel for OnnxModel {
    fn predict(&self, features: &[f32; 7]) -> Result<u8, PredictError> {
        let shape = vec![1_i64, features.len() as i64];
        let input = Tensor::from_array((shape, features.to_vec()))
            .map_err(|e| PredictError::inference_failed(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PredictError::inference_failed("model session poisoned"))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input])
            .map_err(|e| PredictError::inference_failed(e.to_string()))?;

        // sklearn-style exports expose the class as an int64 "label" output.
        for (name, value) in outputs.iter() {
            if let Ok((_, data)) = value.try_extract_tensor::<i64>() {
                if let Some(&label) = data.first() {
                    debug!(output = %name, label, "label read from tensor");
                    return Ok(u8::from(label == 1));
                }
            }
        }

        // Fallback: threshold the fraud-class probability.
        for (name, value) in outputs.iter() {
            if let Ok((shape, data)) = value.try_extract_tensor::<f32>() {
                let prob = fraud_probability(shape, data);
                debug!(output = %name, prob, "label derived from probabilities");
                return Ok(u8::from(prob >= 0.5));
            }
        }

        Err(PredictError::inference_failed(
            "model produced no usable output",
        ))
    }
}

/// Pick the fraud-class probability out of a `[batch, classes]`, `[classes]`
/// or single-probability tensor.
fn fraud_probability(shape: &Shape, data: &[f32]) -> f32 {
    let dims: Vec<i64> = shape.iter().copied().collect();
    let classes = match dims.as_slice() {
        [_, n] => *n as usize,
        [n] => *n as usize,
        _ => 0,
    };

    if classes >= 2 {
        data[1]
    } else {
        data.first().copied().unwrap_or(0.5)
    }
}
