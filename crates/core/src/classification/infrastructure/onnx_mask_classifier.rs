/// Mask classifier using ONNX Runtime via `ort`.
///
/// Wraps the trained binary model: one `[1, 3, 128, 128]` float patch in,
/// one no-mask probability out. The network ends in a sigmoid, so the raw
/// output is already in `[0, 1]`.
use std::path::Path;

use ndarray::Array4;

use crate::classification::domain::mask_classifier::MaskClassifier;

pub struct OnnxMaskClassifier {
    session: ort::session::Session,
}

impl OnnxMaskClassifier {
    /// Load the classifier artifact; any deserialization problem surfaces
    /// here, before the first request.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        Ok(Self { session })
    }
}

impl MaskClassifier for OnnxMaskClassifier {
    fn classify(&mut self, input: &Array4<f32>) -> Result<f32, Box<dyn std::error::Error>> {
        let input_value = ort::value::Tensor::from_array(input.clone())?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        if outputs.is_empty() {
            return Err("mask model produced no outputs".into());
        }

        let probabilities = outputs[0].try_extract_array::<f32>()?;
        let data = probabilities
            .as_slice()
            .ok_or("cannot get probability slice")?;
        let p = *data.first().ok_or("mask model output is empty")?;

        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file_is_an_error() {
        let result = OnnxMaskClassifier::new(Path::new("/nonexistent/mask.onnx"));
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_model_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.onnx");
        std::fs::write(&path, b"not an onnx graph").unwrap();
        let result = OnnxMaskClassifier::new(&path);
        assert!(result.is_err());
    }
}
