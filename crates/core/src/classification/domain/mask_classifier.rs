use ndarray::Array4;

/// Domain interface for the trained mask classifier.
///
/// Takes one normalized face patch as a `[1, 3, 128, 128]` NCHW tensor with
/// values in `[0, 1]` and returns the probability that the face shows **no**
/// mask. The model is opaque beyond this contract.
pub trait MaskClassifier: Send {
    fn classify(&mut self, input: &Array4<f32>) -> Result<f32, Box<dyn std::error::Error>>;
}
