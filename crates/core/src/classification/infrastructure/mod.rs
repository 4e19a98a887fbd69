pub mod classifier_loader;
pub mod onnx_mask_classifier;
