pub const MASK_MODEL_NAME: &str = "mask_detector.onnx";

pub const FACE_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";

/// Side length of the square patch fed to the mask classifier.
pub const PATCH_SIZE: u32 = 128;

/// Default multi-scale step between detector pyramid levels.
pub const DEFAULT_SCALE_STEP: f32 = 1.3;

/// Default minimum neighboring-window support for a face candidate.
pub const DEFAULT_MIN_NEIGHBORS: u32 = 5;

/// Annotation colors, RGB. Must stay visually distinct per class.
pub const MASK_COLOR: [u8; 3] = [0, 255, 0];
pub const NO_MASK_COLOR: [u8; 3] = [255, 0, 0];

/// JPEG quality for re-encoding annotated frames.
pub const ANNOTATED_JPEG_QUALITY: u8 = 90;
