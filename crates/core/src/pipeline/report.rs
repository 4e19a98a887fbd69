use serde::{Deserialize, Serialize};

use crate::pipeline::detection_record::DetectionRecord;

/// Transport payload assembled by the caller from the pipeline's outputs.
///
/// `total_faces` is derived from the record list, and `image` optionally
/// carries the annotated JPEG as a data URL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanReport {
    pub detections: Vec<DetectionRecord>,
    pub total_faces: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ScanReport {
    pub fn new(detections: Vec<DetectionRecord>, image: Option<String>) -> Self {
        let total_faces = detections.len();
        Self {
            detections,
            total_faces,
            image,
        }
    }
}

/// Readiness payload for the health surface.
///
/// Degraded (no-model) operation is observable here and only here — the
/// detection payload shape never changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthReport {
    pub fn new(model_loaded: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded,
        }
    }
}
