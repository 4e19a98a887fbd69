use serde::{Deserialize, Serialize};

use crate::classification::domain::verdict::MaskVerdict;
use crate::shared::region::FaceRegion;

/// The externally visible result for one located face.
///
/// Geometry matches the located region exactly; confidence is rounded to two
/// decimals for presentation. Records keep the locator's emission order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub has_mask: bool,
    pub confidence: f64,
}

impl DetectionRecord {
    pub fn new(region: &FaceRegion, verdict: &MaskVerdict) -> Self {
        Self {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            has_mask: verdict.has_mask,
            confidence: round2(verdict.confidence),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
