/// Face locator backed by the `rustface` crate (SeetaFace engine).
///
/// A classical multi-scale sliding-window detector: the frame is reduced to
/// single-channel intensity, scanned across an image pyramid, and overlapping
/// candidate windows are merged. Color carries no signal for the locator.
use std::io::Cursor;
use std::path::Path;

use crate::detection::domain::face_locator::FaceLocator;
use crate::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_STEP};
use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Smallest face the detector will report, in pixels.
const MIN_FACE_SIZE: u32 = 20;

/// Sliding-window step in both axes.
const WINDOW_STEP: u32 = 4;

/// SeetaFace locator with the two reproducibility-sensitive tunables.
///
/// `scale_step` is the multiplicative gap between pyramid levels (the
/// detector wants it as a shrink factor, so `1/scale_step` is applied).
/// `min_neighbors` is the minimum accumulated support a candidate needs: the
/// detector folds the scores of merged neighbor windows into one accumulated
/// score, so the neighbor threshold doubles as the score cutoff.
pub struct SeetaFaceLocator {
    model: rustface::Model,
    scale_step: f32,
    min_neighbors: u32,
}

impl SeetaFaceLocator {
    /// Load the SeetaFace model from disk with the default tunables.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_tuning(model_path, DEFAULT_SCALE_STEP, DEFAULT_MIN_NEIGHBORS)
    }

    pub fn with_tuning(
        model_path: &Path,
        scale_step: f32,
        min_neighbors: u32,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if scale_step <= 1.0 {
            return Err(format!("scale step must be greater than 1.0, got {scale_step}").into());
        }
        if min_neighbors == 0 {
            return Err("minimum neighbor threshold must be at least 1".into());
        }
        let bytes = std::fs::read(model_path)?;
        let model = rustface::read_model(Cursor::new(bytes))?;
        Ok(Self {
            model,
            scale_step,
            min_neighbors,
        })
    }
}

impl FaceLocator for SeetaFaceLocator {
    fn locate(&mut self, frame: &Frame) -> Result<Vec<FaceRegion>, Box<dyn std::error::Error>> {
        // A degenerate frame has nothing to scan; not a failure.
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(Vec::new());
        }

        let gray = to_intensity(frame);

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(self.min_neighbors as f64);
        detector.set_pyramid_scale_factor((1.0 / self.scale_step).clamp(0.01, 0.99));
        detector.set_slide_window_step(WINDOW_STEP, WINDOW_STEP);

        let faces = detector.detect(&rustface::ImageData::new(
            &gray,
            frame.width(),
            frame.height(),
        ));

        let regions = faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                clamp_detection(
                    bbox.x(),
                    bbox.y(),
                    bbox.width(),
                    bbox.height(),
                    frame.width(),
                    frame.height(),
                )
            })
            .collect();

        Ok(regions)
    }
}

/// Reduce an RGB frame to single-channel intensity (BT.601 luma weights,
/// matching what the detector's training data used).
fn to_intensity(frame: &Frame) -> Vec<u8> {
    let src = frame.as_ndarray();
    let h = frame.height() as usize;
    let w = frame.width() as usize;

    let mut gray = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let r = src[[y, x, 0]] as f32;
            let g = src[[y, x, 1]] as f32;
            let b = src[[y, x, 2]] as f32;
            gray.push((0.299 * r + 0.587 * g + 0.114 * b).round() as u8);
        }
    }
    gray
}

/// Constrain a raw detection to the frame; drops boxes that end up empty.
fn clamp_detection(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    frame_width: u32,
    frame_height: u32,
) -> Option<FaceRegion> {
    FaceRegion::new(x, y, width as i32, height as i32).clip_to(frame_width, frame_height)
}
