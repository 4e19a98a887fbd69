use std::path::{Path, PathBuf};

use crate::classification::domain::model_state::ClassifierState;
use crate::classification::infrastructure::onnx_mask_classifier::OnnxMaskClassifier;
use crate::shared::constants::MASK_MODEL_NAME;
use crate::shared::model_locator;

/// Build the process-wide classifier handle.
///
/// Probes the candidate locations for the trained artifact and loads the
/// first hit. Neither a missing artifact nor a failed load propagates — both
/// degrade to `ClassifierState::Unavailable` with a logged warning, and the
/// process keeps serving in fallback mode.
pub fn load_classifier(explicit_path: Option<&Path>) -> ClassifierState {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = explicit_path {
        candidates.push(path.to_path_buf());
    }
    candidates.extend(model_locator::default_candidates(MASK_MODEL_NAME));

    let Some(path) = model_locator::locate(&candidates) else {
        log::warn!("mask classifier artifact not found; serving in fallback mode");
        return ClassifierState::Unavailable;
    };

    match OnnxMaskClassifier::new(&path) {
        Ok(classifier) => {
            log::info!("mask classifier loaded from {}", path.display());
            ClassifierState::Ready(Box::new(classifier))
        }
        Err(e) => {
            log::warn!(
                "failed to load mask classifier from {}: {e}; serving in fallback mode",
                path.display()
            );
            ClassifierState::Unavailable
        }
    }
}
