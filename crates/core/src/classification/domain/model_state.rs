use ndarray::Array4;

use crate::classification::domain::mask_classifier::MaskClassifier;
use crate::classification::domain::verdict::MaskVerdict;

/// Process-wide classifier handle, built once at startup and read-only
/// afterwards.
///
/// `Unavailable` is a documented steady state, not an error: the pipeline
/// keeps serving with the fallback verdict, and only the readiness flag
/// distinguishes degraded mode from the real thing.
pub enum ClassifierState {
    Ready(Box<dyn MaskClassifier>),
    Unavailable,
}

impl ClassifierState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ClassifierState::Ready(_))
    }

    /// Classify one normalized face patch, applying the fallback policy.
    ///
    /// Every failure mode — no classifier loaded, a per-call inference
    /// error, a non-finite output — collapses to the undetermined verdict
    /// for this face only; the scan carries on with the remaining faces.
    pub fn classify(&mut self, input: &Array4<f32>) -> MaskVerdict {
        match self {
            ClassifierState::Unavailable => MaskVerdict::undetermined(),
            ClassifierState::Ready(classifier) => match classifier.classify(input) {
                Ok(p) if p.is_finite() => MaskVerdict::from_probability(p),
                Ok(p) => {
                    log::warn!("classifier produced non-finite probability {p}; using fallback verdict");
                    MaskVerdict::undetermined()
                }
                Err(e) => {
                    log::warn!("classifier inference failed: {e}; using fallback verdict");
                    MaskVerdict::undetermined()
                }
            },
        }
    }
}
