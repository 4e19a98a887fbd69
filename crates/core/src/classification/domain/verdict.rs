/// Confidence reported when no real classification happened.
///
/// A sentinel, not a calibrated probability — callers must read it together
/// with the readiness flag, never as an actual negative finding.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// The per-face classification outcome.
///
/// `confidence` is the probability mass of the winning class, always finite
/// and in `[0, 1]` — on the fallback path as well as the real one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskVerdict {
    pub has_mask: bool,
    pub confidence: f64,
}

impl MaskVerdict {
    /// Apply the decision rule to a raw no-mask probability `p`:
    /// `has_mask = p < 0.5`, confidence is `1 - p` for a masked face and `p`
    /// otherwise. Out-of-range inputs are clamped into `[0, 1]`.
    pub fn from_probability(no_mask_probability: f32) -> Self {
        let p = f64::from(no_mask_probability).clamp(0.0, 1.0);
        let has_mask = p < 0.5;
        let confidence = if has_mask { 1.0 - p } else { p };
        Self {
            has_mask,
            confidence,
        }
    }

    /// The deterministic substitute used when no classifier answer exists.
    pub fn undetermined() -> Self {
        Self {
            has_mask: false,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}
