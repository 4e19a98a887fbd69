use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Domain interface for locating faces in a frame.
///
/// Returns a finite, possibly-empty set of face boxes. Emission order is
/// whatever the underlying detector yields — callers must not assume any
/// spatial ordering. Implementations may keep internal buffers, hence
/// `&mut self`. Each scan runs synchronously on one thread, so no `Send`
/// bound is required of implementations.
pub trait FaceLocator {
    fn locate(&mut self, frame: &Frame) -> Result<Vec<FaceRegion>, Box<dyn std::error::Error>>;
}
