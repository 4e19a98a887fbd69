use crate::annotation::annotator;
use crate::classification::domain::model_state::ClassifierState;
use crate::detection::domain::face_locator::FaceLocator;
use crate::pipeline::detection_record::DetectionRecord;
use crate::pipeline::preprocess;
use crate::shared::constants::PATCH_SIZE;
use crate::shared::frame::Frame;

/// Single-image mask scan: locate → crop → normalize → classify → annotate.
///
/// Stages run strictly in sequence for each located face, in the locator's
/// emission order. The frame is the working copy: annotation mutates it in
/// place, and on success the caller gets the full record list together with
/// the annotated frame. Any geometry or locator failure aborts the whole
/// scan — there are no partial results.
pub struct MaskScanUseCase {
    locator: Box<dyn FaceLocator>,
    classifier: ClassifierState,
}

impl MaskScanUseCase {
    pub fn new(locator: Box<dyn FaceLocator>, classifier: ClassifierState) -> Self {
        Self {
            locator,
            classifier,
        }
    }

    /// Whether a real classifier backs this scanner (the health surface).
    pub fn classifier_ready(&self) -> bool {
        self.classifier.is_ready()
    }

    pub fn execute(
        &mut self,
        frame: &mut Frame,
    ) -> Result<Vec<DetectionRecord>, Box<dyn std::error::Error>> {
        let regions = self.locator.locate(frame)?;
        log::debug!("located {} face(s)", regions.len());

        let mut records = Vec::with_capacity(regions.len());
        for region in &regions {
            // Locators are expected to stay in bounds; a box that leaks past
            // an edge is clipped, one with nothing left inside is a geometry
            // violation that fails the scan.
            let region = region
                .clip_to(frame.width(), frame.height())
                .ok_or("face region lies outside the image bounds")?;

            let patch = preprocess::crop(frame, &region);
            let input = preprocess::to_input_tensor(&patch, PATCH_SIZE);
            let verdict = self.classifier.classify(&input);

            annotator::annotate(frame, &region, &verdict);
            records.push(DetectionRecord::new(&region, &verdict));
        }

        Ok(records)
    }
}
