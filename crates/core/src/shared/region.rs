/// An axis-aligned face bounding box in image pixel coordinates.
///
/// `x`/`y` is the top-left corner with the origin at the image's top-left.
/// Regions produced by the locator are positive-sized and lie inside the
/// source frame; [`FaceRegion::clip_to`] exists for the defensive case where
/// an upstream detector hands back a box that leaks past an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FaceRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region is positive-sized and fully inside a
    /// `frame_width` × `frame_height` image.
    pub fn is_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x >= 0
            && self.y >= 0
            && self.x + self.width <= frame_width as i32
            && self.y + self.height <= frame_height as i32
    }

    /// Intersects the region with the image bounds.
    ///
    /// Returns `None` when nothing of the region remains inside the image —
    /// a degenerate box the pipeline must treat as a geometry violation.
    pub fn clip_to(&self, frame_width: u32, frame_height: u32) -> Option<FaceRegion> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = (self.x + self.width).min(frame_width as i32);
        let y2 = (self.y + self.height).min(frame_height as i32);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        Some(FaceRegion {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── Containment ──────────────────────────────────────────────────

    #[test]
    fn test_is_within_inside() {
        let r = FaceRegion::new(10, 10, 50, 50);
        assert!(r.is_within(100, 100));
    }

    #[test]
    fn test_is_within_touching_edges() {
        let r = FaceRegion::new(0, 0, 100, 100);
        assert!(r.is_within(100, 100));
    }

    #[rstest]
    #[case::past_right(FaceRegion::new(60, 10, 50, 50))]
    #[case::past_bottom(FaceRegion::new(10, 60, 50, 50))]
    #[case::negative_x(FaceRegion::new(-1, 10, 50, 50))]
    #[case::negative_y(FaceRegion::new(10, -1, 50, 50))]
    #[case::zero_width(FaceRegion::new(10, 10, 0, 50))]
    #[case::zero_height(FaceRegion::new(10, 10, 50, 0))]
    fn test_is_within_rejects(#[case] r: FaceRegion) {
        assert!(!r.is_within(100, 100));
    }

    // ── Clipping ─────────────────────────────────────────────────────

    #[test]
    fn test_clip_inside_is_identity() {
        let r = FaceRegion::new(10, 20, 30, 40);
        assert_eq!(r.clip_to(100, 100), Some(r));
    }

    #[test]
    fn test_clip_trims_right_and_bottom() {
        let r = FaceRegion::new(80, 90, 50, 50);
        let clipped = r.clip_to(100, 100).unwrap();
        assert_eq!(clipped, FaceRegion::new(80, 90, 20, 10));
    }

    #[test]
    fn test_clip_trims_negative_origin() {
        let r = FaceRegion::new(-10, -5, 30, 30);
        let clipped = r.clip_to(100, 100).unwrap();
        assert_eq!(clipped, FaceRegion::new(0, 0, 20, 25));
    }

    #[test]
    fn test_clip_fully_outside_is_none() {
        let r = FaceRegion::new(200, 200, 50, 50);
        assert_eq!(r.clip_to(100, 100), None);
    }

    #[test]
    fn test_clip_zero_sized_is_none() {
        let r = FaceRegion::new(10, 10, 0, 0);
        assert_eq!(r.clip_to(100, 100), None);
    }

    #[test]
    fn test_clipped_region_is_within_bounds() {
        let r = FaceRegion::new(-20, 30, 200, 200);
        let clipped = r.clip_to(100, 100).unwrap();
        assert!(clipped.is_within(100, 100));
    }
}
