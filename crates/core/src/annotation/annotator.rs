use crate::annotation::glyphs;
use crate::classification::domain::verdict::MaskVerdict;
use crate::shared::constants::{MASK_COLOR, NO_MASK_COLOR};
use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Outline thickness in pixels.
const OUTLINE_THICKNESS: i32 = 2;

/// Glyph scale for the verdict label.
const LABEL_SCALE: i32 = 2;

/// Gap between the label baseline and the rectangle's top edge.
const LABEL_GAP: i32 = 3;

/// Draw one face's verdict onto the working frame, in place: a colored
/// rectangle outline plus a short label just above its top edge.
///
/// Color encodes the class — the mask color for a masked face, the no-mask
/// color otherwise — and the label carries the confidence to two decimals.
pub fn annotate(frame: &mut Frame, region: &FaceRegion, verdict: &MaskVerdict) {
    let color = class_color(verdict);
    draw_outline(frame, region, color);

    let label = label_text(verdict);
    let label_y = (region.y - glyphs::text_height(LABEL_SCALE) - LABEL_GAP).max(0);
    glyphs::draw_text(frame, region.x.max(0), label_y, LABEL_SCALE, color, &label);
}

pub fn class_color(verdict: &MaskVerdict) -> [u8; 3] {
    if verdict.has_mask {
        MASK_COLOR
    } else {
        NO_MASK_COLOR
    }
}

pub fn label_text(verdict: &MaskVerdict) -> String {
    let class = if verdict.has_mask { "Mask" } else { "No Mask" };
    format!("{class} ({:.2})", verdict.confidence)
}

fn draw_outline(frame: &mut Frame, region: &FaceRegion, color: [u8; 3]) {
    let width = frame.width() as i32;
    let height = frame.height() as i32;

    let x_min = region.x;
    let y_min = region.y;
    let x_max = region.x + region.width - 1;
    let y_max = region.y + region.height - 1;

    for inset in 0..OUTLINE_THICKNESS {
        let left = x_min + inset;
        let top = y_min + inset;
        let right = x_max - inset;
        let bottom = y_max - inset;
        if left > right || top > bottom {
            break;
        }

        for x in left..=right {
            put_pixel(frame, width, height, x, top, color);
            put_pixel(frame, width, height, x, bottom, color);
        }
        for y in top..=bottom {
            put_pixel(frame, width, height, left, y, color);
            put_pixel(frame, width, height, right, y, color);
        }
    }
}

fn put_pixel(frame: &mut Frame, width: i32, height: i32, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let idx = ((y as usize * width as usize) + x as usize) * 3;
    frame.data_mut()[idx..idx + 3].copy_from_slice(&color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_frame(w: u32, h: u32) -> Frame {
        Frame::new(vec![0u8; (w * h * 3) as usize], w, h, 3)
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * frame.width() + x) * 3) as usize;
        let d = frame.data();
        [d[idx], d[idx + 1], d[idx + 2]]
    }

    fn masked(confidence: f64) -> MaskVerdict {
        MaskVerdict {
            has_mask: true,
            confidence,
        }
    }

    fn unmasked(confidence: f64) -> MaskVerdict {
        MaskVerdict {
            has_mask: false,
            confidence,
        }
    }

    #[test]
    fn test_mask_outline_uses_mask_color() {
        // The channel convention is correctness-sensitive: a swapped
        // convention would silently flip the class colors.
        let mut frame = black_frame(100, 100);
        annotate(&mut frame, &FaceRegion::new(20, 30, 40, 40), &masked(0.8));
        assert_eq!(pixel(&frame, 20, 30), MASK_COLOR);
        assert_eq!(pixel(&frame, 59, 69), MASK_COLOR);
    }

    #[test]
    fn test_no_mask_outline_uses_no_mask_color() {
        let mut frame = black_frame(100, 100);
        annotate(&mut frame, &FaceRegion::new(20, 30, 40, 40), &unmasked(0.9));
        assert_eq!(pixel(&frame, 20, 30), NO_MASK_COLOR);
    }

    #[test]
    fn test_colors_are_visually_distinct() {
        assert_ne!(MASK_COLOR, NO_MASK_COLOR);
    }

    #[test]
    fn test_outline_is_two_pixels_thick() {
        let mut frame = black_frame(100, 100);
        annotate(&mut frame, &FaceRegion::new(20, 30, 40, 40), &masked(0.8));
        assert_eq!(pixel(&frame, 21, 31), MASK_COLOR); // inner ring
        assert_eq!(pixel(&frame, 22, 32), [0, 0, 0]); // interior untouched
    }

    #[test]
    fn test_interior_pixels_are_preserved() {
        let mut frame = black_frame(100, 100);
        annotate(&mut frame, &FaceRegion::new(10, 40, 50, 50), &masked(0.7));
        assert_eq!(pixel(&frame, 35, 65), [0, 0, 0]);
    }

    #[test]
    fn test_label_is_drawn_above_the_box() {
        let mut frame = black_frame(200, 200);
        annotate(&mut frame, &FaceRegion::new(10, 100, 60, 60), &masked(0.8));
        let above: usize = (0..100u32)
            .flat_map(|y| (0..200u32).map(move |x| (x, y)))
            .filter(|&(x, y)| pixel(&frame, x, y) != [0, 0, 0])
            .count();
        assert!(above > 0, "expected label pixels above the rectangle");
    }

    #[test]
    fn test_label_clamps_into_frame_for_top_edge_box() {
        let mut frame = black_frame(100, 100);
        // Box at the very top: label must clamp to y=0 instead of vanishing.
        annotate(&mut frame, &FaceRegion::new(5, 0, 40, 40), &unmasked(0.5));
        let top_rows_lit = (0..5u32)
            .flat_map(|y| (0..100u32).map(move |x| (x, y)))
            .any(|(x, y)| pixel(&frame, x, y) != [0, 0, 0]);
        assert!(top_rows_lit);
    }

    #[test]
    fn test_annotation_stays_inside_bounds() {
        // Region touching every edge must not panic or wrap.
        let mut frame = black_frame(50, 50);
        annotate(&mut frame, &FaceRegion::new(0, 0, 50, 50), &masked(1.0));
    }

    #[test]
    fn test_label_text_formats_confidence_to_two_decimals() {
        assert_eq!(label_text(&masked(0.8)), "Mask (0.80)");
        assert_eq!(label_text(&unmasked(0.9)), "No Mask (0.90)");
        assert_eq!(label_text(&unmasked(0.5)), "No Mask (0.50)");
        assert_eq!(label_text(&masked(0.875)), "Mask (0.88)");
    }

    #[test]
    fn test_degenerate_region_draws_nothing_outside() {
        let mut frame = black_frame(10, 10);
        let before = frame.clone();
        annotate(&mut frame, &FaceRegion::new(3, 3, 1, 1), &masked(0.6));
        // A 1x1 box still gets its single outline pixel.
        assert_ne!(frame, before);
        assert_eq!(pixel(&frame, 3, 3), MASK_COLOR);
    }
}
