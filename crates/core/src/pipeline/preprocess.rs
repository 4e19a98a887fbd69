use ndarray::Array4;

use crate::shared::frame::Frame;
use crate::shared::region::FaceRegion;

/// Copy the face region out of the frame.
///
/// The region must already be clipped to the frame bounds — the crop never
/// reads outside the source buffer.
pub fn crop(frame: &Frame, region: &FaceRegion) -> Frame {
    debug_assert!(
        region.is_within(frame.width(), frame.height()),
        "crop region must be clipped to the frame"
    );

    let src = frame.as_ndarray();
    let mut data = Vec::with_capacity((region.width * region.height * 3) as usize);
    for y in 0..region.height {
        for x in 0..region.width {
            for c in 0..3 {
                data.push(src[[(region.y + y) as usize, (region.x + x) as usize, c]]);
            }
        }
    }
    Frame::new(data, region.width as u32, region.height as u32, 3)
}

/// Resize a patch to `size × size` and rescale to `[0, 1]` NCHW float32.
///
/// Center-sampled nearest neighbor: deterministic for identical input, which
/// the pipeline's idempotence guarantee depends on.
pub fn to_input_tensor(patch: &Frame, size: u32) -> Array4<f32> {
    let src = patch.as_ndarray();
    let src_h = patch.height() as usize;
    let src_w = patch.width() as usize;
    let s = size as usize;

    let mut tensor = Array4::<f32>::zeros((1, 3, s, s));

    for y in 0..s {
        let src_y = (((y as f64 + 0.5) * src_h as f64 / s as f64) as usize).min(src_h - 1);
        for x in 0..s {
            let src_x = (((x as f64 + 0.5) * src_w as f64 / s as f64) as usize).min(src_w - 1);
            for c in 0..3 {
                tensor[[0, c, y, x]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    tensor
}
