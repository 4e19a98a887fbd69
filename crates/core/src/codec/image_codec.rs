use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::shared::frame::Frame;

/// Boundary errors for the image codec.
///
/// Decode-side variants are input errors — the caller maps them to a
/// client-facing rejection and the pipeline is never invoked.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("input contains no image bytes")]
    EmptyInput,
    #[error("bytes do not form a valid image: {0}")]
    InvalidImage(#[source] image::ImageError),
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[source] base64::DecodeError),
    #[error("frame buffer does not match its dimensions")]
    BufferMismatch,
    #[error("failed to encode annotated image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decode raw uploaded bytes into an RGB frame.
pub fn decode_image(bytes: &[u8]) -> Result<Frame, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let img = image::load_from_memory(bytes)
        .map_err(CodecError::InvalidImage)?
        .to_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height, 3))
}

/// Decode a base64 text payload, with or without a `data:...;base64,` prefix.
///
/// Everything through the first comma is treated as the data-URL header and
/// stripped, so the prefixed and raw forms of the same image decode
/// identically.
pub fn decode_base64_image(text: &str) -> Result<Frame, CodecError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let payload = trimmed
        .split_once(',')
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let bytes = STANDARD
        .decode(payload)
        .map_err(CodecError::InvalidBase64)?;
    decode_image(&bytes)
}

/// Re-encode an annotated frame as JPEG for transport.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, CodecError> {
    let img =
        image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
            .ok_or(CodecError::BufferMismatch)?;

    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buffer), quality);
    img.write_with_encoder(encoder).map_err(CodecError::Encode)?;
    Ok(buffer)
}

/// Wrap encoded JPEG bytes as a `data:` URL for embedding in the report.
pub fn to_data_url(jpeg_bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg_bytes))
}
