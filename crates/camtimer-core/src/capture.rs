//! Captured photo orientation pipeline.
//!
//! Camera stacks hand back JPEG bytes in the sensor's native orientation;
//! the angle that makes the photo upright is the image rotation computed
//! in [`crate::orientation`]. This module bakes that rotation into the
//! pixels: decode, undo any EXIF orientation tag the producer already
//! wrote, rotate by the canonical angle, re-encode.
//!
//! Rotations here are exact quarter turns, so no resampling or quality
//! loss beyond the JPEG re-encode itself.
//!
//! Writing the resulting bytes to storage (and telling the media indexer
//! about the new file) stays with the embedding shell; the one piece of
//! naming policy it needs, the timestamp filename, lives here as
//! [`photo_filename`].

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use thiserror::Error;

use crate::orientation::Orientation;

/// Default JPEG re-encode quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors from the photo orientation pipeline.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The photo bytes could not be decoded.
    #[error("invalid or corrupted photo data: {0}")]
    InvalidImage(String),

    /// Re-encoding the rotated photo failed.
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Rotate captured JPEG bytes so the saved photo appears upright.
///
/// # Arguments
///
/// * `bytes` - JPEG bytes as delivered by the camera.
/// * `rotation` - The image rotation from
///   [`crate::orientation::image_rotation`].
/// * `quality` - Re-encode quality, clamped to 1-100.
///   [`DEFAULT_JPEG_QUALITY`] matches common camera output.
///
/// # Returns
///
/// Fresh JPEG bytes with the rotation applied to the pixels and no
/// orientation metadata left to interpret.
///
/// # Errors
///
/// [`CaptureError::InvalidImage`] when the input cannot be decoded,
/// [`CaptureError::EncodingFailed`] when the encoder rejects the result.
pub fn orient_jpeg(
    bytes: &[u8],
    rotation: Orientation,
    quality: u8,
) -> Result<Vec<u8>, CaptureError> {
    let upright = decode_upright(bytes)?;

    let rotated = match rotation {
        Orientation::Deg0 => upright,
        Orientation::Deg90 => upright.rotate90(),
        Orientation::Deg180 => upright.rotate180(),
        Orientation::Deg270 => upright.rotate270(),
    };

    encode_jpeg(&rotated.into_rgb8(), quality)
}

/// Decode JPEG bytes, undoing any EXIF orientation the producer wrote.
///
/// Some camera stacks rotate pixels, others only tag the file; decoding
/// through the tag makes the rest of the pipeline see upright pixels
/// either way.
fn decode_upright(bytes: &[u8]) -> Result<DynamicImage, CaptureError> {
    let orientation_code = exif_orientation_code(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CaptureError::InvalidImage(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| CaptureError::InvalidImage(e.to_string()))?;

    Ok(undo_exif_orientation(img, orientation_code))
}

/// Read the EXIF orientation tag, defaulting to 1 (upright) when the file
/// carries no usable EXIF block.
fn exif_orientation_code(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Invert an EXIF orientation (values 1-8) so the pixels end up upright.
fn undo_exif_orientation(img: DynamicImage, code: u32) -> DynamicImage {
    match code {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        // 1 is upright; unknown values are treated the same way.
        _ => img,
    }
}

/// Encode RGB pixels to JPEG at the given quality.
fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, CaptureError> {
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CaptureError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// File name for a captured photo: the capture timestamp in milliseconds
/// with a `.jpg` extension.
///
/// The shell supplies the clock so captures stay testable and the core
/// stays pure.
pub fn photo_filename(timestamp_millis: u64) -> String {
    format!("{timestamp_millis}.jpg")
}
