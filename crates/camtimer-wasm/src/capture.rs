//! Photo orientation WASM bindings.

use camtimer_core::capture::{
    orient_jpeg as core_orient, photo_filename as core_filename, DEFAULT_JPEG_QUALITY,
};
use camtimer_core::orientation::Orientation;
use wasm_bindgen::prelude::*;

/// Rotate captured JPEG bytes so the saved photo appears upright.
///
/// # Arguments
///
/// * `bytes` - JPEG bytes from the camera (a `Uint8Array`).
/// * `rotation_degrees` - The image rotation from
///   [`crate::orientation::image_rotation`] (0, 90, 180, or 270).
/// * `quality` - Optional re-encode quality 1-100; defaults to 90.
///
/// # Errors
///
/// Rejects non-canonical rotation values and undecodable photo data.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const blob = await captureBlob(track);
/// const bytes = new Uint8Array(await blob.arrayBuffer());
/// const oriented = orient_photo(bytes, plan.image);
/// await savePhoto(photo_filename(Date.now()), oriented);
/// ```
#[wasm_bindgen]
pub fn orient_photo(
    bytes: &[u8],
    rotation_degrees: u32,
    quality: Option<u8>,
) -> Result<Vec<u8>, JsValue> {
    let rotation = Orientation::from_degrees(rotation_degrees)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    core_orient(bytes, rotation, quality.unwrap_or(DEFAULT_JPEG_QUALITY))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// File name for a captured photo from a JS timestamp (`Date.now()`).
#[wasm_bindgen]
pub fn photo_filename(timestamp_millis: f64) -> String {
    core_filename(timestamp_millis as u64)
}
