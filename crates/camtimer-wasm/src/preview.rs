//! Preview size selection WASM bindings.

use crate::types::JsResolution;
use camtimer_core::preview::{self, Resolution, Viewport};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Helper struct for deserializing JS size objects via serde.
#[derive(Deserialize)]
struct ResolutionJs {
    width: u32,
    height: u32,
}

/// Choose the camera-supported preview size that best matches a viewport.
///
/// # Arguments
///
/// * `candidates` - Array of `{width: number, height: number}` objects in
///   the camera's reported order (landscape terms).
/// * `viewport_width` / `viewport_height` - Current surface dimensions in
///   pixels.
///
/// # Returns
///
/// The best matching size, or `undefined` when the candidate list is
/// empty (the shell then leaves the camera's default size in place).
///
/// # Errors
///
/// Returns an error if the candidate array cannot be deserialized or
/// contains a zero dimension.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sizes = track.getCapabilities
///   ? supportedSizes(track)
///   : [{ width: 1280, height: 720 }];
/// const best = select_preview_size(sizes, canvas.width, canvas.height);
/// if (best) applyConstraints(track, best.width, best.height);
/// ```
#[wasm_bindgen]
pub fn select_preview_size(
    candidates: JsValue,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<Option<JsResolution>, JsValue> {
    let candidates: Vec<ResolutionJs> = serde_wasm_bindgen::from_value(candidates)
        .map_err(|e| JsValue::from_str(&format!("Invalid candidate sizes: {}", e)))?;

    if candidates.iter().any(|r| r.width == 0 || r.height == 0) {
        return Err(JsValue::from_str("Candidate sizes must be positive"));
    }
    if viewport_width == 0 || viewport_height == 0 {
        return Err(JsValue::from_str("Viewport dimensions must be positive"));
    }

    let candidates: Vec<Resolution> = candidates
        .into_iter()
        .map(|r| Resolution::new(r.width, r.height))
        .collect();
    let viewport = Viewport::new(viewport_width, viewport_height);

    Ok(preview::select_preview_size(&candidates, viewport).map(JsResolution::from_core))
}
