//! Orientation resolution WASM bindings.
//!
//! These functions take raw degree values as JavaScript numbers, validate
//! them against the canonical {0, 90, 180, 270} domain, and return the
//! correction angles the shell applies to its preview element and capture
//! pipeline.

use crate::types::{facing_from_bool, JsRotationPlan};
use camtimer_core::orientation::{self, Orientation, SensorMount};
use wasm_bindgen::prelude::*;

/// Parse raw device/sensor degrees into the core domain.
fn canonical(degrees: u32) -> Result<Orientation, JsValue> {
    Orientation::from_degrees(degrees).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the rotation that makes the live preview appear upright.
///
/// # Arguments
///
/// * `device_degrees` - Device rotation from natural orientation
///   (0, 90, 180, or 270).
/// * `sensor_offset_degrees` - The sensor's fixed mount angle
///   (0, 90, 180, or 270).
/// * `front_facing` - True for a selfie camera.
///
/// # Errors
///
/// Rejects non-canonical degree values.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Back camera mounted at 90, phone held naturally.
/// const angle = display_rotation(0, 90, false);
/// video.style.transform = `rotate(${angle}deg)`;
/// ```
#[wasm_bindgen]
pub fn display_rotation(
    device_degrees: u32,
    sensor_offset_degrees: u32,
    front_facing: bool,
) -> Result<u32, JsValue> {
    let mount = SensorMount::new(canonical(sensor_offset_degrees)?, facing_from_bool(front_facing));
    Ok(orientation::display_rotation(canonical(device_degrees)?, mount).degrees())
}

/// Compute the rotation that makes the saved photo appear upright.
///
/// Same arguments and errors as [`display_rotation`]. For front-facing
/// sensors this differs from the display angle: the preview is mirrored,
/// the saved photo is not.
#[wasm_bindgen]
pub fn image_rotation(
    device_degrees: u32,
    sensor_offset_degrees: u32,
    front_facing: bool,
) -> Result<u32, JsValue> {
    let mount = SensorMount::new(canonical(sensor_offset_degrees)?, facing_from_bool(front_facing));
    Ok(orientation::image_rotation(canonical(device_degrees)?, mount).degrees())
}

/// Compute both correction angles at once.
#[wasm_bindgen]
pub fn resolve_rotation(
    device_degrees: u32,
    sensor_offset_degrees: u32,
    front_facing: bool,
) -> Result<JsRotationPlan, JsValue> {
    let mount = SensorMount::new(canonical(sensor_offset_degrees)?, facing_from_bool(front_facing));
    let plan = orientation::resolve(canonical(device_degrees)?, mount);
    Ok(JsRotationPlan::from_core(plan))
}
