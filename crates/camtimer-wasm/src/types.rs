//! WASM-compatible wrapper types.
//!
//! Small JavaScript-friendly wrappers around the core value types, plus
//! the conversions between raw JS scalars and the core enums.

use camtimer_core::orientation::{Facing, RotationPlan};
use camtimer_core::preview::Resolution;
use wasm_bindgen::prelude::*;

/// A preview resolution for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsResolution {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsResolution {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsResolution {
        JsResolution { width, height }
    }

    /// Width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl JsResolution {
    pub(crate) fn from_core(resolution: Resolution) -> Self {
        Self {
            width: resolution.width,
            height: resolution.height,
        }
    }
}

/// The {display, image} correction angle pair for JavaScript, in degrees.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsRotationPlan {
    display: u32,
    image: u32,
}

#[wasm_bindgen]
impl JsRotationPlan {
    /// Degrees to rotate the live preview (0, 90, 180, or 270).
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> u32 {
        self.display
    }

    /// Degrees to rotate the saved photo (0, 90, 180, or 270).
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> u32 {
        self.image
    }
}

impl JsRotationPlan {
    pub(crate) fn from_core(plan: RotationPlan) -> Self {
        Self {
            display: plan.display.degrees(),
            image: plan.image.degrees(),
        }
    }
}

/// Convert a JS boolean camera-facing flag to the core enum.
///
/// `true` means the sensor faces the user (selfie camera).
pub(crate) fn facing_from_bool(front_facing: bool) -> Facing {
    if front_facing {
        Facing::Front
    } else {
        Facing::Back
    }
}
