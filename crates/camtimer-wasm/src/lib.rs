//! CamTimer WASM - WebAssembly bindings for CamTimer
//!
//! This crate exposes the camtimer-core self-timer logic to a
//! JavaScript/TypeScript camera shell. The shell owns the platform pieces
//! (getUserMedia, the preview element, audio, persistence) and calls into
//! this module for the decisions: correction angles, preview size,
//! countdown state, and photo orientation.
//!
//! # Module Structure
//!
//! - `orientation` - Display/image rotation angles from device + mount state
//! - `preview` - Best preview size for the current surface
//! - `countdown` - The tap-to-toggle shutter timer class
//! - `capture` - Baking the image rotation into captured JPEG bytes
//! - `types` - JS-friendly wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { resolve_rotation, select_preview_size, JsShutterTimer } from '@camtimer/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const plan = resolve_rotation(deviceDegrees, sensorOffset, frontFacing);
//! video.style.transform = `rotate(${plan.display}deg)`;
//!
//! const best = select_preview_size(supportedSizes, surface.width, surface.height);
//! if (best) await applyConstraints(track, best.width, best.height);
//! ```

use wasm_bindgen::prelude::*;

mod capture;
mod countdown;
mod orientation;
mod preview;
mod types;

// Re-export public bindings
pub use capture::{orient_photo, photo_filename};
pub use countdown::{delay_choices, JsShutterTimer};
pub use orientation::{display_rotation, image_rotation, resolve_rotation};
pub use preview::select_preview_size;
pub use types::{JsResolution, JsRotationPlan};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
