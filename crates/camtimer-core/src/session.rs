//! Preview session state.
//!
//! The stateful bookkeeping around the pure orientation and selection
//! functions: one session per open camera, holding the camera's fixed
//! mount/catalog data and a small cache of the last preview-size
//! selection.
//!
//! The cache is keyed on the viewport and cleared when the camera is
//! switched, so redundant surface-change events (which platforms deliver
//! freely) do not re-run the selection, while a real viewport change or a
//! camera switch always does.

use serde::{Deserialize, Serialize};

use crate::orientation::{resolve, Orientation, RotationPlan, SensorMount};
use crate::preview::{select_preview_size, Resolution, Viewport};

/// Identifier of a physical camera as enumerated by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(pub u32);

/// Everything fixed about one camera for the lifetime of a session.
///
/// Populated once from the platform's camera enumeration when the camera
/// is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDescriptor {
    pub id: CameraId,
    /// How the sensor is mounted on the chassis.
    pub mount: SensorMount,
    /// Supported preview sizes, in the camera's reported order.
    pub preview_sizes: Vec<Resolution>,
}

impl CameraDescriptor {
    pub fn new(id: CameraId, mount: SensorMount, preview_sizes: Vec<Resolution>) -> Self {
        Self {
            id,
            mount,
            preview_sizes,
        }
    }
}

/// Everything the shell applies on one surface-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Correction angles for preview and capture.
    pub rotation: RotationPlan,
    /// Best preview size, or `None` for an empty catalog (the shell skips
    /// setting a size and keeps the camera default).
    pub preview_size: Option<Resolution>,
}

impl SurfaceConfig {
    /// The selected preview size as the surface will render it.
    ///
    /// Catalog entries are landscape; when the display rotation swaps
    /// dimensions the surface should be sized with width and height
    /// exchanged.
    pub fn oriented_preview_size(&self) -> Option<Resolution> {
        self.preview_size.map(|size| {
            if self.rotation.display.swaps_dimensions() {
                Resolution::new(size.height, size.width)
            } else {
                size
            }
        })
    }
}

/// Per-camera session state owned by the shell.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    camera: CameraDescriptor,
    /// Last selection, keyed by the viewport it was computed for.
    selected: Option<(Viewport, Option<Resolution>)>,
}

impl PreviewSession {
    /// Open a session for one camera.
    pub fn new(camera: CameraDescriptor) -> Self {
        Self {
            camera,
            selected: None,
        }
    }

    /// The camera this session is bound to.
    pub fn camera(&self) -> &CameraDescriptor {
        &self.camera
    }

    /// Replace the camera, invalidating the cached selection.
    pub fn switch_camera(&mut self, camera: CameraDescriptor) {
        self.camera = camera;
        self.selected = None;
    }

    /// Drop the cached selection, forcing the next lookup to recompute.
    ///
    /// Useful when the shell learns the catalog changed without the camera
    /// identity changing (a camera reopen).
    pub fn invalidate(&mut self) {
        self.selected = None;
    }

    /// The best preview size for `viewport`, cached across repeated calls.
    ///
    /// Selection is referentially transparent, so caching on the viewport
    /// alone is sound for a fixed camera.
    pub fn preview_size(&mut self, viewport: Viewport) -> Option<Resolution> {
        if let Some((cached_viewport, cached)) = self.selected {
            if cached_viewport == viewport {
                return cached;
            }
        }

        let selected = select_preview_size(&self.camera.preview_sizes, viewport);
        self.selected = Some((viewport, selected));
        selected
    }

    /// Compute everything for one surface-change event.
    ///
    /// # Arguments
    ///
    /// * `device` - Current device orientation from the platform's
    ///   rotation sensor.
    /// * `viewport` - Current surface dimensions.
    pub fn configure(&mut self, device: Orientation, viewport: Viewport) -> SurfaceConfig {
        SurfaceConfig {
            rotation: resolve(device, self.camera.mount),
            preview_size: self.preview_size(viewport),
        }
    }
}

/// The next camera index when cycling through all cameras.
///
/// Wraps back to the first camera after the last one. `camera_count` must
/// be positive; a device with no camera has nothing to cycle.
pub fn next_camera_index(current: u32, camera_count: u32) -> u32 {
    debug_assert!(camera_count > 0, "cannot cycle zero cameras");
    (current + 1) % camera_count
}
