//! Device and sensor orientation resolution.
//!
//! A camera sensor is mounted at a fixed angle relative to the device
//! chassis, and the device itself is held at one of four rotations relative
//! to its natural orientation. Presenting a live preview upright and saving
//! a photo upright require two different correction angles:
//!
//! ```text
//! display (front) = (360 - ((offset + device) % 360)) % 360
//! display (back)  = (offset - device + 360) % 360
//! image   (front) = (offset + device) % 360
//! image   (back)  = (offset - device + 360) % 360
//! ```
//!
//! The front-facing formulas differ on purpose: the preview of a front
//! sensor is mirrored for the user, so the display angle folds that mirror
//! flip in, while the saved photo must not be mirrored. Collapsing the two
//! into one function breaks front-camera captures.
//!
//! All angles are plain degree values restricted to the four axis-aligned
//! multiples of 90. A rotation-matrix abstraction would buy nothing here;
//! modular arithmetic over quarter turns is exact and trivially testable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for out-of-domain angle inputs.
#[derive(Debug, Error)]
pub enum OrientationError {
    /// The supplied angle is not one of 0, 90, 180, or 270.
    #[error("angle {0} is not a canonical rotation (expected 0, 90, 180, or 270)")]
    InvalidAngle(u32),
}

/// One of the four canonical rotation angles.
///
/// Covers both the device's rotation away from its natural orientation and
/// any correction angle derived from it. Values outside the four canonical
/// multiples of 90 are unrepresentable; raw platform degrees enter through
/// [`Orientation::from_degrees`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Natural orientation.
    #[default]
    Deg0,
    /// Rotated 90 degrees.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated 270 degrees.
    Deg270,
}

/// Canonical orientations ordered by quarter turns.
const CANONICAL: [Orientation; 4] = [
    Orientation::Deg0,
    Orientation::Deg90,
    Orientation::Deg180,
    Orientation::Deg270,
];

impl Orientation {
    /// The angle in degrees (0, 90, 180, or 270).
    pub const fn degrees(self) -> u32 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// Parse a raw degree value supplied by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::InvalidAngle`] unless `degrees` is
    /// exactly 0, 90, 180, or 270. The platform contract is to always
    /// deliver canonical values, so anything else is rejected rather than
    /// normalized.
    pub fn from_degrees(degrees: u32) -> Result<Self, OrientationError> {
        match degrees {
            0 => Ok(Orientation::Deg0),
            90 => Ok(Orientation::Deg90),
            180 => Ok(Orientation::Deg180),
            270 => Ok(Orientation::Deg270),
            other => Err(OrientationError::InvalidAngle(other)),
        }
    }

    /// Returns true if applying this rotation swaps width and height.
    ///
    /// Shells use this to size a surface under a rotated preview.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }

    /// Number of quarter turns (0 to 3).
    #[inline]
    fn quarter_turns(self) -> u32 {
        self.degrees() / 90
    }

    /// Build from a quarter-turn count; any count is reduced modulo 4.
    #[inline]
    fn from_quarter_turns(turns: u32) -> Self {
        CANONICAL[(turns % 4) as usize]
    }
}

/// Which way a camera sensor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward the user (selfie camera). Previews are mirrored.
    Front,
    /// Away from the user.
    Back,
}

/// How a physical sensor is mounted on the device chassis.
///
/// Obtained once from the platform's camera enumeration and fixed for the
/// lifetime of a camera session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorMount {
    /// Rotation offset between the sensor's native pixel orientation and
    /// the chassis's natural orientation.
    pub offset: Orientation,
    /// Which way the sensor points.
    pub facing: Facing,
}

impl SensorMount {
    pub fn new(offset: Orientation, facing: Facing) -> Self {
        Self { offset, facing }
    }
}

/// The pair of correction angles for one (device, mount) state.
///
/// Recomputed on every orientation or surface change; never cached across
/// mount changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationPlan {
    /// Angle applied so the live preview appears upright.
    pub display: Orientation,
    /// Angle applied so the persisted photo appears upright.
    pub image: Orientation,
}

/// Compute the rotation that makes the live preview appear upright.
///
/// # Arguments
///
/// * `device` - How the device is currently held.
/// * `mount` - How the active sensor is mounted.
///
/// For front-facing sensors the result folds in the horizontal mirror flip
/// inherent to their on-screen presentation.
pub fn display_rotation(device: Orientation, mount: SensorMount) -> Orientation {
    let d = device.quarter_turns();
    let o = mount.offset.quarter_turns();

    let turns = match mount.facing {
        Facing::Front => 4 - (o + d) % 4,
        Facing::Back => o + 4 - d,
    };
    Orientation::from_quarter_turns(turns)
}

/// Compute the rotation that makes the persisted photo appear upright.
///
/// Same inputs as [`display_rotation`]. For back-facing sensors the two
/// functions coincide; for front-facing sensors this one omits the
/// mirror-flip fold so the saved photo is not mirrored even though the
/// preview is.
pub fn image_rotation(device: Orientation, mount: SensorMount) -> Orientation {
    let d = device.quarter_turns();
    let o = mount.offset.quarter_turns();

    let turns = match mount.facing {
        Facing::Front => o + d,
        Facing::Back => o + 4 - d,
    };
    Orientation::from_quarter_turns(turns)
}

/// Compute both correction angles for one (device, mount) state.
pub fn resolve(device: Orientation, mount: SensorMount) -> RotationPlan {
    RotationPlan {
        display: display_rotation(device, mount),
        image: image_rotation(device, mount),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
