//! Preview size selection.
//!
//! Cameras advertise a finite catalog of supported preview resolutions; the
//! rendering surface has whatever pixel dimensions the window system gave
//! it. This module picks the catalog entry that best matches the surface,
//! preferring aspect-ratio closeness first and absolute size second.
//!
//! # Algorithm
//!
//! 1. Normalize the viewport to landscape form. Camera catalogs are
//!    expressed in landscape terms regardless of how the device is held (a
//!    platform quirk preserved here, not re-derived), so a portrait
//!    viewport compares its ratio as height/width.
//! 2. Pass 1: among candidates whose ratio is within [`ASPECT_TOLERANCE`]
//!    of the target, pick the one whose height is nearest the short
//!    normalized viewport edge.
//! 3. Pass 2: if no candidate passed the ratio filter, repeat the
//!    nearest-height search over the whole catalog.
//!
//! Selection is referentially transparent; callers that see many redundant
//! surface-change events cache the result keyed on (camera, viewport), see
//! [`crate::session::PreviewSession`].

use serde::{Deserialize, Serialize};

/// Maximum ratio distance for a candidate to pass the primary search.
///
/// The comparison is strict greater-than on the far side: a candidate whose
/// ratio distance equals the tolerance is still eligible. Flipping that
/// operator silently changes which catalog entries can win.
pub const ASPECT_TOLERANCE: f64 = 0.1;

/// A supported capture/preview size reported by a camera.
///
/// Width and height are positive and expressed in landscape terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "resolution must be positive");
        Self { width, height }
    }

    /// Width over height.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// The rendering surface's pixel dimensions at the moment of measurement.
///
/// May change across a session (device rotation, multi-window resize), so
/// it is sampled fresh for every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "viewport must be positive");
        Self { width, height }
    }

    /// True when the surface is taller than it is wide.
    #[inline]
    pub fn is_portrait(self) -> bool {
        self.width < self.height
    }

    /// The dimensions in landscape form: (long edge, short edge).
    #[inline]
    pub fn landscape(self) -> (u32, u32) {
        if self.is_portrait() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

/// Choose the catalog entry that best matches a viewport.
///
/// # Arguments
///
/// * `candidates` - The camera's supported preview sizes, in the camera's
///   reported order. Ties on height distance keep the earlier entry, so
///   the result is deterministic for a fixed catalog ordering.
/// * `viewport` - Current surface dimensions.
///
/// # Returns
///
/// `None` only when `candidates` is empty. A non-empty catalog always
/// yields a selection: if nothing is within the aspect tolerance the
/// fallback pass ignores ratio entirely.
///
/// # Example
///
/// ```
/// use camtimer_core::preview::{select_preview_size, Resolution, Viewport};
///
/// let catalog = [
///     Resolution::new(1920, 1080),
///     Resolution::new(1280, 720),
///     Resolution::new(640, 480),
/// ];
///
/// // Portrait surface normalizes to 1920x1080, an exact catalog match.
/// let best = select_preview_size(&catalog, Viewport::new(1080, 1920));
/// assert_eq!(best, Some(Resolution::new(1920, 1080)));
/// ```
pub fn select_preview_size(
    candidates: &[Resolution],
    viewport: Viewport,
) -> Option<Resolution> {
    let (long_edge, short_edge) = viewport.landscape();

    let target_ratio = long_edge as f64 / short_edge as f64;
    let target_height = short_edge;

    let mut optimal: Option<Resolution> = None;
    let mut min_difference = u32::MAX;

    // Pass 1: ratio-constrained nearest height.
    for &candidate in candidates {
        if (candidate.aspect_ratio() - target_ratio).abs() > ASPECT_TOLERANCE {
            continue;
        }

        let difference = candidate.height.abs_diff(target_height);
        if difference < min_difference {
            optimal = Some(candidate);
            min_difference = difference;
        }
    }

    // Pass 2: nothing within tolerance, so drop the ratio requirement and
    // take the nearest height overall.
    if optimal.is_none() {
        min_difference = u32::MAX;

        for &candidate in candidates {
            let difference = candidate.height.abs_diff(target_height);
            if difference < min_difference {
                optimal = Some(candidate);
                min_difference = difference;
            }
        }
    }

    optimal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Resolution> {
        vec![
            Resolution::new(1920, 1080),
            Resolution::new(1280, 720),
            Resolution::new(640, 480),
        ]
    }

    #[test]
    fn test_portrait_viewport_exact_match() {
        let best = select_preview_size(&catalog(), Viewport::new(1080, 1920));
        assert_eq!(best, Some(Resolution::new(1920, 1080)));
    }

    #[test]
    fn test_landscape_viewport_exact_match() {
        let best = select_preview_size(&catalog(), Viewport::new(1920, 1080));
        assert_eq!(best, Some(Resolution::new(1920, 1080)));
    }

    #[test]
    fn test_prefers_nearest_height_within_tolerance() {
        // 16:9 surface at 720 lines: both 16:9 entries pass the ratio
        // filter, 1280x720 wins on height distance.
        let best = select_preview_size(&catalog(), Viewport::new(1280, 720));
        assert_eq!(best, Some(Resolution::new(1280, 720)));
    }

    #[test]
    fn test_empty_catalog_yields_none() {
        assert_eq!(select_preview_size(&[], Viewport::new(1080, 1920)), None);
        assert_eq!(select_preview_size(&[], Viewport::new(320, 240)), None);
    }

    #[test]
    fn test_fallback_when_nothing_within_tolerance() {
        // A square surface (ratio 1.0) is far from every 16:9 or 4:3
        // candidate, so pass 2 picks by height distance alone.
        let catalog = [Resolution::new(1920, 1080), Resolution::new(1280, 720)];
        let best = select_preview_size(&catalog, Viewport::new(700, 700));
        assert_eq!(best, Some(Resolution::new(1280, 720)));
    }

    #[test]
    fn test_fallback_never_none_for_non_empty_catalog() {
        // Single wildly mismatched candidate still gets selected.
        let catalog = [Resolution::new(4000, 100)];
        let best = select_preview_size(&catalog, Viewport::new(1080, 1920));
        assert_eq!(best, Some(Resolution::new(4000, 100)));
    }

    #[test]
    fn test_ratio_filter_brackets_the_tolerance() {
        // Square target (ratio 1.0). 109/100 sits inside the tolerance,
        // 112/100 outside; the inside candidate wins pass 1 even though the
        // outside one is nearer in height.
        let catalog = [Resolution::new(112, 100), Resolution::new(109, 104)];
        let best = select_preview_size(&catalog, Viewport::new(100, 100));
        assert_eq!(best, Some(Resolution::new(109, 104)));
    }

    #[test]
    fn test_ties_keep_first_catalog_entry() {
        // Equidistant heights (480 vs 560 around a 520-line target); the
        // earlier entry is kept.
        let catalog = [Resolution::new(640, 480), Resolution::new(747, 560)];
        let best = select_preview_size(&catalog, Viewport::new(693, 520));
        assert_eq!(best, Some(Resolution::new(640, 480)));
    }

    #[test]
    fn test_portrait_and_landscape_agree() {
        // Swapping viewport axes must not change the outcome.
        let portrait = select_preview_size(&catalog(), Viewport::new(720, 1280));
        let landscape = select_preview_size(&catalog(), Viewport::new(1280, 720));
        assert_eq!(portrait, landscape);
    }

    #[test]
    fn test_viewport_landscape_normalization() {
        assert!(Viewport::new(1080, 1920).is_portrait());
        assert!(!Viewport::new(1920, 1080).is_portrait());
        assert_eq!(Viewport::new(1080, 1920).landscape(), (1920, 1080));
        assert_eq!(Viewport::new(1920, 1080).landscape(), (1920, 1080));
        // A square surface counts as landscape.
        assert_eq!(Viewport::new(500, 500).landscape(), (500, 500));
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((Resolution::new(1920, 1080).aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert!((Resolution::new(640, 480).aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
