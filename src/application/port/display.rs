// SPDX-License-Identifier: MPL-2.0
//! Display-side port definitions: window brightness and the overlay surface.
//!
//! # Design Notes
//!
//! - The surface owns everything pixel-related (measuring, animating,
//!   drawing); the overlay only asks it to appear at a position, disappear,
//!   change orientation or rescale the video
//! - A detached anchor is reported as `None` bounds rather than an error,
//!   because the overlay has to degrade to a no-op in that case anyway

use crate::domain::overlay::{Bounds, Orientation};
use std::fmt;

// =============================================================================
// SurfaceError
// =============================================================================

/// Failures reported by the surface hosting the overlay.
///
/// The overlay never propagates these: a surface that went away during
/// teardown is expected, so it logs and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The overlay window was already removed from the display.
    Detached,

    /// Any other platform-reported failure.
    Other(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Detached => write!(f, "Overlay surface already detached"),
            SurfaceError::Other(msg) => write!(f, "Surface error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

// =============================================================================
// BrightnessStore
// =============================================================================

/// Port for the window brightness attribute.
pub trait BrightnessStore {
    /// Current window brightness, or `None` when the window follows the
    /// system setting.
    fn brightness(&self) -> Option<f32>;

    /// Applies a brightness in `[0.01, 1.0]`.
    fn set_brightness(&mut self, value: f32);
}

// =============================================================================
// OverlaySurface
// =============================================================================

/// Port for the anchor view and the floating window the controls live in.
pub trait OverlaySurface {
    /// Screen bounds of the anchor, or `None` while it is not attached to a
    /// window.
    fn anchor_bounds(&self) -> Option<Bounds>;

    /// Measured height of the controls bar, in pixels.
    fn controls_height(&self) -> f32;

    /// Shows the controls window with its top-left corner at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the platform refuses to show the window.
    fn show_at(&mut self, x: f32, y: f32) -> Result<(), SurfaceError>;

    /// Removes the controls window from the display.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Detached`] when the window is already gone.
    fn dismiss(&mut self) -> Result<(), SurfaceError>;

    /// Asks the host to switch orientation (fullscreen toggle).
    fn request_orientation(&mut self, orientation: Orientation);

    /// Rescales the video to the given target size.
    fn apply_video_scale(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_display() {
        assert!(format!("{}", SurfaceError::Detached).contains("detached"));
        let err = SurfaceError::Other("window token gone".to_string());
        assert!(format!("{err}").contains("window token gone"));
    }
}
