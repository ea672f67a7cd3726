// SPDX-License-Identifier: MPL-2.0
//! Overlay newtypes.
//!
//! This module provides type-safe wrappers for the values the overlay
//! displays or applies, ensuring they are always within valid ranges.

// =============================================================================
// Permille
// =============================================================================

/// Bounds of the 0–1000 fixed-point progress scale.
pub mod permille_bounds {
    /// Start of the scale.
    pub const MIN: u16 = 0;
    /// End of the scale (the whole media).
    pub const MAX: u16 = 1000;
}

/// Progress on a 0–1000 fixed-point scale.
///
/// Used for the seek bar position and the buffered (secondary) progress.
///
/// # Example
///
/// ```
/// use playback_overlay::domain::overlay::Permille;
///
/// let half = Permille::new(500);
/// assert_eq!(half.target_ms(120_000), 60_000);
///
/// // Values outside the scale are clamped
/// assert_eq!(Permille::new(1500).value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Permille(u16);

impl Permille {
    /// Creates a progress value, clamping to the 0–1000 scale.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(
            i64::from(permille_bounds::MIN),
            i64::from(permille_bounds::MAX),
        );
        Self(clamped as u16)
    }

    /// Progress of `position_ms` through `duration_ms`.
    ///
    /// Returns `None` when the duration is unknown (zero or negative).
    #[must_use]
    pub fn from_position(position_ms: i64, duration_ms: i64) -> Option<Self> {
        if duration_ms <= 0 {
            return None;
        }
        Some(Self::new(position_ms.saturating_mul(1000) / duration_ms))
    }

    /// Buffered percentage (0–100) expressed on the 0–1000 scale.
    #[must_use]
    pub fn from_buffer_percent(percent: i32) -> Self {
        Self::new(i64::from(percent.clamp(0, 100)) * 10)
    }

    /// Media position this progress points at, for a media of `duration_ms`.
    #[must_use]
    pub fn target_ms(self, duration_ms: i64) -> i64 {
        duration_ms.max(0).saturating_mul(i64::from(self.0)) / 1000
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

// =============================================================================
// Brightness
// =============================================================================

/// Brightness bounds applied to the window attribute.
pub mod brightness_bounds {
    /// Dimmest brightness ever applied.
    pub const MIN: f32 = 0.01;
    /// Full brightness.
    pub const MAX: f32 = 1.0;
    /// Brightness assumed when the window has none set.
    pub const DEFAULT: f32 = 0.5;
}

/// Window brightness, guaranteed to be within `[0.01, 1.0]`.
///
/// The floor is above zero because a fully dark window cannot be recovered
/// from by looking at it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

impl Brightness {
    /// Creates a brightness level, clamping to valid range.
    ///
    /// NaN falls back to the default level.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(brightness_bounds::MIN, brightness_bounds::MAX))
    }

    /// Starting point for a brightness swipe.
    ///
    /// An unset or non-positive window brightness starts from the default.
    #[must_use]
    pub fn origin_from(current: Option<f32>) -> Self {
        match current {
            Some(value) if value > 0.0 => Self::new(value),
            _ => Self::default(),
        }
    }

    /// Returns the brightness value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Brightness as a whole percentage, for the on-screen indicator.
    #[must_use]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(brightness_bounds::DEFAULT)
    }
}

// =============================================================================
// VolumeRange
// =============================================================================

/// Device volume range `[0, max]` in output-specific index units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    max: i32,
}

impl VolumeRange {
    /// Creates a range; a negative maximum collapses to zero.
    #[must_use]
    pub fn new(max: i32) -> Self {
        Self { max: max.max(0) }
    }

    #[must_use]
    pub fn max(self) -> i32 {
        self.max
    }

    /// Clamps an index into the range.
    #[must_use]
    pub fn clamp(self, index: i64) -> i32 {
        index.clamp(0, i64::from(self.max)) as i32
    }

    /// Index as a whole percentage of the range, for the indicator.
    #[must_use]
    pub fn percent(self, index: i32) -> u8 {
        if self.max == 0 {
            return 0;
        }
        let clamped = self.clamp(i64::from(index));
        ((f64::from(clamped) * 100.0) / f64::from(self.max)).round() as u8
    }
}
