// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Auto-fade timeout, seek pinning and transport steps
//! - **Gestures**: Edge zones and auxiliary indicator debounce
//! - **Orientation**: Video scale targets per orientation
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default auto-fade timeout for the controls overlay (in milliseconds).
pub const DEFAULT_OVERLAY_TIMEOUT_MS: u64 = 3_000;

/// Minimum configurable auto-fade timeout (in milliseconds).
pub const MIN_OVERLAY_TIMEOUT_MS: u64 = 500;

/// Maximum configurable auto-fade timeout (in milliseconds).
pub const MAX_OVERLAY_TIMEOUT_MS: u64 = 60_000;

/// Timeout used to pin the overlay while the seek bar is dragged (one hour).
pub const SEEK_PIN_TIMEOUT_MS: u64 = 3_600_000;

/// Delay before the progress loop resumes after a seek drag is released.
pub const SEEK_RESUME_DELAY_MS: u64 = 1_000;

/// Default rewind / fast-forward step (in milliseconds).
pub const DEFAULT_SEEK_STEP_MS: i64 = 15_000;

/// Minimum rewind / fast-forward step (in milliseconds).
pub const MIN_SEEK_STEP_MS: i64 = 1_000;

/// Maximum rewind / fast-forward step (in milliseconds).
pub const MAX_SEEK_STEP_MS: i64 = 120_000;

/// Whether intermediate seek-bar positions are applied to the player live.
pub const DEFAULT_INSTANT_SEEKING: bool = true;

/// Whether rewind / fast-forward buttons are offered.
pub const DEFAULT_USE_FAST_FORWARD: bool = true;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Fraction of the screen width on each side that maps vertical swipes
/// to brightness (left) and volume (right).
pub const DEFAULT_EDGE_ZONE_FRACTION: f32 = 0.2;

/// Smallest accepted edge zone fraction.
pub const MIN_EDGE_ZONE_FRACTION: f32 = 0.05;

/// Largest accepted edge zone fraction (zones must not overlap).
pub const MAX_EDGE_ZONE_FRACTION: f32 = 0.5;

/// Debounce before the volume/brightness indicator hides after a swipe.
pub const DEFAULT_INDICATOR_HIDE_DELAY_MS: u64 = 500;

/// Brightness assumed when the window has none set yet.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Lowest brightness applied to the window.
pub const MIN_BRIGHTNESS: f32 = 0.01;

/// Highest brightness applied to the window.
pub const MAX_BRIGHTNESS: f32 = 1.0;

// ==========================================================================
// Orientation Defaults
// ==========================================================================

/// Video scale target when the device is in landscape.
pub const DEFAULT_LANDSCAPE_SCALE: (u32, u32) = (1770, 1080);

/// Video scale target when the device is in portrait.
pub const DEFAULT_PORTRAIT_SCALE: (u32, u32) = (1080, 800);

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Overlay timeout validation
    assert!(MIN_OVERLAY_TIMEOUT_MS > 0);
    assert!(MAX_OVERLAY_TIMEOUT_MS >= MIN_OVERLAY_TIMEOUT_MS);
    assert!(DEFAULT_OVERLAY_TIMEOUT_MS >= MIN_OVERLAY_TIMEOUT_MS);
    assert!(DEFAULT_OVERLAY_TIMEOUT_MS <= MAX_OVERLAY_TIMEOUT_MS);
    assert!(SEEK_PIN_TIMEOUT_MS > MAX_OVERLAY_TIMEOUT_MS);

    // Seek step validation
    assert!(MIN_SEEK_STEP_MS > 0);
    assert!(MAX_SEEK_STEP_MS >= MIN_SEEK_STEP_MS);
    assert!(DEFAULT_SEEK_STEP_MS >= MIN_SEEK_STEP_MS);
    assert!(DEFAULT_SEEK_STEP_MS <= MAX_SEEK_STEP_MS);

    // Edge zone validation
    assert!(MIN_EDGE_ZONE_FRACTION > 0.0);
    assert!(MAX_EDGE_ZONE_FRACTION <= 0.5);
    assert!(DEFAULT_EDGE_ZONE_FRACTION >= MIN_EDGE_ZONE_FRACTION);
    assert!(DEFAULT_EDGE_ZONE_FRACTION <= MAX_EDGE_ZONE_FRACTION);

    // Brightness validation
    assert!(MIN_BRIGHTNESS > 0.0);
    assert!(MAX_BRIGHTNESS >= MIN_BRIGHTNESS);
    assert!(DEFAULT_BRIGHTNESS >= MIN_BRIGHTNESS);
    assert!(DEFAULT_BRIGHTNESS <= MAX_BRIGHTNESS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
