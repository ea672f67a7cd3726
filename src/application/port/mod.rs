// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! These traits use only domain types, ensuring the overlay remains
//! independent of any concrete player, audio stack or windowing system.
//!
//! # Available Ports
//!
//! - [`player`]: Transport control of the underlying media player
//! - [`audio`]: Device volume and mute
//! - [`display`]: Window brightness and the surface the overlay floats on
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Everything is driven from one control-flow context, so nothing here
//!   is `Send` or `Sync`
//! - Only [`display::OverlaySurface`] can fail; the overlay absorbs those
//!   failures instead of propagating them

pub mod audio;
pub mod display;
pub mod player;

// Re-export main types for convenience
pub use audio::VolumeOutput;
pub use display::{BrightnessStore, OverlaySurface, SurfaceError};
pub use player::MediaPlayerControl;
