// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` is the control core of a video playback overlay.
//!
//! It decides when transport controls are visible, keeps their progress
//! display in step with an external player, and maps drag gestures to seek
//! position, device volume and window brightness. Decoding, rendering and
//! window management stay behind the traits in [`application::port`].
//!
//! # Layout
//!
//! - [`domain`]: pure value types (progress scale, clamped volume and
//!   brightness, gesture classification)
//! - [`application::port`]: traits for the player, audio, window and surface
//! - [`overlay`]: the stateful [`overlay::MediaOverlay`] component
//! - [`runtime`]: tokio driver that fires the overlay's timers
//! - [`simulated`]: in-process port implementations
//! - [`config`], [`diagnostics`], [`error`]: ambient support

#![doc(html_root_url = "https://docs.rs/playback_overlay/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod overlay;
pub mod runtime;
pub mod simulated;

#[cfg(test)]
mod test_utils;
