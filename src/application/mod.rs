// SPDX-License-Identifier: MPL-2.0
//! Application layer - Boundaries to the platform.
//!
//! - [`port`]: Trait definitions (interfaces) for the player, audio output,
//!   window brightness and the surface hosting the overlay
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Platform adapters (and [`crate::simulated`]) implement application ports
//! - The overlay component only ever talks to the platform through ports
//!
//! # Example
//!
//! ```ignore
//! use playback_overlay::application::port::MediaPlayerControl;
//!
//! // A platform adapter implements the port trait
//! struct ExoPlayerBridge { /* ... */ }
//! impl MediaPlayerControl for ExoPlayerBridge { /* ... */ }
//! ```

pub mod port;
