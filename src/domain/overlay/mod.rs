// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! Value objects for the playback-control overlay: fixed-point progress,
//! clamped volume and brightness, playback snapshots, display geometry and
//! gesture classification. Nothing here talks to a player or a window.

pub mod display;
pub mod gesture;
pub mod newtypes;
pub mod snapshot;

// Re-export commonly used types
pub use display::{Bounds, Orientation};
pub use gesture::{classify, classify_with_zone, DragKind, DragSession};
pub use newtypes::{Brightness, Permille, VolumeRange};
pub use snapshot::PlaybackSnapshot;
