// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for overlay activity tracking.

use serde::Serialize;

/// Which continuous control a drag session drove.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DragControl {
    Seek,
    Volume,
    Brightness,
}

/// A single diagnostic event, stamped relative to collection start.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Milliseconds since the collector was created.
    pub at_ms: u64,
    /// The type and data of the event.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Overlay transitioned from hidden to visible.
    Shown,

    /// Overlay transitioned from visible to hidden.
    Hidden,

    /// Auto-fade fired during a drag and was postponed.
    FadeDeferred,

    /// A drag session opened.
    DragStarted { control: DragControl },

    /// A drag session closed normally.
    DragEnded { control: DragControl },

    /// A drag session was interrupted.
    DragCanceled { control: DragControl },

    /// A seek was applied to the player.
    Seeked { position_ms: i64 },

    /// Volume index applied to the audio output.
    VolumeChanged { index: i32, max: i32 },

    /// Brightness applied to the window.
    BrightnessChanged { value: f32 },

    /// Fullscreen state changed.
    FullscreenChanged { fullscreen: bool },

    /// Non-critical issue absorbed by the overlay.
    Warning { message: String },
}
