// SPDX-License-Identifier: MPL-2.0
//! View-model of the transport controls.
//!
//! The overlay never draws. It keeps this struct consistent with the player
//! and the interaction state, and the host renders whatever it finds here.

use crate::domain::overlay::{Brightness, Permille, VolumeRange};

/// Icon shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayPauseIcon {
    /// Playback is paused; pressing plays.
    #[default]
    Play,
    /// Playback is running; pressing pauses.
    Pause,
}

impl PlayPauseIcon {
    #[must_use]
    pub fn for_playing(is_playing: bool) -> Self {
        if is_playing {
            PlayPauseIcon::Pause
        } else {
            PlayPauseIcon::Play
        }
    }
}

/// Auxiliary indicator shown while an edge swipe adjusts a device value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxIndicator {
    /// Volume, as a percentage of the device range.
    Volume(u8),
    /// Window brightness, as a percentage.
    Brightness(u8),
}

impl AuxIndicator {
    #[must_use]
    pub fn volume(index: i32, range: VolumeRange) -> Self {
        AuxIndicator::Volume(range.percent(index))
    }

    #[must_use]
    pub fn brightness(value: Brightness) -> Self {
        AuxIndicator::Brightness(value.percent())
    }
}

/// Everything the host needs to render the controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub progress: Permille,
    pub secondary_progress: Permille,
    pub current_time: String,
    pub end_time: String,
    pub play_pause: PlayPauseIcon,

    pub pause_enabled: bool,
    pub rewind_enabled: bool,
    pub fast_forward_enabled: bool,
    pub seek_bar_enabled: bool,
    pub next_enabled: bool,
    pub prev_enabled: bool,

    /// Rewind and fast-forward buttons are offered at all.
    pub rewind_fast_forward_visible: bool,
    /// Next and previous buttons are offered (listeners were installed).
    pub next_prev_visible: bool,
    pub expand_visible: bool,
    pub shrink_visible: bool,

    pub title: String,
    /// Preview text shown above the seek bar during a drag.
    pub info_text: Option<String>,
    /// Volume or brightness feedback during an edge swipe.
    pub aux_indicator: Option<AuxIndicator>,
}

impl ControlsView {
    #[must_use]
    pub fn new(use_fast_forward: bool) -> Self {
        Self {
            progress: Permille::default(),
            secondary_progress: Permille::default(),
            current_time: format_time(0),
            end_time: format_time(0),
            play_pause: PlayPauseIcon::default(),
            pause_enabled: true,
            rewind_enabled: true,
            fast_forward_enabled: true,
            seek_bar_enabled: true,
            next_enabled: false,
            prev_enabled: false,
            rewind_fast_forward_visible: use_fast_forward,
            next_prev_visible: false,
            expand_visible: true,
            shrink_visible: false,
            title: String::new(),
            info_text: None,
            aux_indicator: None,
        }
    }

    /// Updates both time labels.
    pub fn set_times(&mut self, position_ms: i64, duration_ms: i64) {
        self.current_time = format_time(position_ms);
        self.end_time = format_time(duration_ms);
    }

    /// Expand is offered when windowed, shrink when fullscreen.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.expand_visible = !fullscreen;
        self.shrink_visible = fullscreen;
    }

    #[must_use]
    pub fn is_info_visible(&self) -> bool {
        self.info_text.is_some()
    }
}

impl Default for ControlsView {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Formats a media time as `MM:SS`, or `HH:MM:SS` from one hour on.
///
/// Negative times are shown as zero.
#[must_use]
pub fn format_time(ms: i64) -> String {
    let total_secs = ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
