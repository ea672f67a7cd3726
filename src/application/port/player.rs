// SPDX-License-Identifier: MPL-2.0
//! Media player port definition.
//!
//! The overlay treats the decode/render pipeline as an opaque capability:
//! it can start, pause and seek it, and it polls position, duration and
//! buffering on every refresh tick.

use crate::domain::overlay::PlaybackSnapshot;

/// Port for transport control of the underlying media player.
///
/// Positions and durations are in milliseconds. A duration of zero or less
/// means "not known yet" (e.g. a stream still preparing).
///
/// # Example
///
/// ```
/// use playback_overlay::application::port::MediaPlayerControl;
///
/// fn toggle(player: &mut dyn MediaPlayerControl) {
///     if player.is_playing() {
///         player.pause();
///     } else {
///         player.start();
///     }
/// }
/// ```
pub trait MediaPlayerControl {
    /// Starts or resumes playback.
    fn start(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns true while media is playing.
    fn is_playing(&self) -> bool;

    /// Total media duration in milliseconds.
    fn duration_ms(&self) -> i64;

    /// Current playback position in milliseconds.
    fn current_position_ms(&self) -> i64;

    /// Moves playback to `position_ms`.
    fn seek_to(&mut self, position_ms: i64);

    /// Percentage of the media buffered so far (0–100).
    fn buffer_percentage(&self) -> i32;

    /// Whether playback can be paused (false for some live streams).
    fn can_pause(&self) -> bool;

    /// Whether seeking backward is supported.
    fn can_seek_backward(&self) -> bool;

    /// Whether seeking forward is supported.
    fn can_seek_forward(&self) -> bool;

    /// Reads position, duration and buffering for one refresh tick.
    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot::new(
            self.current_position_ms(),
            self.duration_ms(),
            self.buffer_percentage(),
        )
    }
}
