// SPDX-License-Identifier: MPL-2.0
//! Audio output port definition.

/// Port for the device audio stream the video plays on.
///
/// Volume is expressed in device index units in `[0, max_volume()]`.
pub trait VolumeOutput {
    /// Current volume index.
    fn volume(&self) -> i32;

    /// Applies a volume index. Callers clamp before calling.
    fn set_volume(&mut self, index: i32);

    /// Highest volume index the device supports.
    fn max_volume(&self) -> i32;

    /// Mutes or unmutes the stream without touching the volume index.
    fn set_muted(&mut self, muted: bool);
}
