// SPDX-License-Identifier: MPL-2.0
//! Point-in-time view of the player, read fresh on every refresh tick.

use super::newtypes::Permille;
use std::time::Duration;

/// Playback position, duration and buffering as reported by the player.
///
/// Snapshots are never cached across ticks and never mutated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub position_ms: i64,
    pub duration_ms: i64,
    pub buffer_percent: i32,
}

impl PlaybackSnapshot {
    #[must_use]
    pub fn new(position_ms: i64, duration_ms: i64, buffer_percent: i32) -> Self {
        Self {
            position_ms,
            duration_ms,
            buffer_percent,
        }
    }

    /// Seek-bar progress, or `None` while the duration is unknown.
    #[must_use]
    pub fn position_permille(&self) -> Option<Permille> {
        Permille::from_position(self.position_ms, self.duration_ms)
    }

    /// Buffered (secondary) progress.
    #[must_use]
    pub fn buffer_permille(&self) -> Permille {
        Permille::from_buffer_percent(self.buffer_percent)
    }

    /// Delay until the position crosses the next whole second.
    ///
    /// Always between 1 ms and 1000 ms, so a self-rescheduling refresh can
    /// never spin.
    #[must_use]
    pub fn next_tick_delay(&self) -> Duration {
        let position = self.position_ms.max(0);
        let remaining = 1000 - position % 1000;
        Duration::from_millis(remaining as u64)
    }
}
