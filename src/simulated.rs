// SPDX-License-Identifier: MPL-2.0
//! In-process implementations of every port.
//!
//! The simulator binary wires these into a [`crate::overlay::MediaOverlay`]
//! and tests use them as doubles. Each type is a cheap shared handle: clone
//! one into the overlay and keep the other to drive or inspect it.

use crate::application::port::{
    BrightnessStore, MediaPlayerControl, OverlaySurface, SurfaceError, VolumeOutput,
};
use crate::domain::overlay::{Bounds, Orientation};
use crate::overlay::Clock;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;
use tracing::trace;

// =============================================================================
// SimulatedPlayer
// =============================================================================

#[derive(Debug)]
struct PlayerState {
    duration_ms: i64,
    /// Position when playback last started, paused or seeked.
    anchor_position_ms: i64,
    playing_since: Option<Instant>,
    buffer_percent: i32,
    can_pause: bool,
    can_seek_backward: bool,
    can_seek_forward: bool,
    seeks: Vec<i64>,
}

struct PlayerInner {
    clock: Box<dyn Clock>,
    state: RefCell<PlayerState>,
    reads: Cell<usize>,
}

/// Player whose position advances with its clock while playing.
#[derive(Clone)]
pub struct SimulatedPlayer {
    inner: Rc<PlayerInner>,
}

impl SimulatedPlayer {
    /// Creates a paused player at position zero, fully buffered.
    #[must_use]
    pub fn new(duration_ms: i64, clock: impl Clock + 'static) -> Self {
        Self {
            inner: Rc::new(PlayerInner {
                clock: Box::new(clock),
                state: RefCell::new(PlayerState {
                    duration_ms,
                    anchor_position_ms: 0,
                    playing_since: None,
                    buffer_percent: 100,
                    can_pause: true,
                    can_seek_backward: true,
                    can_seek_forward: true,
                    seeks: Vec::new(),
                }),
                reads: Cell::new(0),
            }),
        }
    }

    fn position_at(&self, state: &PlayerState) -> i64 {
        let elapsed = state.playing_since.map_or(0, |since| {
            let millis = self.inner.clock.now().saturating_duration_since(since).as_millis();
            i64::try_from(millis).unwrap_or(i64::MAX)
        });
        let position = state.anchor_position_ms.saturating_add(elapsed);
        if state.duration_ms > 0 {
            position.clamp(0, state.duration_ms)
        } else {
            position.max(0)
        }
    }

    /// Current position, without counting as a player read.
    #[must_use]
    pub fn position_ms(&self) -> i64 {
        self.position_at(&self.inner.state.borrow())
    }

    /// Moves the position without recording a seek.
    pub fn set_position(&self, position_ms: i64) {
        let mut state = self.inner.state.borrow_mut();
        state.anchor_position_ms = position_ms;
        if state.playing_since.is_some() {
            state.playing_since = Some(self.inner.clock.now());
        }
    }

    pub fn set_buffer_percent(&self, percent: i32) {
        self.inner.state.borrow_mut().buffer_percent = percent;
    }

    pub fn set_capabilities(&self, can_pause: bool, can_seek_backward: bool, can_seek_forward: bool) {
        let mut state = self.inner.state.borrow_mut();
        state.can_pause = can_pause;
        state.can_seek_backward = can_seek_backward;
        state.can_seek_forward = can_seek_forward;
    }

    /// Starts playback from the host side.
    pub fn start_playing(&self) {
        let mut state = self.inner.state.borrow_mut();
        if state.playing_since.is_none() {
            state.playing_since = Some(self.inner.clock.now());
        }
    }

    #[must_use]
    pub fn is_playing_now(&self) -> bool {
        self.inner.state.borrow().playing_since.is_some()
    }

    /// Every position passed to `seek_to`, in order.
    #[must_use]
    pub fn seeks(&self) -> Vec<i64> {
        self.inner.state.borrow().seeks.clone()
    }

    /// Number of position, duration and buffer reads made through the port.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.inner.reads.get()
    }

    fn count_read(&self) {
        self.inner.reads.set(self.inner.reads.get() + 1);
    }
}

impl MediaPlayerControl for SimulatedPlayer {
    fn start(&mut self) {
        self.start_playing();
    }

    fn pause(&mut self) {
        let mut state = self.inner.state.borrow_mut();
        let position = self.position_at(&state);
        state.anchor_position_ms = position;
        state.playing_since = None;
    }

    fn is_playing(&self) -> bool {
        self.is_playing_now()
    }

    fn duration_ms(&self) -> i64 {
        self.count_read();
        self.inner.state.borrow().duration_ms
    }

    fn current_position_ms(&self) -> i64 {
        self.count_read();
        self.position_ms()
    }

    fn seek_to(&mut self, position_ms: i64) {
        trace!(position_ms, "simulated seek");
        self.set_position(position_ms);
        self.inner.state.borrow_mut().seeks.push(position_ms);
    }

    fn buffer_percentage(&self) -> i32 {
        self.count_read();
        self.inner.state.borrow().buffer_percent
    }

    fn can_pause(&self) -> bool {
        self.inner.state.borrow().can_pause
    }

    fn can_seek_backward(&self) -> bool {
        self.inner.state.borrow().can_seek_backward
    }

    fn can_seek_forward(&self) -> bool {
        self.inner.state.borrow().can_seek_forward
    }
}

// =============================================================================
// SimulatedAudio
// =============================================================================

#[derive(Debug, Default)]
struct AudioState {
    volume: i32,
    max_volume: i32,
    muted: bool,
    mute_calls: Vec<bool>,
}

/// Audio stream with an index-based volume.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAudio {
    state: Rc<RefCell<AudioState>>,
}

impl SimulatedAudio {
    #[must_use]
    pub fn new(volume: i32, max_volume: i32) -> Self {
        Self {
            state: Rc::new(RefCell::new(AudioState {
                volume,
                max_volume,
                ..AudioState::default()
            })),
        }
    }

    #[must_use]
    pub fn volume_now(&self) -> i32 {
        self.state.borrow().volume
    }

    /// Changes the volume from outside the overlay (hardware keys, other apps).
    pub fn set_volume_now(&self, volume: i32) {
        self.state.borrow_mut().volume = volume;
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    /// Every `set_muted` call, in order.
    #[must_use]
    pub fn mute_calls(&self) -> Vec<bool> {
        self.state.borrow().mute_calls.clone()
    }
}

impl VolumeOutput for SimulatedAudio {
    fn volume(&self) -> i32 {
        self.volume_now()
    }

    fn set_volume(&mut self, index: i32) {
        self.set_volume_now(index);
    }

    fn max_volume(&self) -> i32 {
        self.state.borrow().max_volume
    }

    fn set_muted(&mut self, muted: bool) {
        let mut state = self.state.borrow_mut();
        state.muted = muted;
        state.mute_calls.push(muted);
    }
}

// =============================================================================
// SimulatedWindow
// =============================================================================

/// Window brightness attribute; `None` follows the system setting.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWindow {
    brightness: Rc<Cell<Option<f32>>>,
}

impl SimulatedWindow {
    #[must_use]
    pub fn new(brightness: Option<f32>) -> Self {
        Self {
            brightness: Rc::new(Cell::new(brightness)),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<f32> {
        self.brightness.get()
    }

    pub fn set_current(&self, brightness: Option<f32>) {
        self.brightness.set(brightness);
    }
}

impl BrightnessStore for SimulatedWindow {
    fn brightness(&self) -> Option<f32> {
        self.current()
    }

    fn set_brightness(&mut self, value: f32) {
        self.brightness.set(Some(value));
    }
}

// =============================================================================
// SimulatedSurface
// =============================================================================

#[derive(Debug, Default)]
struct SurfaceState {
    bounds: Option<Bounds>,
    controls_height: f32,
    shown_at: Vec<(f32, f32)>,
    dismissals: usize,
    fail_dismissals: bool,
    orientation_requests: Vec<Orientation>,
    video_scale: Option<(u32, u32)>,
}

/// Anchor view plus the floating controls window.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl SimulatedSurface {
    #[must_use]
    pub fn new(bounds: Bounds, controls_height: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                bounds: Some(bounds),
                controls_height,
                ..SurfaceState::default()
            })),
        }
    }

    /// Detaches the anchor from its window.
    pub fn detach(&self) {
        self.state.borrow_mut().bounds = None;
    }

    /// Makes every following dismissal fail as already detached.
    pub fn fail_dismissals(&self, fail: bool) {
        self.state.borrow_mut().fail_dismissals = fail;
    }

    /// Positions the controls window was shown at, in order.
    #[must_use]
    pub fn shown_at(&self) -> Vec<(f32, f32)> {
        self.state.borrow().shown_at.clone()
    }

    #[must_use]
    pub fn dismissals(&self) -> usize {
        self.state.borrow().dismissals
    }

    #[must_use]
    pub fn orientation_requests(&self) -> Vec<Orientation> {
        self.state.borrow().orientation_requests.clone()
    }

    #[must_use]
    pub fn video_scale(&self) -> Option<(u32, u32)> {
        self.state.borrow().video_scale
    }
}

impl OverlaySurface for SimulatedSurface {
    fn anchor_bounds(&self) -> Option<Bounds> {
        self.state.borrow().bounds
    }

    fn controls_height(&self) -> f32 {
        self.state.borrow().controls_height
    }

    fn show_at(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if state.bounds.is_none() {
            return Err(SurfaceError::Detached);
        }
        state.shown_at.push((x, y));
        Ok(())
    }

    fn dismiss(&mut self) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        state.dismissals += 1;
        if state.fail_dismissals {
            return Err(SurfaceError::Detached);
        }
        Ok(())
    }

    fn request_orientation(&mut self, orientation: Orientation) {
        self.state.borrow_mut().orientation_requests.push(orientation);
    }

    fn apply_video_scale(&mut self, width: u32, height: u32) {
        self.state.borrow_mut().video_scale = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::ManualClock;
    use std::time::Duration;

    #[test]
    fn player_position_follows_clock_while_playing() {
        let clock = ManualClock::new();
        let mut player = SimulatedPlayer::new(10_000, clock.clone());

        player.start();
        clock.advance(Duration::from_millis(2_500));
        assert_eq!(player.position_ms(), 2_500);

        player.pause();
        clock.advance(Duration::from_millis(1_000));
        assert_eq!(player.position_ms(), 2_500);
    }

    #[test]
    fn player_position_stops_at_duration() {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(1_000, clock.clone());
        player.start_playing();
        clock.advance(Duration::from_secs(5));
        assert_eq!(player.position_ms(), 1_000);
    }

    #[test]
    fn player_counts_port_reads_only() {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(1_000, clock);

        let _ = player.position_ms();
        assert_eq!(player.read_count(), 0);

        let _ = player.snapshot();
        assert_eq!(player.read_count(), 3);
    }

    #[test]
    fn seek_is_recorded_and_moves_position() {
        let clock = ManualClock::new();
        let mut player = SimulatedPlayer::new(60_000, clock);
        player.seek_to(42_000);

        assert_eq!(player.position_ms(), 42_000);
        assert_eq!(player.seeks(), vec![42_000]);
    }

    #[test]
    fn audio_records_mute_calls() {
        let mut audio = SimulatedAudio::new(3, 15);
        audio.set_muted(true);
        audio.set_muted(false);
        assert_eq!(audio.mute_calls(), vec![true, false]);
        assert!(!audio.is_muted());
    }

    #[test]
    fn detached_surface_refuses_to_show() {
        let mut surface = SimulatedSurface::new(Bounds::new(0.0, 0.0, 10.0, 10.0), 2.0);
        surface.detach();
        assert_eq!(surface.show_at(0.0, 8.0), Err(SurfaceError::Detached));
    }
}
