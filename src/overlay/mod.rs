// SPDX-License-Identifier: MPL-2.0
//! Playback-control overlay.
//!
//! [`MediaOverlay`] owns the visibility state machine, the auto-fade and
//! progress-refresh timers, the controls view-model and the gesture-to-value
//! controller for seek, volume and brightness drags. Everything it talks to
//! (player, audio output, window brightness, the floating surface) is an
//! optional port, and every operation degrades to a no-op when the port it
//! needs is missing.
//!
//! # State machine
//!
//! ```text
//! Hidden --show--> Visible --hide | fade--> Hidden
//!                  Visible --show--> Visible (fade re-armed)
//! ```
//!
//! A fade that fires while a drag suppresses auto-fade does not hide the
//! overlay. It is deferred and re-armed with the default timeout once the
//! drag ends.
//!
//! # Driving the overlay
//!
//! Nothing here runs by itself. Hosts feed input through [`MediaOverlay::handle`]
//! (or the dedicated methods), sleep until [`MediaOverlay::next_deadline`],
//! then call [`MediaOverlay::poll_timers`]. [`crate::runtime::run`] does
//! exactly that on a tokio current-thread runtime.

mod controls;
mod gesture;
mod keys;
mod scheduler;
mod seek;

pub use controls::{format_time, AuxIndicator, ControlsView, PlayPauseIcon};
pub use keys::Key;
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerKind};

use crate::application::port::{
    BrightnessStore, MediaPlayerControl, OverlaySurface, SurfaceError, VolumeOutput,
};
use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
use crate::domain::overlay::{DragSession, Orientation, Permille, PlaybackSnapshot};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Callback installed by the host (shown/hidden notifications, next/prev).
pub type Listener = Box<dyn FnMut()>;

// =============================================================================
// Options
// =============================================================================

/// Tunables of the overlay, resolved from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    /// Auto-fade timeout used by every plain `show`.
    pub default_timeout: Duration,
    /// Apply intermediate seek positions live (and mute while scrubbing).
    pub instant_seeking: bool,
    /// Rewind / fast-forward step in milliseconds.
    pub seek_step_ms: i64,
    pub use_fast_forward: bool,
    /// Width of each edge swipe zone, as a fraction of the screen width.
    pub edge_zone_fraction: f32,
    /// Debounce before the volume/brightness indicator hides.
    pub indicator_hide_delay: Duration,
    pub landscape_scale: (u32, u32),
    pub portrait_scale: (u32, u32),
    pub diagnostics_capacity: BufferCapacity,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_millis(config::DEFAULT_OVERLAY_TIMEOUT_MS),
            instant_seeking: config::DEFAULT_INSTANT_SEEKING,
            seek_step_ms: config::DEFAULT_SEEK_STEP_MS,
            use_fast_forward: config::DEFAULT_USE_FAST_FORWARD,
            edge_zone_fraction: config::DEFAULT_EDGE_ZONE_FRACTION,
            indicator_hide_delay: Duration::from_millis(config::DEFAULT_INDICATOR_HIDE_DELAY_MS),
            landscape_scale: config::DEFAULT_LANDSCAPE_SCALE,
            portrait_scale: config::DEFAULT_PORTRAIT_SCALE,
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}

impl From<&Config> for OverlayOptions {
    /// Resolves options from a loaded config, clamping out-of-range values.
    fn from(settings: &Config) -> Self {
        let defaults = Self::default();
        let overlay = &settings.overlay;
        let gestures = &settings.gestures;

        Self {
            default_timeout: overlay
                .default_timeout_ms
                .map_or(defaults.default_timeout, |ms| {
                    Duration::from_millis(
                        ms.clamp(config::MIN_OVERLAY_TIMEOUT_MS, config::MAX_OVERLAY_TIMEOUT_MS),
                    )
                }),
            instant_seeking: overlay.instant_seeking.unwrap_or(defaults.instant_seeking),
            seek_step_ms: overlay.seek_step_ms.map_or(defaults.seek_step_ms, |ms| {
                ms.clamp(config::MIN_SEEK_STEP_MS, config::MAX_SEEK_STEP_MS)
            }),
            use_fast_forward: overlay.use_fast_forward.unwrap_or(defaults.use_fast_forward),
            edge_zone_fraction: gestures
                .edge_zone_fraction
                .filter(|fraction| fraction.is_finite())
                .map_or(defaults.edge_zone_fraction, |fraction| {
                    fraction.clamp(config::MIN_EDGE_ZONE_FRACTION, config::MAX_EDGE_ZONE_FRACTION)
                }),
            indicator_hide_delay: gestures
                .indicator_hide_delay_ms
                .map_or(defaults.indicator_hide_delay, Duration::from_millis),
            landscape_scale: settings
                .orientation
                .landscape_scale
                .unwrap_or(defaults.landscape_scale),
            portrait_scale: settings
                .orientation
                .portrait_scale
                .unwrap_or(defaults.portrait_scale),
            diagnostics_capacity: settings
                .diagnostics
                .buffer_capacity
                .map_or(defaults.diagnostics_capacity, BufferCapacity::new),
        }
    }
}

// =============================================================================
// State, Messages, Effects
// =============================================================================

/// Visibility and fade suppression flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
    /// Set only while a drag is in progress; the fade timer honours it.
    pub suppress_auto_fade: bool,
    /// A fade fired while suppressed and is owed once the drag ends.
    pub fade_deferred: bool,
}

/// Every input the overlay reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer pressed on the video surface.
    GestureDown { x: f32, y: f32 },
    /// Pointer moved while pressed.
    GestureMove { y: f32 },
    /// Pointer released.
    GestureUp,
    /// Gesture interrupted by the platform.
    GestureCancel,
    /// Touch or trackball input on the controls themselves.
    OverlayTouched,
    SeekStarted,
    SeekChanged(Permille),
    SeekReleased,
    SeekCanceled,
    TogglePause,
    Rewind,
    FastForward,
    Expand,
    Shrink,
    Next,
    Prev,
    Key { key: Key, repeat: u32 },
    /// Orientation changed; `None` uses the configured scale target.
    OrientationChanged {
        orientation: Orientation,
        scale: Option<(u32, u32)>,
    },
    ScreenResized { width: f32, height: f32 },
    Show(Duration),
    Hide,
    /// Stops the runtime driver.
    Shutdown,
}

/// Outcome of [`MediaOverlay::handle`] the host may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A key was not consumed and should propagate to the host.
    KeyUnhandled,
    /// The host asked the driver to stop.
    Shutdown,
}

/// Pointer state between a gesture's down and up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pointer {
    start_y: f32,
    moved: bool,
}

// =============================================================================
// MediaOverlay
// =============================================================================

/// The playback-control overlay component.
pub struct MediaOverlay {
    options: OverlayOptions,
    clock: Box<dyn Clock>,
    scheduler: Scheduler,
    state: OverlayState,
    drag: Option<DragSession>,
    pointer: Option<Pointer>,
    controls: ControlsView,
    /// Duration seen by the last refresh, used to map seek-bar progress.
    duration_ms: i64,
    fullscreen: bool,
    scale_target: Option<(u32, u32)>,
    screen_width: f32,
    screen_height: f32,

    player: Option<Box<dyn MediaPlayerControl>>,
    surface: Option<Box<dyn OverlaySurface>>,
    audio: Option<Box<dyn VolumeOutput>>,
    window: Option<Box<dyn BrightnessStore>>,

    on_shown: Option<Listener>,
    on_hidden: Option<Listener>,
    on_next: Option<Listener>,
    on_prev: Option<Listener>,

    diagnostics: DiagnosticsCollector,
}

impl MediaOverlay {
    /// Creates a hidden overlay driven by the wall clock.
    #[must_use]
    pub fn new(options: OverlayOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Creates a hidden overlay driven by `clock`.
    #[must_use]
    pub fn with_clock(options: OverlayOptions, clock: impl Clock + 'static) -> Self {
        let started_at = clock.now();
        Self {
            controls: ControlsView::new(options.use_fast_forward),
            diagnostics: DiagnosticsCollector::new(options.diagnostics_capacity, started_at),
            options,
            clock: Box::new(clock),
            scheduler: Scheduler::new(),
            state: OverlayState::default(),
            drag: None,
            pointer: None,
            duration_ms: 0,
            fullscreen: false,
            scale_target: None,
            screen_width: 0.0,
            screen_height: 0.0,
            player: None,
            surface: None,
            audio: None,
            window: None,
            on_shown: None,
            on_hidden: None,
            on_next: None,
            on_prev: None,
        }
    }

    // -------------------------------------------------------------------------
    // Wiring
    // -------------------------------------------------------------------------

    pub fn set_media_player(&mut self, player: impl MediaPlayerControl + 'static) {
        self.player = Some(Box::new(player));
        self.update_pause_play();
    }

    pub fn set_anchor(&mut self, surface: impl OverlaySurface + 'static) {
        self.surface = Some(Box::new(surface));
    }

    pub fn set_volume_output(&mut self, audio: impl VolumeOutput + 'static) {
        self.audio = Some(Box::new(audio));
    }

    pub fn set_brightness_store(&mut self, window: impl BrightnessStore + 'static) {
        self.window = Some(Box::new(window));
    }

    /// Screen size used to classify and scale edge swipes.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn set_instant_seeking(&mut self, instant: bool) {
        self.options.instant_seeking = instant;
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.controls.title = name.into();
    }

    pub fn set_on_shown(&mut self, listener: impl FnMut() + 'static) {
        self.on_shown = Some(Box::new(listener));
    }

    pub fn set_on_hidden(&mut self, listener: impl FnMut() + 'static) {
        self.on_hidden = Some(Box::new(listener));
    }

    /// Installs the next/previous listeners.
    ///
    /// Both buttons become visible; each is enabled iff its listener is set.
    pub fn set_prev_next_listeners(&mut self, next: Option<Listener>, prev: Option<Listener>) {
        self.controls.next_enabled = next.is_some();
        self.controls.prev_enabled = prev.is_some();
        self.controls.next_prev_visible = true;
        self.on_next = next;
        self.on_prev = prev;
    }

    /// Enables or disables the pause button and the seek bar.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.controls.pause_enabled = enabled;
        self.controls.seek_bar_enabled = enabled;
        self.disable_unsupported_buttons();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    #[must_use]
    pub fn controls(&self) -> &ControlsView {
        &self.controls
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Video scale applied on the last orientation change.
    #[must_use]
    pub fn scale_target(&self) -> Option<(u32, u32)> {
        self.scale_target
    }

    /// When the controls will fade, if a fade is pending.
    #[must_use]
    pub fn auto_fade_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline(TimerKind::FadeOut)
    }

    /// Earliest pending timer deadline, for the host event loop.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Shows the controls with the default timeout.
    pub fn show_default(&mut self) {
        self.show(self.options.default_timeout);
    }

    /// Shows the controls and re-arms the auto-fade.
    ///
    /// A zero `timeout` shows until [`hide`](Self::hide) is called and leaves
    /// any pending fade alone. Showing while visible still re-arms the fade.
    pub fn show(&mut self, timeout: Duration) {
        if !self.state.visible {
            let placement = self.surface.as_deref().and_then(|surface| {
                surface
                    .anchor_bounds()
                    .map(|bounds| bounds.bottom_placement(surface.controls_height()))
            });

            if let Some((x, y)) = placement {
                self.disable_unsupported_buttons();
                let shown = self.surface.as_deref_mut().map(|s| s.show_at(x, y));
                match shown {
                    Some(Err(err)) => self.absorb_surface_error("show", &err),
                    _ => {
                        self.state.visible = true;
                        debug!(x, y, "overlay shown");
                        self.record(DiagnosticEventKind::Shown);
                        if let Some(listener) = self.on_shown.as_mut() {
                            listener();
                        }
                    }
                }
            }
        }

        self.update_pause_play();
        self.refresh_progress();

        if !timeout.is_zero() {
            let now = self.clock.now();
            self.scheduler.schedule(TimerKind::FadeOut, now, timeout);
            self.state.fade_deferred = false;
        }
    }

    /// Hides the controls and stops the progress refresh.
    ///
    /// No-op without an anchor. A dismissal race with the platform is
    /// logged and otherwise ignored.
    pub fn hide(&mut self) {
        if self.surface.is_none() {
            return;
        }
        if !self.state.visible {
            return;
        }

        self.scheduler.cancel(TimerKind::ProgressTick);
        self.scheduler.cancel(TimerKind::FadeOut);
        self.state.fade_deferred = false;
        let dismissed = self.surface.as_deref_mut().map(|s| s.dismiss());
        if let Some(Err(err)) = dismissed {
            self.absorb_surface_error("dismiss", &err);
        }

        self.state.visible = false;
        debug!("overlay hidden");
        self.record(DiagnosticEventKind::Hidden);
        if let Some(listener) = self.on_hidden.as_mut() {
            listener();
        }
    }

    /// Plain tap on the video: toggles visibility.
    pub fn toggle_visibility(&mut self) {
        if self.state.visible {
            self.hide();
        } else {
            self.show_default();
        }
    }

    /// Touch or trackball input on the controls keeps them up.
    pub fn on_overlay_touched(&mut self) {
        self.show_default();
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Fires every timer that is due. Returns how many fired.
    ///
    /// Timers are popped one at a time, so a callback that cancels another
    /// due timer (a fade canceling the progress tick) prevents it from firing.
    pub fn poll_timers(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(kind) = self.scheduler.pop_due(now) {
            match kind {
                TimerKind::FadeOut => self.on_fade_timeout(),
                TimerKind::ProgressTick => self.refresh_progress(),
                TimerKind::HideIndicator => self.hide_aux_indicator(),
            }
            fired += 1;
        }
        fired
    }

    fn on_fade_timeout(&mut self) {
        if self.state.suppress_auto_fade {
            debug!("auto-fade deferred until the drag ends");
            self.state.fade_deferred = true;
            self.record(DiagnosticEventKind::FadeDeferred);
            return;
        }
        self.hide();
    }

    /// Re-arms a fade that was deferred by a drag.
    fn resume_auto_fade(&mut self) {
        self.state.suppress_auto_fade = false;
        if std::mem::take(&mut self.state.fade_deferred) && self.state.visible {
            let now = self.clock.now();
            self.scheduler
                .schedule(TimerKind::FadeOut, now, self.options.default_timeout);
        }
    }

    fn hide_aux_indicator(&mut self) {
        self.controls.aux_indicator = None;
    }

    // -------------------------------------------------------------------------
    // Progress
    // -------------------------------------------------------------------------

    /// One tick of the self-rescheduling progress loop.
    ///
    /// Skipped entirely while the seek bar is dragged.
    fn refresh_progress(&mut self) {
        let Some(snapshot) = self.set_progress() else {
            return;
        };
        if self.state.visible {
            let now = self.clock.now();
            self.scheduler
                .schedule(TimerKind::ProgressTick, now, snapshot.next_tick_delay());
            self.update_pause_play();
        }
    }

    /// Reads the player once and updates progress and time labels.
    fn set_progress(&mut self) -> Option<PlaybackSnapshot> {
        if self.is_seek_dragging() {
            return None;
        }
        let snapshot = self.player.as_deref()?.snapshot();

        if let Some(progress) = snapshot.position_permille() {
            self.controls.progress = progress;
        }
        self.controls.secondary_progress = snapshot.buffer_permille();
        self.duration_ms = snapshot.duration_ms;
        self.controls
            .set_times(snapshot.position_ms, snapshot.duration_ms);

        Some(snapshot)
    }

    fn is_seek_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragSession::is_seek)
    }

    fn update_pause_play(&mut self) {
        if let Some(player) = self.player.as_deref() {
            self.controls.play_pause = PlayPauseIcon::for_playing(player.is_playing());
        }
    }

    // -------------------------------------------------------------------------
    // Transport buttons
    // -------------------------------------------------------------------------

    fn disable_unsupported_buttons(&mut self) {
        let Some(player) = self.player.as_deref() else {
            return;
        };
        if !player.can_pause() {
            self.controls.pause_enabled = false;
        }
        if !player.can_seek_backward() {
            self.controls.rewind_enabled = false;
        }
        if !player.can_seek_forward() {
            self.controls.fast_forward_enabled = false;
        }
    }

    fn do_pause_resume(&mut self) {
        let Some(player) = self.player.as_deref_mut() else {
            return;
        };
        if player.is_playing() {
            player.pause();
        } else {
            player.start();
        }
        self.update_pause_play();
    }

    /// Play/pause button.
    pub fn toggle_pause(&mut self) {
        if !self.controls.pause_enabled || self.player.is_none() {
            return;
        }
        self.do_pause_resume();
        self.show_default();
    }

    /// Rewind button: jumps back by the configured step.
    pub fn rewind(&mut self) {
        if self.controls.rewind_fast_forward_visible && self.controls.rewind_enabled {
            self.step_by(-self.options.seek_step_ms);
        }
    }

    /// Fast-forward button: jumps ahead by the configured step.
    pub fn fast_forward(&mut self) {
        if self.controls.rewind_fast_forward_visible && self.controls.fast_forward_enabled {
            self.step_by(self.options.seek_step_ms);
        }
    }

    fn step_by(&mut self, delta_ms: i64) {
        let Some(player) = self.player.as_deref_mut() else {
            return;
        };
        let duration = player.duration_ms();
        let mut target = player.current_position_ms().saturating_add(delta_ms).max(0);
        if duration > 0 {
            target = target.min(duration);
        }
        player.seek_to(target);
        debug!(target_ms = target, "stepped playback position");
        self.record(DiagnosticEventKind::Seeked {
            position_ms: target,
        });

        self.set_progress();
        self.show_default();
    }

    pub fn press_next(&mut self) {
        if let Some(listener) = self.on_next.as_mut() {
            listener();
            self.show_default();
        }
    }

    pub fn press_prev(&mut self) {
        if let Some(listener) = self.on_prev.as_mut() {
            listener();
            self.show_default();
        }
    }

    // -------------------------------------------------------------------------
    // Fullscreen
    // -------------------------------------------------------------------------

    /// Enters fullscreen by asking the host for landscape.
    pub fn expand(&mut self) {
        if self.fullscreen {
            return;
        }
        self.hide();
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.request_orientation(Orientation::Landscape);
        }
        self.set_fullscreen(true);
    }

    /// Leaves fullscreen by asking the host for portrait.
    pub fn shrink(&mut self) {
        if !self.fullscreen {
            return;
        }
        self.hide();
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.request_orientation(Orientation::Portrait);
        }
        self.set_fullscreen(false);
    }

    /// Reacts to an orientation notification from the host.
    ///
    /// `scale` overrides the configured scale target for `orientation`.
    pub fn on_orientation_changed(&mut self, orientation: Orientation, scale: Option<(u32, u32)>) {
        let (width, height) = scale.unwrap_or(match orientation {
            Orientation::Landscape => self.options.landscape_scale,
            Orientation::Portrait => self.options.portrait_scale,
        });
        debug!(?orientation, width, height, "orientation changed");

        self.scale_target = Some((width, height));
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.apply_video_scale(width, height);
        }
        self.set_fullscreen(orientation == Orientation::Landscape);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.record(DiagnosticEventKind::FullscreenChanged { fullscreen });
        }
        self.controls.set_fullscreen(fullscreen);
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Routes one input message.
    ///
    /// Note: Takes `Message` by value so hosts can forward channel items as-is.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::GestureDown { x, y } => self.gesture_down(x, y),
            Message::GestureMove { y } => self.gesture_move(y),
            Message::GestureUp => self.gesture_up(),
            Message::GestureCancel => self.gesture_cancel(),
            Message::OverlayTouched => self.on_overlay_touched(),
            Message::SeekStarted => self.seek_drag_begin(),
            Message::SeekChanged(progress) => self.seek_drag_update(progress),
            Message::SeekReleased => self.seek_drag_commit(),
            Message::SeekCanceled => self.seek_drag_cancel(),
            Message::TogglePause => self.toggle_pause(),
            Message::Rewind => self.rewind(),
            Message::FastForward => self.fast_forward(),
            Message::Expand => self.expand(),
            Message::Shrink => self.shrink(),
            Message::Next => self.press_next(),
            Message::Prev => self.press_prev(),
            Message::Key { key, repeat } => {
                if !self.dispatch_key(key, repeat) {
                    return Effect::KeyUnhandled;
                }
            }
            Message::OrientationChanged { orientation, scale } => {
                self.on_orientation_changed(orientation, scale);
            }
            Message::ScreenResized { width, height } => self.set_screen_size(width, height),
            Message::Show(timeout) => self.show(timeout),
            Message::Hide => self.hide(),
            Message::Shutdown => return Effect::Shutdown,
        }
        Effect::None
    }

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------

    fn record(&mut self, kind: DiagnosticEventKind) {
        let now = self.clock.now();
        self.diagnostics.record(kind, now);
    }

    fn absorb_surface_error(&mut self, operation: &str, err: &SurfaceError) {
        warn!(operation, error = %err, "overlay surface error ignored");
        let now = self.clock.now();
        self.diagnostics
            .record_warning(format!("{operation}: {err}"), now);
    }
}

impl fmt::Debug for MediaOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaOverlay")
            .field("state", &self.state)
            .field("drag", &self.drag)
            .field("fullscreen", &self.fullscreen)
            .field("scheduler", &self.scheduler)
            .field("has_player", &self.player.is_some())
            .field("has_surface", &self.surface.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::Bounds;
    use crate::simulated::{SimulatedPlayer, SimulatedSurface};
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    struct Fixture {
        clock: ManualClock,
        overlay: MediaOverlay,
        player: SimulatedPlayer,
        surface: SimulatedSurface,
    }

    fn fixture() -> Fixture {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(120_000, clock.clone());
        let surface = SimulatedSurface::new(Bounds::new(0.0, 0.0, 1080.0, 800.0), 120.0);

        let mut overlay = MediaOverlay::with_clock(OverlayOptions::default(), clock.clone());
        overlay.set_media_player(player.clone());
        overlay.set_anchor(surface.clone());

        Fixture {
            clock,
            overlay,
            player,
            surface,
        }
    }

    #[test]
    fn starts_hidden_without_timers() {
        let f = fixture();
        assert!(!f.overlay.is_showing());
        assert!(f.overlay.next_deadline().is_none());
    }

    #[test]
    fn show_positions_controls_at_anchor_bottom() {
        let mut f = fixture();
        f.overlay.show_default();

        assert!(f.overlay.is_showing());
        assert_eq!(f.surface.shown_at(), vec![(0.0, 680.0)]);
    }

    #[test]
    fn show_twice_leaves_one_fade_from_second_call() {
        let mut f = fixture();
        f.overlay.show(ms(3000));
        f.overlay.show(ms(3000));

        let expected = f.clock.now() + ms(3000);
        assert_eq!(f.overlay.auto_fade_deadline(), Some(expected));
        assert_eq!(f.surface.shown_at().len(), 1);
    }

    #[test]
    fn show_while_visible_pushes_fade_back() {
        let mut f = fixture();
        f.overlay.show(ms(3000));
        f.clock.advance(ms(2000));
        f.overlay.show(ms(3000));

        f.clock.advance(ms(1500));
        f.overlay.poll_timers();
        assert!(f.overlay.is_showing());

        f.clock.advance(ms(1500));
        f.overlay.poll_timers();
        assert!(!f.overlay.is_showing());
    }

    #[test]
    fn zero_timeout_shows_without_fade() {
        let mut f = fixture();
        f.overlay.show(Duration::ZERO);

        assert!(f.overlay.is_showing());
        assert!(f.overlay.auto_fade_deadline().is_none());
    }

    #[test]
    fn show_refreshes_progress_immediately() {
        let mut f = fixture();
        f.player.set_position(30_000);
        f.player.set_buffer_percent(40);

        f.overlay.show_default();

        let controls = f.overlay.controls();
        assert_eq!(controls.progress, Permille::new(250));
        assert_eq!(controls.secondary_progress, Permille::new(400));
        assert_eq!(controls.current_time, "00:30");
        assert_eq!(controls.end_time, "02:00");
    }

    #[test]
    fn progress_tick_aligns_to_next_second() {
        let mut f = fixture();
        f.player.set_position(12_250);
        f.overlay.show_default();

        let tick = f.overlay.scheduler().deadline(TimerKind::ProgressTick);
        assert_eq!(tick, Some(f.clock.now() + ms(750)));
    }

    #[test]
    fn progress_loop_follows_playing_player() {
        let mut f = fixture();
        f.player.start_playing();
        f.overlay.show(Duration::ZERO);

        for _ in 0..5 {
            f.clock.advance(ms(1000));
            f.overlay.poll_timers();
        }

        assert_eq!(f.overlay.controls().current_time, "00:05");
        assert_eq!(f.overlay.controls().play_pause, PlayPauseIcon::Pause);
    }

    #[test]
    fn unknown_duration_keeps_progress_but_updates_buffer() {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(0, clock.clone());
        player.set_buffer_percent(10);
        let mut overlay = MediaOverlay::with_clock(OverlayOptions::default(), clock);
        overlay.set_media_player(player);
        overlay.set_anchor(SimulatedSurface::new(Bounds::new(0.0, 0.0, 100.0, 100.0), 10.0));

        overlay.show_default();
        assert_eq!(overlay.controls().progress, Permille::new(0));
        assert_eq!(overlay.controls().secondary_progress, Permille::new(100));
    }

    #[test]
    fn hide_cancels_progress_loop_and_notifies() {
        let mut f = fixture();
        let hidden = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hidden);
        f.overlay.set_on_hidden(move || counter.set(counter.get() + 1));

        f.overlay.show_default();
        f.overlay.hide();
        f.overlay.hide();

        assert!(!f.overlay.is_showing());
        assert!(!f.overlay.scheduler().is_pending(TimerKind::ProgressTick));
        assert_eq!(hidden.get(), 1);
        assert_eq!(f.surface.dismissals(), 1);
    }

    #[test]
    fn shown_listener_fires_on_transition_only() {
        let mut f = fixture();
        let shown = Rc::new(Cell::new(0));
        let counter = Rc::clone(&shown);
        f.overlay.set_on_shown(move || counter.set(counter.get() + 1));

        f.overlay.show_default();
        f.overlay.show_default();
        assert_eq!(shown.get(), 1);
    }

    #[test]
    fn fade_timeout_hides() {
        let mut f = fixture();
        f.overlay.show(ms(3000));

        f.clock.advance(ms(2999));
        f.overlay.poll_timers();
        assert!(f.overlay.is_showing());

        f.clock.advance(ms(1));
        f.overlay.poll_timers();
        assert!(!f.overlay.is_showing());
    }

    #[test]
    fn fade_sharing_a_deadline_with_progress_tick_stops_reads() {
        let mut f = fixture();
        f.player.start_playing();
        f.overlay.show(ms(3000));

        f.clock.advance(ms(1000));
        f.overlay.poll_timers();
        f.clock.advance(ms(1000));
        f.overlay.poll_timers();

        let reads_before = f.player.read_count();
        f.clock.advance(ms(1000));
        let fired = f.overlay.poll_timers();

        assert_eq!(fired, 1);
        assert!(!f.overlay.is_showing());
        assert_eq!(f.player.read_count(), reads_before);
        assert_eq!(f.overlay.controls().current_time, "00:02");
        assert!(f.overlay.next_deadline().is_none());
    }

    #[test]
    fn fade_is_deferred_while_suppressed() {
        let mut f = fixture();
        f.overlay.set_screen_size(1000.0, 1000.0);
        f.overlay.show(ms(3000));
        f.overlay.gesture_down(950.0, 500.0);
        f.overlay.gesture_move(300.0);

        f.clock.advance(ms(3000));
        f.overlay.poll_timers();
        assert!(f.overlay.is_showing());
        assert!(f.overlay.state().fade_deferred);

        f.overlay.gesture_up();
        assert!(!f.overlay.state().suppress_auto_fade);
        assert_eq!(
            f.overlay.auto_fade_deadline(),
            Some(f.clock.now() + f.overlay.options().default_timeout)
        );
    }

    #[test]
    fn missing_anchor_makes_show_and_hide_noops() {
        let clock = ManualClock::new();
        let mut overlay = MediaOverlay::with_clock(OverlayOptions::default(), clock);

        overlay.show_default();
        assert!(!overlay.is_showing());
        overlay.hide();
        assert!(!overlay.is_showing());
    }

    #[test]
    fn detached_anchor_does_not_show() {
        let mut f = fixture();
        f.surface.detach();

        f.overlay.show_default();
        assert!(!f.overlay.is_showing());
        assert!(f.surface.shown_at().is_empty());
    }

    #[test]
    fn dismissal_race_is_absorbed() {
        let mut f = fixture();
        f.overlay.show_default();
        f.surface.fail_dismissals(true);

        f.overlay.hide();

        assert!(!f.overlay.is_showing());
        let warned = f
            .overlay
            .diagnostics()
            .kinds()
            .any(|kind| matches!(kind, DiagnosticEventKind::Warning { .. }));
        assert!(warned);
    }

    #[test]
    fn unsupported_buttons_are_disabled_on_show() {
        let mut f = fixture();
        f.player.set_capabilities(false, false, true);

        f.overlay.show_default();

        let controls = f.overlay.controls();
        assert!(!controls.pause_enabled);
        assert!(!controls.rewind_enabled);
        assert!(controls.fast_forward_enabled);
    }

    #[test]
    fn toggle_pause_flips_player_and_icon() {
        let mut f = fixture();
        f.overlay.toggle_pause();

        assert!(f.player.is_playing_now());
        assert_eq!(f.overlay.controls().play_pause, PlayPauseIcon::Pause);
        assert!(f.overlay.is_showing());

        f.overlay.toggle_pause();
        assert!(!f.player.is_playing_now());
        assert_eq!(f.overlay.controls().play_pause, PlayPauseIcon::Play);
    }

    #[test]
    fn disabled_pause_button_is_ignored() {
        let mut f = fixture();
        f.overlay.set_enabled(false);
        f.overlay.toggle_pause();
        assert!(!f.player.is_playing_now());
    }

    #[test]
    fn rewind_and_fast_forward_step_and_clamp() {
        let mut f = fixture();
        f.player.set_position(10_000);

        f.overlay.rewind();
        assert_eq!(f.player.position_ms(), 0);

        f.player.set_position(110_000);
        f.overlay.fast_forward();
        assert_eq!(f.player.position_ms(), 120_000);

        f.player.set_position(60_000);
        f.overlay.fast_forward();
        assert_eq!(f.player.position_ms(), 75_000);
        assert_eq!(f.overlay.controls().current_time, "01:15");
    }

    #[test]
    fn fast_forward_hidden_when_disabled_by_policy() {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(120_000, clock.clone());
        let options = OverlayOptions {
            use_fast_forward: false,
            ..OverlayOptions::default()
        };
        let mut overlay = MediaOverlay::with_clock(options, clock);
        overlay.set_media_player(player.clone());

        overlay.fast_forward();
        assert!(player.seeks().is_empty());
    }

    #[test]
    fn prev_next_buttons_follow_listeners() {
        let mut f = fixture();
        let pressed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&pressed);

        f.overlay
            .set_prev_next_listeners(Some(Box::new(move || flag.set(true))), None);

        assert!(f.overlay.controls().next_prev_visible);
        assert!(f.overlay.controls().next_enabled);
        assert!(!f.overlay.controls().prev_enabled);

        f.overlay.press_prev();
        assert!(!f.overlay.is_showing());

        f.overlay.press_next();
        assert!(pressed.get());
        assert!(f.overlay.is_showing());
    }

    #[test]
    fn expand_and_shrink_request_orientation() {
        let mut f = fixture();
        f.overlay.show_default();

        f.overlay.expand();
        assert!(!f.overlay.is_showing());
        assert!(f.overlay.is_fullscreen());
        assert!(f.overlay.controls().shrink_visible);

        f.overlay.expand();
        f.overlay.shrink();
        assert!(!f.overlay.is_fullscreen());
        assert_eq!(
            f.surface.orientation_requests(),
            vec![Orientation::Landscape, Orientation::Portrait]
        );
    }

    #[test]
    fn orientation_change_applies_scale_target() {
        let mut f = fixture();

        f.overlay.on_orientation_changed(Orientation::Landscape, None);
        assert_eq!(f.overlay.scale_target(), Some((1770, 1080)));
        assert_eq!(f.surface.video_scale(), Some((1770, 1080)));
        assert!(f.overlay.is_fullscreen());

        f.overlay
            .on_orientation_changed(Orientation::Portrait, Some((720, 480)));
        assert_eq!(f.surface.video_scale(), Some((720, 480)));
        assert!(!f.overlay.is_fullscreen());
    }

    #[test]
    fn options_from_config_clamp_values() {
        let mut settings = Config::default();
        settings.overlay.default_timeout_ms = Some(10);
        settings.overlay.seek_step_ms = Some(1_000_000);
        settings.gestures.edge_zone_fraction = Some(0.9);

        let options = OverlayOptions::from(&settings);
        assert_eq!(
            options.default_timeout,
            ms(config::MIN_OVERLAY_TIMEOUT_MS)
        );
        assert_eq!(options.seek_step_ms, config::MAX_SEEK_STEP_MS);
        assert!(options.edge_zone_fraction <= config::MAX_EDGE_ZONE_FRACTION);
    }

    #[test]
    fn options_from_default_config_match_defaults() {
        assert_eq!(
            OverlayOptions::from(&Config::default()),
            OverlayOptions::default()
        );
    }

    #[test]
    fn handle_routes_messages() {
        let mut f = fixture();
        assert_eq!(f.overlay.handle(Message::OverlayTouched), Effect::None);
        assert!(f.overlay.is_showing());

        assert_eq!(f.overlay.handle(Message::Hide), Effect::None);
        assert!(!f.overlay.is_showing());

        assert_eq!(f.overlay.handle(Message::Shutdown), Effect::Shutdown);
        assert_eq!(
            f.overlay.handle(Message::Key {
                key: Key::Other,
                repeat: 0
            }),
            Effect::KeyUnhandled
        );
    }

    #[test]
    fn diagnostics_record_transitions() {
        let mut f = fixture();
        f.overlay.show_default();
        f.overlay.hide();

        let kinds: Vec<_> = f.overlay.diagnostics().kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![DiagnosticEventKind::Shown, DiagnosticEventKind::Hidden]
        );
    }
}
