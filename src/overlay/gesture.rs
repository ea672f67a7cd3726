// SPDX-License-Identifier: MPL-2.0
//! Edge-swipe controller: volume on the right edge, brightness on the left.
//!
//! A gesture is classified once, when the pointer goes down, and keeps its
//! kind until release. Values are applied live on every motion sample;
//! there is no commit phase and release does not undo anything. A gesture
//! that never moves past the tap slop is a tap and toggles the controls.

use super::{AuxIndicator, MediaOverlay, Pointer, TimerKind};
use crate::diagnostics::{DiagnosticEventKind, DragControl};
use crate::domain::overlay::gesture::{brightness_for, swipe_percent, volume_index_for};
use crate::domain::overlay::{
    classify_with_zone, Brightness, DragKind, DragSession, VolumeRange,
};
use tracing::{debug, trace};

/// Vertical travel (in pixels) below which a gesture still counts as a tap.
const TAP_SLOP_PX: f32 = 10.0;

fn drag_control(kind: DragKind) -> DragControl {
    match kind {
        DragKind::Seek => DragControl::Seek,
        DragKind::Volume => DragControl::Volume,
        DragKind::Brightness => DragControl::Brightness,
    }
}

impl MediaOverlay {
    /// Pointer went down on the video at `(x, y)`.
    pub fn gesture_down(&mut self, x: f32, y: f32) {
        self.scheduler.cancel(TimerKind::HideIndicator);
        self.pointer = Some(Pointer {
            start_y: y,
            moved: false,
        });

        if self.drag.is_some() {
            return;
        }
        let kind = classify_with_zone(x, self.screen_width, self.options.edge_zone_fraction);
        if let Some(session) = kind.and_then(|kind| DragSession::swipe(kind, y)) {
            let control = drag_control(session.kind());
            debug!(?control, x, y, "edge swipe started");
            self.drag = Some(session);
            self.state.suppress_auto_fade = true;
            self.record(DiagnosticEventKind::DragStarted { control });
        }
    }

    /// Pointer moved to height `y`.
    pub fn gesture_move(&mut self, y: f32) {
        let Some(pointer) = self.pointer.as_mut() else {
            return;
        };
        if (y - pointer.start_y).abs() > TAP_SLOP_PX {
            pointer.moved = true;
        }

        match self.drag {
            Some(DragSession::Volume { .. }) => self.slide_volume(y),
            Some(DragSession::Brightness { .. }) => self.slide_brightness(y),
            _ => {}
        }
    }

    /// Pointer released.
    pub fn gesture_up(&mut self) {
        let Some(pointer) = self.pointer.take() else {
            return;
        };
        self.end_swipe(false);
        if !pointer.moved && !self.is_seek_dragging() {
            self.toggle_visibility();
        }
        self.schedule_indicator_hide();
    }

    /// Gesture interrupted; ends a swipe like a release but never taps.
    pub fn gesture_cancel(&mut self) {
        self.pointer = None;
        self.end_swipe(true);
        self.schedule_indicator_hide();
    }

    fn slide_volume(&mut self, y: f32) {
        let Some(audio) = self.audio.as_deref_mut() else {
            return;
        };
        let Some(DragSession::Volume { start_y, origin }) = self.drag.as_mut() else {
            return;
        };

        let range = VolumeRange::new(audio.max_volume());
        let previous = audio.volume();
        let origin = *origin.get_or_insert(previous.max(0));
        let percent = swipe_percent(*start_y, y, self.screen_height);
        let index = volume_index_for(origin, percent, range);

        audio.set_volume(index);
        self.controls.aux_indicator = Some(AuxIndicator::volume(index, range));
        trace!(origin, percent, index, "volume slide");

        if index != previous {
            self.record(DiagnosticEventKind::VolumeChanged {
                index,
                max: range.max(),
            });
        }
    }

    fn slide_brightness(&mut self, y: f32) {
        let Some(window) = self.window.as_deref_mut() else {
            return;
        };
        let Some(DragSession::Brightness { start_y, origin }) = self.drag.as_mut() else {
            return;
        };

        let previous = window.brightness();
        let origin = *origin.get_or_insert_with(|| Brightness::origin_from(previous));
        let percent = swipe_percent(*start_y, y, self.screen_height);
        let value = brightness_for(origin, percent);

        window.set_brightness(value.value());
        self.controls.aux_indicator = Some(AuxIndicator::brightness(value));
        trace!(origin = origin.value(), percent, value = value.value(), "brightness slide");

        if previous != Some(value.value()) {
            self.record(DiagnosticEventKind::BrightnessChanged {
                value: value.value(),
            });
        }
    }

    /// Closes a volume/brightness session, dropping its snapshotted origin.
    fn end_swipe(&mut self, canceled: bool) {
        let control = match self.drag.as_ref() {
            Some(session) if !session.is_seek() => drag_control(session.kind()),
            _ => return,
        };
        self.drag = None;
        self.resume_auto_fade();

        if canceled {
            debug!(?control, "edge swipe canceled");
            self.record(DiagnosticEventKind::DragCanceled { control });
        } else {
            debug!(?control, "edge swipe ended");
            self.record(DiagnosticEventKind::DragEnded { control });
        }
    }

    fn schedule_indicator_hide(&mut self) {
        if self.controls.aux_indicator.is_some() {
            let now = self.clock.now();
            self.scheduler
                .schedule(TimerKind::HideIndicator, now, self.options.indicator_hide_delay);
        }
    }
}
