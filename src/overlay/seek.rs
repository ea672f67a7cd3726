// SPDX-License-Identifier: MPL-2.0
//! Seek-bar drag phases.
//!
//! The seek bar reports its own begin / update / release callbacks, so a
//! seek session is never produced by region classification. While it is
//! open the controls are pinned, the progress loop is stopped and its ticks
//! are skipped, so live player values never fight the user's drag.

use super::{format_time, MediaOverlay, TimerKind};
use crate::config::{SEEK_PIN_TIMEOUT_MS, SEEK_RESUME_DELAY_MS};
use crate::diagnostics::{DiagnosticEventKind, DragControl};
use crate::domain::overlay::{DragSession, Permille};
use std::time::Duration;
use tracing::{debug, trace};

impl MediaOverlay {
    /// The user grabbed the seek bar.
    ///
    /// Ignored while another drag is open, while the seek bar is disabled,
    /// or without a player.
    pub fn seek_drag_begin(&mut self) {
        if self.drag.is_some() || !self.controls.seek_bar_enabled || self.player.is_none() {
            return;
        }

        let mute = self.options.instant_seeking && self.audio.is_some();
        self.drag = Some(DragSession::seek(mute));
        self.state.suppress_auto_fade = true;

        self.show(Duration::from_millis(SEEK_PIN_TIMEOUT_MS));
        self.scheduler.cancel(TimerKind::ProgressTick);

        if mute {
            if let Some(audio) = self.audio.as_deref_mut() {
                audio.set_muted(true);
            }
        }
        self.controls.info_text = Some(String::new());

        debug!(muted = mute, "seek drag started");
        self.record(DiagnosticEventKind::DragStarted {
            control: DragControl::Seek,
        });
    }

    /// The seek bar moved to `progress`.
    pub fn seek_drag_update(&mut self, progress: Permille) {
        let target = progress.target_ms(self.duration_ms);
        let Some(DragSession::Seek { target_ms, .. }) = self.drag.as_mut() else {
            return;
        };
        *target_ms = Some(target);

        if self.options.instant_seeking {
            if let Some(player) = self.player.as_deref_mut() {
                player.seek_to(target);
            }
        }
        trace!(target_ms = target, "seek drag moved");

        let time = format_time(target);
        self.controls.progress = progress;
        self.controls.current_time.clone_from(&time);
        self.controls.info_text = Some(time);
    }

    /// The user released the seek bar.
    pub fn seek_drag_commit(&mut self) {
        self.end_seek_drag(true);
    }

    /// The seek drag was interrupted; restores pre-drag state without a
    /// final seek.
    pub fn seek_drag_cancel(&mut self) {
        self.end_seek_drag(false);
    }

    fn end_seek_drag(&mut self, commit: bool) {
        let Some(DragSession::Seek {
            muted_audio,
            target_ms,
        }) = self.drag.clone()
        else {
            return;
        };

        if commit {
            let target =
                target_ms.unwrap_or_else(|| self.controls.progress.target_ms(self.duration_ms));
            if !self.options.instant_seeking {
                if let Some(player) = self.player.as_deref_mut() {
                    player.seek_to(target);
                }
            }
            self.record(DiagnosticEventKind::Seeked {
                position_ms: target,
            });
        }

        self.controls.info_text = None;
        // The session is still open here, so this show skips its refresh.
        self.show_default();
        self.scheduler.cancel(TimerKind::ProgressTick);

        if muted_audio {
            if let Some(audio) = self.audio.as_deref_mut() {
                audio.set_muted(false);
            }
        }
        self.drag = None;
        self.state.suppress_auto_fade = false;
        self.state.fade_deferred = false;

        let now = self.clock.now();
        self.scheduler.schedule(
            TimerKind::ProgressTick,
            now,
            Duration::from_millis(SEEK_RESUME_DELAY_MS),
        );

        let control = DragControl::Seek;
        if commit {
            debug!("seek drag committed");
            self.record(DiagnosticEventKind::DragEnded { control });
        } else {
            debug!("seek drag canceled");
            self.record(DiagnosticEventKind::DragCanceled { control });
        }
    }
}
