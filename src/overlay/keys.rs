// SPDX-License-Identifier: MPL-2.0
//! Hardware and keyboard key handling.

use super::MediaOverlay;
use tracing::debug;

/// Keys the overlay distinguishes. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    PlayPause,
    HeadsetHook,
    Space,
    Stop,
    Back,
    Menu,
    Other,
}

impl Key {
    /// Parses a key name as typed on the simulator command line.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "play-pause" | "playpause" | "media-play-pause" => Key::PlayPause,
            "headset" | "headset-hook" => Key::HeadsetHook,
            "space" => Key::Space,
            "stop" | "media-stop" => Key::Stop,
            "back" | "escape" => Key::Back,
            "menu" => Key::Menu,
            _ => Key::Other,
        }
    }
}

impl MediaOverlay {
    /// Handles a key press. Returns whether the key was consumed.
    ///
    /// Play/pause keys only act on the initial press, not on auto-repeat.
    pub fn dispatch_key(&mut self, key: Key, repeat_count: u32) -> bool {
        debug!(?key, repeat_count, "key dispatched");
        match key {
            Key::PlayPause | Key::HeadsetHook | Key::Space if repeat_count == 0 => {
                self.do_pause_resume();
                self.show_default();
                true
            }
            Key::Stop => {
                if let Some(player) = self.player.as_deref_mut() {
                    if player.is_playing() {
                        player.pause();
                        self.update_pause_play();
                    }
                }
                true
            }
            Key::Back | Key::Menu => {
                self.hide();
                true
            }
            _ => {
                self.show_default();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::Bounds;
    use crate::overlay::{ManualClock, OverlayOptions, PlayPauseIcon};
    use crate::simulated::{SimulatedPlayer, SimulatedSurface};

    fn fixture() -> (MediaOverlay, SimulatedPlayer) {
        let clock = ManualClock::new();
        let player = SimulatedPlayer::new(60_000, clock.clone());
        let mut overlay = MediaOverlay::with_clock(OverlayOptions::default(), clock);
        overlay.set_media_player(player.clone());
        overlay.set_anchor(SimulatedSurface::new(
            Bounds::new(0.0, 0.0, 640.0, 480.0),
            48.0,
        ));
        (overlay, player)
    }

    #[test]
    fn play_pause_keys_toggle_and_show() {
        for key in [Key::PlayPause, Key::HeadsetHook, Key::Space] {
            let (mut overlay, player) = fixture();
            assert!(overlay.dispatch_key(key, 0));
            assert!(player.is_playing_now());
            assert!(overlay.is_showing());
        }
    }

    #[test]
    fn repeated_play_pause_only_shows() {
        let (mut overlay, player) = fixture();
        assert!(!overlay.dispatch_key(Key::PlayPause, 1));
        assert!(!player.is_playing_now());
        assert!(overlay.is_showing());
    }

    #[test]
    fn stop_pauses_playing_media_without_showing() {
        let (mut overlay, player) = fixture();
        player.start_playing();

        assert!(overlay.dispatch_key(Key::Stop, 0));
        assert!(!player.is_playing_now());
        assert!(!overlay.is_showing());
        assert_eq!(overlay.controls().play_pause, PlayPauseIcon::Play);
    }

    #[test]
    fn back_and_menu_hide() {
        let (mut overlay, _player) = fixture();
        overlay.show_default();
        assert!(overlay.dispatch_key(Key::Back, 0));
        assert!(!overlay.is_showing());

        overlay.show_default();
        assert!(overlay.dispatch_key(Key::Menu, 3));
        assert!(!overlay.is_showing());
    }

    #[test]
    fn other_keys_show_and_propagate() {
        let (mut overlay, _player) = fixture();
        assert!(!overlay.dispatch_key(Key::Other, 0));
        assert!(overlay.is_showing());
    }

    #[test]
    fn key_names_parse_case_insensitively() {
        assert_eq!(Key::from_name("SPACE"), Key::Space);
        assert_eq!(Key::from_name("play-pause"), Key::PlayPause);
        assert_eq!(Key::from_name("volume-up"), Key::Other);
    }
}
