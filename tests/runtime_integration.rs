// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the async overlay driver
//!
//! These run on tokio's current-thread test runtime with the wall clock and
//! short timeouts.

use playback_overlay::domain::overlay::Bounds;
use playback_overlay::overlay::{MediaOverlay, Message, OverlayOptions, SystemClock};
use playback_overlay::runtime;
use playback_overlay::simulated::{SimulatedPlayer, SimulatedSurface};
use std::time::Duration;
use tokio::sync::mpsc;

fn overlay_with_fade(fade_ms: u64) -> (MediaOverlay, SimulatedSurface) {
    let options = OverlayOptions {
        default_timeout: Duration::from_millis(fade_ms),
        ..OverlayOptions::default()
    };
    let surface = SimulatedSurface::new(Bounds::new(0.0, 0.0, 640.0, 480.0), 48.0);

    let mut overlay = MediaOverlay::new(options);
    overlay.set_media_player(SimulatedPlayer::new(60_000, SystemClock));
    overlay.set_anchor(surface.clone());
    (overlay, surface)
}

#[tokio::test]
async fn test_fade_timer_fires_through_driver() {
    let (mut overlay, surface) = overlay_with_fade(50);
    let (sender, receiver) = mpsc::unbounded_channel();
    sender.send(Message::OverlayTouched).expect("receiver alive");

    let driver = runtime::run(&mut overlay, receiver);
    let control = async {
        tokio::time::sleep(Duration::from_millis(250)).await;
        sender.send(Message::Shutdown).expect("receiver alive");
    };
    tokio::join!(driver, control);

    assert!(!overlay.is_showing());
    assert_eq!(surface.shown_at().len(), 1);
    assert_eq!(surface.dismissals(), 1);
}

#[tokio::test]
async fn test_driver_stops_when_channel_closes() {
    let (mut overlay, _surface) = overlay_with_fade(60_000);
    let (sender, receiver) = mpsc::unbounded_channel();
    sender.send(Message::OverlayTouched).expect("receiver alive");
    drop(sender);

    tokio::time::timeout(Duration::from_secs(5), runtime::run(&mut overlay, receiver))
        .await
        .expect("driver should stop once the channel closes");

    assert!(overlay.is_showing());
}

#[tokio::test]
async fn test_shutdown_leaves_pending_timers() {
    let (mut overlay, _surface) = overlay_with_fade(60_000);
    let (sender, receiver) = mpsc::unbounded_channel();
    sender.send(Message::OverlayTouched).expect("receiver alive");
    sender.send(Message::Shutdown).expect("receiver alive");

    runtime::run(&mut overlay, receiver).await;

    assert!(overlay.is_showing());
    assert!(overlay.auto_fade_deadline().is_some());
}
