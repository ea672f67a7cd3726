// SPDX-License-Identifier: MPL-2.0
//! Async driver for a [`MediaOverlay`].
//!
//! One task owns the overlay and alternates between incoming messages and
//! the overlay's next timer deadline, so every state transition happens on
//! a single control-flow context. Run it on a current-thread runtime.
//!
//! Deadlines are wall-clock instants: the overlay must use
//! [`crate::overlay::SystemClock`] when driven from here.

use crate::overlay::{Effect, MediaOverlay, Message};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::debug;

/// Drives `overlay` until the channel closes or [`Message::Shutdown`]
/// arrives.
pub async fn run(overlay: &mut MediaOverlay, mut messages: mpsc::UnboundedReceiver<Message>) {
    loop {
        let deadline = overlay.next_deadline();
        tokio::select! {
            msg = messages.recv() => {
                let Some(msg) = msg else {
                    debug!("message channel closed, stopping overlay driver");
                    return;
                };
                if overlay.handle(msg) == Effect::Shutdown {
                    debug!("shutdown requested, stopping overlay driver");
                    return;
                }
            }
            () = sleep_until(deadline) => {
                let fired = overlay.poll_timers();
                debug!(fired, "overlay timers fired");
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
