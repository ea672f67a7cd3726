// SPDX-License-Identifier: MPL-2.0
//! Interactive simulator for the playback overlay.
//!
//! Wires the overlay to simulated ports and reads one command per line from
//! stdin. Run with `RUST_LOG=playback_overlay=debug` to watch transitions.
//!
//! Commands: `tap`, `down X Y`, `move Y`, `up`, `cancel`, `touch`,
//! `seek-begin`, `seek P` (0-1000), `seek-end`, `seek-cancel`, `pause`,
//! `rew`, `ffwd`, `next`, `prev`, `expand`, `shrink`, `key NAME [REPEAT]`,
//! `landscape`, `portrait`, `show [MS]`, `hide`, `quit`.
//! A bare `show` uses the configured timeout.

use playback_overlay::config;
use playback_overlay::domain::overlay::{Bounds, Orientation, Permille};
use playback_overlay::overlay::{Key, MediaOverlay, Message, OverlayOptions, SystemClock};
use playback_overlay::runtime;
use playback_overlay::simulated::{
    SimulatedAudio, SimulatedPlayer, SimulatedSurface, SimulatedWindow,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::SplitWhitespace;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_DURATION_MS: i64 = 600_000;
const PORTRAIT_SCREEN: (f32, f32) = (1080.0, 1920.0);
const CONTROLS_HEIGHT: f32 = 120.0;

struct CliArgs {
    config_dir: Option<PathBuf>,
    duration_ms: i64,
    instant_seeking: bool,
}

fn parse_args() -> Result<CliArgs, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(CliArgs {
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_ms: args
            .opt_value_from_str("--duration-ms")?
            .unwrap_or(DEFAULT_DURATION_MS),
        instant_seeking: !args.contains("--no-instant-seeking"),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let (settings, warning) = config::load_with_override(args.config_dir);
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let mut options = OverlayOptions::from(&settings);
    if !args.instant_seeking {
        options.instant_seeking = false;
    }
    let mut overlay = build_overlay(options, args.duration_ms);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(read_commands(BufReader::new(tokio::io::stdin()), sender));
        runtime::run(&mut overlay, receiver).await;
    });
    // A stdin read still in flight cannot be canceled; don't wait for it.
    runtime.shutdown_background();

    match overlay.diagnostics().export_json() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: failed to export diagnostics: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_overlay(options: OverlayOptions, duration_ms: i64) -> MediaOverlay {
    let player = SimulatedPlayer::new(duration_ms, SystemClock);
    player.start_playing();

    let (width, height) = PORTRAIT_SCREEN;
    let mut overlay = MediaOverlay::new(options);
    overlay.set_media_player(player);
    overlay.set_volume_output(SimulatedAudio::new(8, 15));
    overlay.set_brightness_store(SimulatedWindow::new(None));
    overlay.set_anchor(SimulatedSurface::new(
        Bounds::new(0.0, 0.0, width, height * 0.4),
        CONTROLS_HEIGHT,
    ));
    overlay.set_screen_size(width, height);
    overlay.set_file_name("simulated.mp4");
    overlay.set_on_shown(|| info!("controls shown"));
    overlay.set_on_hidden(|| info!("controls hidden"));
    overlay.set_prev_next_listeners(
        Some(Box::new(|| info!("next pressed"))),
        Some(Box::new(|| info!("previous pressed"))),
    );
    overlay
}

/// Forwards parsed commands until `quit` or end of input.
///
/// Stops reading as soon as [`Message::Shutdown`] has been sent.
async fn read_commands<R>(reader: R, sender: mpsc::UnboundedSender<Message>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!(error = %err, "failed to read stdin");
                break;
            }
        };
        let Some(messages) = parse_command(&line) else {
            warn!(command = line.trim(), "unknown command");
            continue;
        };
        for message in messages {
            let shutdown = message == Message::Shutdown;
            if sender.send(message).is_err() || shutdown {
                return;
            }
        }
    }
    let _ = sender.send(Message::Shutdown);
}

/// Translates one command line into overlay messages.
///
/// Returns `None` for unknown or malformed commands; blank lines yield no
/// messages.
fn parse_command(line: &str) -> Option<Vec<Message>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Some(Vec::new());
    };

    let messages = match command {
        "tap" => vec![
            Message::GestureDown {
                x: PORTRAIT_SCREEN.0 / 2.0,
                y: PORTRAIT_SCREEN.1 / 2.0,
            },
            Message::GestureUp,
        ],
        "down" => {
            let x = number(&mut words)? as f32;
            let y = number(&mut words)? as f32;
            vec![Message::GestureDown { x, y }]
        }
        "move" => vec![Message::GestureMove {
            y: number(&mut words)? as f32,
        }],
        "up" => vec![Message::GestureUp],
        "cancel" => vec![Message::GestureCancel],
        "touch" => vec![Message::OverlayTouched],
        "seek-begin" => vec![Message::SeekStarted],
        "seek" => vec![Message::SeekChanged(Permille::new(number(&mut words)? as i64))],
        "seek-end" => vec![Message::SeekReleased],
        "seek-cancel" => vec![Message::SeekCanceled],
        "pause" => vec![Message::TogglePause],
        "rew" => vec![Message::Rewind],
        "ffwd" => vec![Message::FastForward],
        "next" => vec![Message::Next],
        "prev" => vec![Message::Prev],
        "expand" => vec![Message::Expand],
        "shrink" => vec![Message::Shrink],
        "key" => {
            let key = Key::from_name(words.next()?);
            let repeat = words.next().and_then(|w| w.parse().ok()).unwrap_or(0);
            vec![Message::Key { key, repeat }]
        }
        "landscape" => orientation_messages(Orientation::Landscape),
        "portrait" => orientation_messages(Orientation::Portrait),
        "show" => match number(&mut words) {
            Some(ms) => vec![Message::Show(Duration::from_millis(ms.max(0.0) as u64))],
            None => vec![Message::OverlayTouched],
        },
        "hide" => vec![Message::Hide],
        "quit" | "exit" => vec![Message::Shutdown],
        _ => return None,
    };
    Some(messages)
}

fn number(words: &mut SplitWhitespace<'_>) -> Option<f64> {
    words.next().and_then(|word| word.parse().ok())
}

fn orientation_messages(orientation: Orientation) -> Vec<Message> {
    let (width, height) = match orientation {
        Orientation::Portrait => PORTRAIT_SCREEN,
        Orientation::Landscape => (PORTRAIT_SCREEN.1, PORTRAIT_SCREEN.0),
    };
    vec![
        Message::ScreenResized { width, height },
        Message::OrientationChanged {
            orientation,
            scale: None,
        },
    ]
}
