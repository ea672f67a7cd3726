// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The overlay owns one collector and records into it directly; everything
//! runs on one control-flow context, so no channel sits in between.

use std::time::Instant;

use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Serialized shape of an exported report.
#[derive(Debug, Serialize)]
struct DiagnosticReport<'a> {
    crate_version: &'static str,
    event_count: usize,
    capacity: usize,
    events: Vec<&'a DiagnosticEvent>,
}

/// Central diagnostics collector.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a collector whose event timestamps are relative to `started_at`.
    #[must_use]
    pub fn new(capacity: BufferCapacity, started_at: Instant) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at,
        }
    }

    /// Records an event that happened at `now`.
    #[allow(clippy::cast_possible_truncation)] // Milliseconds fit comfortably in u64
    pub fn record(&mut self, kind: DiagnosticEventKind, now: Instant) {
        let at_ms = now.saturating_duration_since(self.started_at).as_millis() as u64;
        self.buffer.push(DiagnosticEvent { at_ms, kind });
    }

    /// Records a warning.
    pub fn record_warning(&mut self, message: impl Into<String>, now: Instant) {
        self.record(
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
            now,
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates over events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Iterates over event kinds, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = DiagnosticReport {
            crate_version: env!("CARGO_PKG_VERSION"),
            event_count: self.buffer.len(),
            capacity: self.buffer.capacity(),
            events: self.buffer.iter().collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), Instant::now())
    }
}
