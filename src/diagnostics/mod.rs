// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting overlay activity.
//!
//! The overlay records its state transitions and absorbed failures as
//! diagnostic events, stored in a memory-bounded circular buffer and
//! exportable as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A stamped event; [`DiagnosticEventKind`] holds its data
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticsCollector`]: Owner of the buffer and the JSON export

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, DragControl};
