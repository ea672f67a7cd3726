// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core overlay logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`overlay`]: Overlay value objects ([`Permille`](overlay::Permille),
//!   [`Brightness`](overlay::Brightness), [`VolumeRange`](overlay::VolumeRange),
//!   [`PlaybackSnapshot`](overlay::PlaybackSnapshot)) and gesture classification

pub mod overlay;
