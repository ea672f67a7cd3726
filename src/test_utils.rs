// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Brightness and gesture percentages are `f32`, so tests compare them with
//! `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
