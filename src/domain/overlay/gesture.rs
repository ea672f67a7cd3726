// SPDX-License-Identifier: MPL-2.0
//! Gesture classification and gesture-to-value mapping.
//!
//! A drag starting on the left edge of the screen controls brightness, one
//! starting on the right edge controls volume. The seek bar reports its own
//! drag phases, so region classification never yields [`DragKind::Seek`].
//!
//! All mapping functions are pure; clamping happens before any value leaves
//! this module.

use super::newtypes::{Brightness, VolumeRange};

/// Default width of each edge zone, as a fraction of the screen width.
pub const DEFAULT_EDGE_FRACTION: f32 = 0.2;

/// What a drag session controls. Fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    Seek,
    Volume,
    Brightness,
}

/// Classifies a gesture by the x coordinate it started at, using the
/// default one-fifth edge zones.
#[must_use]
pub fn classify(origin_x: f32, screen_width: f32) -> Option<DragKind> {
    classify_with_zone(origin_x, screen_width, DEFAULT_EDGE_FRACTION)
}

/// Classifies a gesture with edge zones of `edge_fraction` of the width.
///
/// Returns `None` for the middle of the screen and for degenerate widths.
#[must_use]
pub fn classify_with_zone(
    origin_x: f32,
    screen_width: f32,
    edge_fraction: f32,
) -> Option<DragKind> {
    if !screen_width.is_finite() || screen_width <= 0.0 || !origin_x.is_finite() {
        return None;
    }
    let zone = screen_width * edge_fraction.clamp(0.0, 0.5);
    if origin_x < zone {
        Some(DragKind::Brightness)
    } else if origin_x > screen_width - zone {
        Some(DragKind::Volume)
    } else {
        None
    }
}

/// Vertical travel as a fraction of the screen height; moving up is positive.
#[must_use]
pub fn swipe_percent(start_y: f32, current_y: f32, screen_height: f32) -> f32 {
    if !screen_height.is_finite() || screen_height <= 0.0 {
        return 0.0;
    }
    (start_y - current_y) / screen_height
}

/// Volume index reached after swiping `percent` from `origin`.
#[must_use]
pub fn volume_index_for(origin: i32, percent: f32, range: VolumeRange) -> i32 {
    let delta = (f64::from(percent) * f64::from(range.max())).round();
    let delta = if delta.is_finite() { delta as i64 } else { 0 };
    range.clamp(i64::from(origin).saturating_add(delta))
}

/// Brightness reached after swiping `percent` from `origin`.
#[must_use]
pub fn brightness_for(origin: Brightness, percent: f32) -> Brightness {
    Brightness::new(origin.value() + percent)
}

/// One continuous pointer interaction recognised as seek, volume or brightness.
///
/// Volume and brightness origins stay unset until the first motion sample,
/// so each swipe starts from the device value current at that moment.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSession {
    Seek {
        /// Whether the session muted audio and therefore owes an unmute.
        muted_audio: bool,
        /// Last position requested through the seek bar.
        target_ms: Option<i64>,
    },
    Volume {
        start_y: f32,
        origin: Option<i32>,
    },
    Brightness {
        start_y: f32,
        origin: Option<Brightness>,
    },
}

impl DragSession {
    /// Session for a seek-bar drag.
    #[must_use]
    pub fn seek(muted_audio: bool) -> Self {
        DragSession::Seek {
            muted_audio,
            target_ms: None,
        }
    }

    /// Session for an edge swipe; `None` for [`DragKind::Seek`].
    #[must_use]
    pub fn swipe(kind: DragKind, start_y: f32) -> Option<Self> {
        match kind {
            DragKind::Seek => None,
            DragKind::Volume => Some(DragSession::Volume {
                start_y,
                origin: None,
            }),
            DragKind::Brightness => Some(DragSession::Brightness {
                start_y,
                origin: None,
            }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DragKind {
        match self {
            DragSession::Seek { .. } => DragKind::Seek,
            DragSession::Volume { .. } => DragKind::Volume,
            DragSession::Brightness { .. } => DragKind::Brightness,
        }
    }

    #[must_use]
    pub fn is_seek(&self) -> bool {
        matches!(self, DragSession::Seek { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_edge_fraction_matches_config() {
        assert_abs_diff_eq!(DEFAULT_EDGE_FRACTION, crate::config::DEFAULT_EDGE_ZONE_FRACTION);
    }

    #[test]
    fn classify_splits_screen_into_fifths() {
        assert_eq!(classify(10.0, 1000.0), Some(DragKind::Brightness));
        assert_eq!(classify(199.0, 1000.0), Some(DragKind::Brightness));
        assert_eq!(classify(200.0, 1000.0), None);
        assert_eq!(classify(500.0, 1000.0), None);
        assert_eq!(classify(800.0, 1000.0), None);
        assert_eq!(classify(801.0, 1000.0), Some(DragKind::Volume));
        assert_eq!(classify(999.0, 1000.0), Some(DragKind::Volume));
    }

    #[test]
    fn classify_rejects_degenerate_screens() {
        assert_eq!(classify(10.0, 0.0), None);
        assert_eq!(classify(10.0, -100.0), None);
        assert_eq!(classify(f32::NAN, 1000.0), None);
    }

    #[test]
    fn classify_never_yields_seek() {
        for x in 0..=100 {
            assert_ne!(classify(x as f32 * 10.0, 1000.0), Some(DragKind::Seek));
        }
    }

    #[test]
    fn classify_with_wider_zone() {
        assert_eq!(
            classify_with_zone(290.0, 1000.0, 0.3),
            Some(DragKind::Brightness)
        );
        assert_eq!(classify_with_zone(710.0, 1000.0, 0.3), Some(DragKind::Volume));
    }

    #[test]
    fn swipe_up_is_positive() {
        assert_abs_diff_eq!(swipe_percent(800.0, 400.0, 1000.0), 0.4);
        assert_abs_diff_eq!(swipe_percent(400.0, 800.0, 1000.0), -0.4);
        assert_abs_diff_eq!(swipe_percent(400.0, 800.0, 0.0), 0.0);
    }

    #[test]
    fn volume_index_rounds_and_clamps() {
        let range = VolumeRange::new(15);
        assert_eq!(volume_index_for(5, 0.2, range), 8);
        assert_eq!(volume_index_for(5, -1.0, range), 0);
        assert_eq!(volume_index_for(5, 1.0, range), 15);
    }

    #[test]
    fn volume_index_stays_in_range_for_extreme_swipes() {
        let range = VolumeRange::new(15);
        for origin in 0..=15 {
            for step in -100..=100 {
                let percent = step as f32 / 10.0;
                let index = volume_index_for(origin, percent, range);
                assert!((0..=15).contains(&index));
            }
        }
    }

    #[test]
    fn brightness_stays_in_range_for_extreme_swipes() {
        for origin_step in 1..=100 {
            let origin = Brightness::new(origin_step as f32 / 100.0);
            for step in -100..=100 {
                let value = brightness_for(origin, step as f32 / 10.0).value();
                assert!((0.01..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn brightness_adds_percent_to_origin() {
        let value = brightness_for(Brightness::new(0.5), 0.25).value();
        assert_abs_diff_eq!(value, 0.75);
    }

    #[test]
    fn swipe_sessions_start_without_origin() {
        let session = DragSession::swipe(DragKind::Volume, 300.0).unwrap();
        assert_eq!(session.kind(), DragKind::Volume);
        assert!(matches!(session, DragSession::Volume { origin: None, .. }));

        assert!(DragSession::swipe(DragKind::Seek, 0.0).is_none());
        assert!(DragSession::seek(true).is_seek());
    }
}
