// SPDX-License-Identifier: MPL-2.0
//! Display geometry shared between the overlay and its hosting surface.

/// Device orientation reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Screen-space rectangle of the anchor view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left position at which a bar of `controls_height` sits flush
    /// with the bottom edge of these bounds.
    #[must_use]
    pub fn bottom_placement(&self, controls_height: f32) -> (f32, f32) {
        let bottom = self.y + self.height - controls_height.max(0.0);
        (self.x, bottom.max(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_placement_aligns_to_bottom_edge() {
        let bounds = Bounds::new(10.0, 100.0, 1080.0, 600.0);
        assert_eq!(bounds.bottom_placement(80.0), (10.0, 620.0));
    }

    #[test]
    fn bottom_placement_never_goes_above_anchor() {
        let bounds = Bounds::new(0.0, 50.0, 320.0, 40.0);
        assert_eq!(bounds.bottom_placement(200.0), (0.0, 50.0));
    }
}
