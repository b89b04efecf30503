//! Geometric primitives
//!
//! Points live in the SVG coordinate space of the chart: the origin sits on
//! the semicircle's flat edge (the diameter), x grows rightward and y grows
//! downward into the bowl.

use serde::{Deserialize, Serialize};

/// A seat center position in chart coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// X position (px from the left edge of the chart)
    pub x: f32,

    /// Y position (px below the flat edge of the semicircle)
    pub y: f32,
}

impl Point {
    /// Convert a polar slot `(radius, angle)` to chart coordinates.
    ///
    /// `angle` is measured counterclockwise from the positive x axis, so the
    /// left end of the flat edge is `PI`, the apex of the bowl is `PI / 2`,
    /// and the right end is `0`. `center_x` is the x position of the chart
    /// center on the flat edge.
    pub fn from_polar(center_x: f32, radius: f32, angle: f32) -> Self {
        Self {
            x: center_x + radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Distance from this point to the chart center on the flat edge.
    pub fn radius_from(&self, center_x: f32) -> f32 {
        (self.x - center_x).hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_from_polar_apex() {
        let p = Point::from_polar(400.0, 100.0, FRAC_PI_2);
        assert!((p.x - 400.0).abs() < 1e-3, "apex should sit on the center line");
        assert!((p.y - 100.0).abs() < 1e-3, "apex should sit one radius into the bowl");
    }

    #[test]
    fn test_from_polar_left_edge() {
        let p = Point::from_polar(400.0, 100.0, PI);
        assert!((p.x - 300.0).abs() < 1e-3);
        assert!(p.y.abs() < 1e-3, "flat edge seats have y = 0");
    }

    #[test]
    fn test_radius_from_inverts_from_polar() {
        let p = Point::from_polar(420.0, 88.0, 1.2);
        assert!((p.radius_from(420.0) - 88.0).abs() < 1e-3);
    }
}
