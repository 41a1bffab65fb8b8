//! Displayed-image transform: zoom, rotation, pan.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Zoom values this close to 1 are treated as exactly 1.
const UNIT_EPSILON: f64 = 1e-9;

/// A 2D offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Transform applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub zoom: f64,
    /// Degrees clockwise, always in `0..360`.
    pub rotation: u16,
    pub pan: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        zoom: 1.0,
        rotation: 0,
        pan: Point::ORIGIN,
    };

    /// Zoomed past 1x.
    pub fn is_zoomed(&self) -> bool {
        self.zoom > 1.0
    }

    /// Set zoom, snapping near-unit values and dropping pan at or below 1x.
    pub(crate) fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if (zoom - 1.0).abs() < UNIT_EPSILON { 1.0 } else { zoom };
        if !self.is_zoomed() {
            self.pan = Point::ORIGIN;
        }
    }

    pub(crate) fn rotate_by(&mut self, degrees: u16) {
        self.rotation = ((u32::from(self.rotation) + u32::from(degrees)) % 360) as u16;
    }

    /// CSS `transform` value. Pan is divided by zoom so the image follows
    /// the pointer one-to-one after scaling.
    ///
    /// ```
    /// use pods_viewer::transform::{Point, Transform};
    /// let t = Transform { zoom: 2.0, rotation: 90, pan: Point::new(40.0, -10.0) };
    /// assert_eq!(t.css(), "scale(2) rotate(90deg) translate(20px, -5px)");
    /// ```
    pub fn css(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "scale({}) rotate({}deg) translate({}px, {}px)",
            self.zoom,
            self.rotation,
            self.pan.x / self.zoom,
            self.pan.y / self.zoom
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_css() {
        assert_eq!(
            Transform::IDENTITY.css(),
            "scale(1) rotate(0deg) translate(0px, 0px)"
        );
    }

    #[test]
    fn test_rotation_wraps() {
        let mut t = Transform::IDENTITY;
        for _ in 0..5 {
            t.rotate_by(90);
        }
        assert_eq!(t.rotation, 90);
    }

    #[test]
    fn test_unzooming_drops_pan() {
        let mut t = Transform {
            zoom: 2.0,
            rotation: 0,
            pan: Point::new(5.0, 5.0),
        };
        t.set_zoom(1.0 + 1e-12);
        assert_eq!(t.zoom, 1.0);
        assert_eq!(t.pan, Point::ORIGIN);
    }
}
