//! # Point
//!
//! Immutable 2D coordinate pair, the leaf value type of the crate.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point with `x` and `y` coordinates.
///
/// Points are plain values: any finite or non-finite float is accepted,
/// equality is structural, and copies are free. All metric math goes
/// through [`glam::DVec2`].
///
/// # Example
///
/// ```rust
/// use simplex_geom::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.distance(Point::ORIGIN), 5.0);
/// assert_eq!(p.to_string(), "(3, 4)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: Point) -> f64 {
        DVec2::from(*self).distance(other.into())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for DVec2 {
    fn from(point: Point) -> Self {
        DVec2::new(point.x, point.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_display_uses_default_float_formatting() {
        assert_eq!(Point::new(0.0, 0.0).to_string(), "(0, 0)");
        assert_eq!(Point::new(1.5, 2.0).to_string(), "(1.5, 2)");
    }

    #[test]
    fn test_distance_345() {
        let distance = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert_eq!(distance, 5.0);
    }

    #[test]
    fn test_dvec2_round_trip() {
        let p = Point::new(-2.5, 7.0);
        let back: Point = DVec2::from(p).into();
        assert_eq!(p, back);
    }
}
