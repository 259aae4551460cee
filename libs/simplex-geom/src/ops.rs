//! # Geometric Predicates
//!
//! Free functions shared by the shape types: shoelace area, collinearity,
//! and the barycentric point-in-triangle test. All tolerances come from
//! `config::constants::EPSILON`.

use crate::point::Point;
use config::constants::EPSILON;
use glam::DVec2;

/// Unsigned area of the triangle spanned by three points (shoelace formula).
///
/// Computed as half the absolute perp-dot of the two edge vectors from `a`.
///
/// # Example
///
/// ```rust
/// use simplex_geom::{ops, Point};
///
/// let area = ops::shoelace_area(
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 4.0),
/// );
/// assert_eq!(area, 6.0);
/// ```
#[must_use]
pub fn shoelace_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = DVec2::from(b) - DVec2::from(a);
    let ac = DVec2::from(c) - DVec2::from(a);
    ab.perp_dot(ac).abs() / 2.0
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Whether three points lie on a single line.
///
/// Points form a valid triangle only when their shoelace area is strictly
/// greater than `EPSILON`.
#[must_use]
pub fn are_collinear(a: Point, b: Point, c: Point) -> bool {
    shoelace_area(a, b, c) <= EPSILON
}

/// Whether `p` lies within the triangle `(a, b, c)`, edges included.
///
/// Barycentric area decomposition: the three sub-triangles formed by `p`
/// with each pair of vertices sum to the triangle's own area exactly when
/// `p` is inside or on the boundary.
#[must_use]
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let total = shoelace_area(a, b, c);
    let area_a = shoelace_area(p, b, c);
    let area_b = shoelace_area(a, p, c);
    let area_c = shoelace_area(a, b, p);
    (total - (area_a + area_b + area_c)).abs() < EPSILON
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shoelace_area_345_triangle() {
        let area = shoelace_area(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        );
        assert_relative_eq!(area, 6.0);
    }

    #[test]
    fn test_shoelace_area_order_independent() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 2.0);
        let c = Point::new(2.0, 5.0);
        assert_relative_eq!(shoelace_area(a, b, c), shoelace_area(c, a, b));
        assert_relative_eq!(shoelace_area(a, b, c), shoelace_area(b, a, c));
    }

    #[test]
    fn test_collinear_on_diagonal() {
        assert!(are_collinear(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ));
    }

    #[test]
    fn test_collinear_with_repeated_point() {
        let p = Point::new(2.0, 3.0);
        assert!(are_collinear(p, p, Point::new(5.0, 1.0)));
    }

    #[test]
    fn test_not_collinear() {
        assert!(!are_collinear(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        ));
    }

    #[test]
    fn test_point_in_triangle_interior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(0.0, 4.0);
        assert!(point_in_triangle(Point::new(0.5, 0.5), a, b, c));
    }

    #[test]
    fn test_point_on_edge_counts_as_inside() {
        // (1.5, 2) sits on the hypotenuse from (3, 0) to (0, 4)
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(0.0, 4.0);
        assert!(point_in_triangle(Point::new(1.5, 2.0), a, b, c));
    }

    #[test]
    fn test_point_outside_triangle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(0.0, 4.0);
        assert!(!point_in_triangle(Point::new(5.0, 5.0), a, b, c));
    }
}
