//! # Triangle
//!
//! A triangle defined by three planar points, validated for non-collinearity
//! at construction time and queried for its area via Heron's formula.

use crate::error::GeometryError;
use crate::ops;
use crate::point::Point;

/// A triangle with three ordered vertices and an initialization flag.
///
/// Created empty; becomes usable only after a successful
/// [`set_coordinates`](Triangle::set_coordinates) call. A failed call leaves
/// any previously stored vertices untouched.
///
/// # Example
///
/// ```rust
/// use simplex_geom::{Point, Triangle};
///
/// let mut triangle = Triangle::new();
/// assert!(triangle.area().is_err());
///
/// triangle.set_coordinates(
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 4.0),
/// )?;
/// assert_eq!(triangle.area()?, 6.0);
/// # Ok::<(), simplex_geom::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangle {
    /// Vertices in the order supplied by the caller
    vertices: [Point; 3],
    /// Whether a set_coordinates call has succeeded
    initialized: bool,
}

impl Triangle {
    /// Creates an empty, uninitialized triangle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once coordinates have been successfully set.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Validates and stores the three vertices, in order.
    ///
    /// The points must not be collinear (shoelace area strictly greater
    /// than `config::constants::EPSILON`). On failure the prior state is
    /// unchanged. May be called again to fully replace the vertices.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidGeometry`] if the points are collinear.
    pub fn set_coordinates(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
    ) -> Result<(), GeometryError> {
        if ops::are_collinear(p1, p2, p3) {
            return Err(GeometryError::invalid_geometry(
                "The given points do not form a valid triangle (they may be collinear)",
            ));
        }

        self.vertices = [p1, p2, p3];
        self.initialized = true;
        Ok(())
    }

    /// Returns the stored vertices.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if coordinates were never set.
    pub fn vertices(&self) -> Result<&[Point; 3], GeometryError> {
        self.ensure_initialized()?;
        Ok(&self.vertices)
    }

    /// Computes the area using Heron's formula.
    ///
    /// The side lengths are the pairwise Euclidean distances between the
    /// stored vertices. The radicand is clamped to zero before the square
    /// root: rounding on near-degenerate inputs can push it a hair below
    /// zero, which would otherwise surface as NaN.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if coordinates were never set.
    pub fn area(&self) -> Result<f64, GeometryError> {
        self.ensure_initialized()?;

        let [v0, v1, v2] = self.vertices;
        let a = ops::distance(v0, v1);
        let b = ops::distance(v1, v2);
        let c = ops::distance(v2, v0);

        let s = (a + b + c) / 2.0;
        let radicand = (s * (s - a) * (s - b) * (s - c)).max(0.0);
        Ok(radicand.sqrt())
    }

    /// Renders the vertex listing, one line per vertex, 1-indexed.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if coordinates were never set.
    pub fn describe(&self) -> Result<String, GeometryError> {
        let vertices = self.vertices()?;

        let mut lines = vec!["Triangle vertices:".to_string()];
        for (i, vertex) in vertices.iter().enumerate() {
            lines.push(format!("Vertex {}: {}", i + 1, vertex));
        }
        Ok(lines.join("\n"))
    }

    fn ensure_initialized(&self) -> Result<(), GeometryError> {
        if self.initialized {
            Ok(())
        } else {
            Err(GeometryError::uninitialized(
                "Triangle coordinates have not been set",
            ))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
