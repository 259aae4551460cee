//! # Tetrahedron
//!
//! A solid built from a triangular base, an apex point, and a height.
//! Composition rather than inheritance: the solid holds a [`Triangle`]
//! base and delegates base validation and area to it, while keeping its
//! own initialization flag.

use crate::error::GeometryError;
use crate::ops;
use crate::point::Point;
use crate::triangle::Triangle;

/// A tetrahedron over a planar triangular base.
///
/// The base and the solid carry independent initialization flags. A failed
/// apex check happens after the base has already been validated and stored,
/// so the base can end up initialized while the solid is not. This mirrors
/// the historical contract of the shape hierarchy and is covered by tests
/// rather than papered over; [`base`](Tetrahedron::base) exposes it.
///
/// # Example
///
/// ```rust
/// use simplex_geom::{Point, Tetrahedron};
///
/// let mut tetrahedron = Tetrahedron::new();
/// tetrahedron.set_coordinates(
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 4.0),
///     Point::new(5.0, 5.0),
///     5.0,
/// )?;
/// assert_eq!(tetrahedron.volume()?, 10.0);
/// # Ok::<(), simplex_geom::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tetrahedron {
    /// The triangular base, with its own validity flag
    base: Triangle,
    /// Apex point, origin until the solid is initialized
    apex: Point,
    /// Height above the base plane
    height: f64,
    /// Whether a set_coordinates call has succeeded for the solid
    initialized: bool,
}

impl Tetrahedron {
    /// Creates an empty, uninitialized tetrahedron.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the solid's coordinates have been successfully set.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The triangular base.
    ///
    /// Note that the base may be initialized even when the solid is not:
    /// an apex rejected by the coplanarity guard arrives after the base
    /// has already been validated and stored.
    #[must_use]
    pub fn base(&self) -> &Triangle {
        &self.base
    }

    /// Validates and stores the base vertices, apex, and height.
    ///
    /// Checks run in order:
    ///
    /// 1. `height` must be strictly positive, before any base validation.
    /// 2. The base vertices must form a valid triangle (delegated to
    ///    [`Triangle::set_coordinates`]).
    /// 3. The apex must not lie in the base's plane, detected by the
    ///    barycentric area decomposition in [`ops::point_in_triangle`].
    ///
    /// A failure at step 3 leaves the solid's apex, height, and flag
    /// unchanged, but the base has already been replaced at step 2.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidParameter`] for a non-positive height.
    /// - [`GeometryError::InvalidGeometry`] for a collinear base or an
    ///   in-plane apex.
    pub fn set_coordinates(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        apex: Point,
        height: f64,
    ) -> Result<(), GeometryError> {
        if height <= 0.0 {
            return Err(GeometryError::invalid_parameter("Height must be positive"));
        }

        self.base.set_coordinates(p1, p2, p3)?;

        if ops::point_in_triangle(apex, p1, p2, p3) {
            return Err(GeometryError::invalid_geometry(
                "The fourth vertex cannot lie in the same plane as the base triangle",
            ));
        }

        self.apex = apex;
        self.height = height;
        self.initialized = true;
        Ok(())
    }

    /// Returns the apex point.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if the solid was never initialized.
    pub fn apex(&self) -> Result<Point, GeometryError> {
        self.ensure_initialized()?;
        Ok(self.apex)
    }

    /// Returns the height above the base.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if the solid was never initialized.
    pub fn height(&self) -> Result<f64, GeometryError> {
        self.ensure_initialized()?;
        Ok(self.height)
    }

    /// Computes the volume: one third of the base area times the height.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if the solid was never initialized.
    pub fn volume(&self) -> Result<f64, GeometryError> {
        self.ensure_initialized()?;
        Ok(self.base.area()? * self.height / 3.0)
    }

    /// Renders the vertex listing: base vertices, apex, then height.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Uninitialized`] if the solid was never initialized.
    pub fn describe(&self) -> Result<String, GeometryError> {
        self.ensure_initialized()?;

        let vertices = self.base.vertices()?;
        let mut lines = vec!["Tetrahedron vertices:".to_string()];
        for (i, vertex) in vertices.iter().enumerate() {
            lines.push(format!("Base vertex {}: {}", i + 1, vertex));
        }
        lines.push(format!("Apex vertex: {}", self.apex));
        lines.push(format!("Height: {}", self.height));
        Ok(lines.join("\n"))
    }

    fn ensure_initialized(&self) -> Result<(), GeometryError> {
        if self.initialized {
            Ok(())
        } else {
            Err(GeometryError::uninitialized(
                "Tetrahedron coordinates have not been set",
            ))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
