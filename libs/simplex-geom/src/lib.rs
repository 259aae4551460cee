//! # Simplex Geom
//!
//! Planar simplex value types: a triangle defined by three 2D points and a
//! tetrahedron built from a triangular base, an apex point, and a height.
//!
//! ## Architecture
//!
//! ```text
//! Point (value type) → Triangle (validated base) → Tetrahedron (base + apex)
//! ```
//!
//! Shapes are created empty and become usable only after a successful
//! `set_coordinates` call. Every derived quantity (area, volume, the
//! human-readable vertex listing) is guarded: querying an uninitialized
//! shape returns [`GeometryError::Uninitialized`].
//!
//! ## Usage
//!
//! ```rust
//! use simplex_geom::{Point, Triangle};
//!
//! let mut triangle = Triangle::new();
//! triangle.set_coordinates(
//!     Point::new(0.0, 0.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(0.0, 4.0),
//! )?;
//! assert_eq!(triangle.area()?, 6.0);
//! # Ok::<(), simplex_geom::GeometryError>(())
//! ```

pub mod error;
pub mod ops;
pub mod point;
pub mod tetrahedron;
pub mod triangle;

pub use error::GeometryError;
pub use point::Point;
pub use tetrahedron::Tetrahedron;
pub use triangle::Triangle;
