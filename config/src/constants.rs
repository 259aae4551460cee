//! # Configuration Constants
//!
//! Centralized constants for the simplex geometry toolkit. All degeneracy
//! tolerances and display precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Display**: Formatting applied to derived quantities

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for geometric degeneracy checks.
///
/// Three points are accepted as a triangle only when their shoelace area is
/// strictly greater than this tolerance, and a tetrahedron apex is rejected
/// as coplanar when the base's area decomposition differs by less than it.
/// The magnitude is load-bearing: the coplanarity guard for an apex sitting
/// exactly on a base edge depends on it.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn is_degenerate(area: f64) -> bool {
///     area <= EPSILON
/// }
///
/// assert!(is_degenerate(1e-11));
/// assert!(!is_degenerate(6.0));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Decimal places applied to derived quantities (area, volume) when printed.
///
/// Point coordinates are never rounded at this layer; only computed metrics
/// are formatted for display.
///
/// # Example
///
/// ```rust
/// use config::constants::DISPLAY_PRECISION;
///
/// let area = 6.0_f64;
/// let formatted = format!("{:.*}", DISPLAY_PRECISION, area);
/// assert_eq!(formatted, "6.00");
/// ```
pub const DISPLAY_PRECISION: usize = 2;

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
