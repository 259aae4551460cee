//! # Config Crate
//!
//! Centralized configuration constants for the simplex geometry toolkit.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::EPSILON;
//!
//! // Use EPSILON for degeneracy checks
//! let signed_area: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_degenerate = signed_area.abs() <= EPSILON;
//! assert!(is_degenerate);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
