//! Cyclone Core Library
//!
//! Vector-math foundation for a particle physics engine.
//!
//! - [`Vector3`]: 3D vector with in-place and copy-returning arithmetic,
//!   normalization, dot/cross products and angle queries
//! - [`precision`]: the single `Real` alias that picks `f32` or `f64`
//! - [`Particle`]: linear state of a point mass (data only, no integrator)
//!
//! ```
//! use cyclone_core::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a % b, Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(a.to_string(), "(1, 0, 0)");
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;
pub mod particle;
pub mod precision;

pub use core_types::{Degrees, Fraction, Radians, Vector3};
pub use error::CycloneError;
pub use particle::Particle;
pub use precision::{Real, TO_DEGREES, TO_RADIANS};
