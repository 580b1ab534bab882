//! Core types and utilities

pub mod units;
pub mod vector3;

pub use units::{Degrees, Fraction, Radians};
pub use vector3::Vector3;
