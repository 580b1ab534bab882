//! C ABI for the Cyclone vector core.
//!
//! Vectors cross the boundary by value as [`CycloneVector3`]. In-place
//! operations take a pointer and return a [`CycloneErrorCode`]; on failure the
//! message is kept in thread-local storage for [`cyclone_get_last_error`].
//!
//! The C header `Cyclone.h` is generated at build time by cbindgen.
//!
//! ```c
//! CycloneVector3 a = cyclone_vector3_new(1.0f, 0.0f, 0.0f);
//! CycloneVector3 b = cyclone_vector3_new(0.0f, 1.0f, 0.0f);
//! CycloneVector3 up = cyclone_vector3_vector_product(a, b); // (0, 0, 1)
//! ```

mod error;
mod helpers;
mod particle;
mod vector;

pub use error::{
    cyclone_clear_last_error, cyclone_get_last_error, cyclone_get_last_error_code,
    CycloneErrorCode,
};
pub use particle::{cyclone_particle_new, cyclone_particle_set_damping, CycloneParticle};
pub use vector::*;
