use cyclone_core::{Fraction, Particle};

use crate::error::{CycloneErrorCode, DefaultFfiError};
use crate::helpers::{track_error, track_result};
use crate::vector::{CycloneReal, CycloneVector3};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// C-compatible particle state. `damping` is kept in `[0, 1]` by
/// `cyclone_particle_set_damping`.
pub struct CycloneParticle {
    /// Linear position
    pub position: CycloneVector3,

    /// Linear velocity
    pub velocity: CycloneVector3,

    /// Constant acceleration
    pub acceleration: CycloneVector3,

    /// Proportion of velocity retained per second
    pub damping: CycloneReal,
}

impl From<Particle> for CycloneParticle {
    fn from(p: Particle) -> Self {
        Self {
            position: p.position.into(),
            velocity: p.velocity.into(),
            acceleration: p.acceleration.into(),
            damping: p.damping.value(),
        }
    }
}

/// A particle at rest at `position` with damping `1.0`.
#[no_mangle]
pub extern "C" fn cyclone_particle_new(position: CycloneVector3) -> CycloneParticle {
    Particle::new(position.into()).into()
}

/// Set `particle->damping`, failing with `InvalidParameter` (and leaving the
/// particle unchanged) when `damping` is outside `[0, 1]` or NaN.
///
/// # Safety
/// `particle` must be null or point to a valid, writable `CycloneParticle`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_particle_set_damping(
    particle: *mut CycloneParticle,
    damping: CycloneReal,
) -> CycloneErrorCode {
    if particle.is_null() {
        return track_error(&DefaultFfiError::null_pointer("particle"));
    }
    let out = &mut *particle;
    track_result(Fraction::try_new("damping", damping).map(|fraction| {
        out.damping = fraction.value();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::cyclone_get_last_error;
    use crate::vector::{cyclone_vector3_new, cyclone_vector3_zero};
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = cyclone_particle_new(cyclone_vector3_new(1.0, 2.0, 3.0));
        assert_eq!(p.position, cyclone_vector3_new(1.0, 2.0, 3.0));
        assert_eq!(p.velocity, cyclone_vector3_zero());
        assert_eq!(p.acceleration, cyclone_vector3_zero());
        assert_eq!(p.damping, 1.0);
    }

    #[test]
    fn test_set_damping() {
        let mut p = cyclone_particle_new(cyclone_vector3_zero());
        let code = unsafe { cyclone_particle_set_damping(&mut p, 0.9) };
        assert_eq!(code, CycloneErrorCode::Ok);
        assert_eq!(p.damping, 0.9);
    }

    #[test]
    fn test_set_damping_out_of_range_is_invalid_parameter() {
        let mut p = cyclone_particle_new(cyclone_vector3_zero());
        let code = unsafe { cyclone_particle_set_damping(&mut p, 1.5) };
        assert_eq!(code, CycloneErrorCode::InvalidParameter);
        assert_eq!(p.damping, 1.0);
        let msg = unsafe { CStr::from_ptr(cyclone_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "damping must be in [0, 1], got 1.5");

        let code = unsafe { cyclone_particle_set_damping(&mut p, CycloneReal::NAN) };
        assert_eq!(code, CycloneErrorCode::InvalidParameter);
    }

    #[test]
    fn test_set_damping_null_particle() {
        let code = unsafe { cyclone_particle_set_damping(ptr::null_mut(), 0.5) };
        assert_eq!(code, CycloneErrorCode::NullPointer);
    }
}
