//! Particle state record.
//!
//! Holds the linear state of a point mass. There is deliberately no update
//! step here: the particle is plain data until an integrator exists.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core_types::units::Fraction;
use crate::core_types::Vector3;
use crate::error::CycloneError;
use crate::precision::Real;

/// Linear state of a simulated point mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Linear position in world space
    pub position: Vector3,

    /// Linear velocity
    pub velocity: Vector3,

    /// Constant acceleration acting on the particle (gravity, for example)
    pub acceleration: Vector3,

    /// Proportion of velocity retained per second, in `[0, 1]`.
    /// `1.0` keeps all velocity, `0.0` removes it entirely.
    pub damping: Fraction,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vector3::zero())
    }
}

impl Particle {
    /// Create a particle at rest at `position` with no damping loss.
    #[must_use]
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            damping: Fraction::ONE,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the constant acceleration
    pub fn with_acceleration(mut self, acceleration: Vector3) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the damping
    pub fn with_damping(mut self, damping: Fraction) -> Self {
        self.damping = damping;
        self
    }

    /// Set the damping from a raw value.
    ///
    /// # Errors
    /// Returns [`CycloneError::OutOfRange`] when `damping` is outside
    /// `[0, 1]` or NaN. The current damping is kept in that case.
    pub fn set_damping(&mut self, damping: Real) -> Result<(), CycloneError> {
        match Fraction::try_new("damping", damping) {
            Ok(fraction) => {
                self.damping = fraction;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected particle damping: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p.velocity, Vector3::zero());
        assert_eq!(p.acceleration, Vector3::zero());
        assert_eq!(p.damping, Fraction::ONE);
    }

    #[test]
    fn test_builder() {
        let gravity = Vector3::new(0.0, -9.81, 0.0);
        let p = Particle::default()
            .with_velocity(Vector3::X * 10.0)
            .with_acceleration(gravity)
            .with_damping(Fraction::new(0.99));
        assert_eq!(p.velocity, Vector3::new(10.0, 0.0, 0.0));
        assert_eq!(p.acceleration, gravity);
        assert_eq!(*p.damping, 0.99);
    }

    #[test]
    fn test_set_damping_validates() {
        let mut p = Particle::default();
        assert_eq!(p.set_damping(0.5), Ok(()));
        assert_eq!(*p.damping, 0.5);

        assert!(p.set_damping(1.5).is_err());
        assert!(p.set_damping(-0.1).is_err());
        assert!(p.set_damping(Real::NAN).is_err());
        assert_eq!(*p.damping, 0.5);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Particle::new(Vector3::new(1.0, 2.0, 3.0))
            .with_velocity(Vector3::new(0.0, 0.5, 0.0))
            .with_damping(Fraction::new(0.75));
        let json = serde_json::to_string(&p).unwrap();
        let back: Particle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_damping() {
        let json = r#"{
            "position": {"x": 0.0, "y": 0.0, "z": 0.0},
            "velocity": {"x": 0.0, "y": 0.0, "z": 0.0},
            "acceleration": {"x": 0.0, "y": -9.81, "z": 0.0},
            "damping": 5.0
        }"#;
        let err = serde_json::from_str::<Particle>(json).unwrap_err();
        assert!(err.to_string().contains("must be in [0, 1]"));
    }
}
