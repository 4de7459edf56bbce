//! # Rigid Body Abstraction
//!
//! The controller layer never talks to a concrete physics backend. It reads
//! the pose and velocity of a body and issues force, torque and impulse
//! commands through the [`RigidBody`] trait. Any backend that can honour the
//! four [`ForceMode`]s can drive a kart.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// How a force command is interpreted by the backend.
///
/// `Impulse` and `VelocityChange` are applied instantly. `Force` and
/// `Acceleration` are rates that the backend integrates over the step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceMode {
    /// Continuous, mass dependent (N).
    Force,
    /// Continuous, mass independent (m/s^2).
    Acceleration,
    /// Instant, mass dependent (N*s).
    Impulse,
    /// Instant, mass independent (m/s).
    VelocityChange,
}

impl ForceMode {
    #[must_use]
    pub const fn is_instant(self) -> bool {
        matches!(self, ForceMode::Impulse | ForceMode::VelocityChange)
    }

    #[must_use]
    pub const fn is_mass_dependent(self) -> bool {
        matches!(self, ForceMode::Force | ForceMode::Impulse)
    }
}

/// A single command issued against a body. Backends that record their input
/// (see [`crate::SimBody::commands`]) expose these for inspection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BodyCommand {
    Force { force: Vec3, mode: ForceMode },
    ForceAtPosition { force: Vec3, point: Vec3, mode: ForceMode },
    Torque { torque: Vec3, mode: ForceMode },
}

impl BodyCommand {
    #[must_use]
    pub const fn mode(&self) -> ForceMode {
        match *self {
            BodyCommand::Force { mode, .. }
            | BodyCommand::ForceAtPosition { mode, .. }
            | BodyCommand::Torque { mode, .. } => mode,
        }
    }
}

/// Capability set a locomotion controller needs from a rigid body.
pub trait RigidBody {
    /// World space center of mass.
    fn position(&self) -> Vec3;

    fn rotation(&self) -> Quat;

    /// Linear velocity in world space.
    fn velocity(&self) -> Vec3;

    /// Angular velocity in world space (rad/s).
    fn angular_velocity(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode);

    /// Apply `force` at world space `point`, producing both a linear and an
    /// angular response.
    fn add_force_at_position(&mut self, force: Vec3, point: Vec3, mode: ForceMode);

    fn add_torque(&mut self, torque: Vec3, mode: ForceMode);

    /// Local +Z axis in world space.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Local +X axis in world space.
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Local +Y axis in world space.
    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Velocity expressed in the body's own frame.
    fn local_velocity(&self) -> Vec3 {
        self.rotation().inverse() * self.velocity()
    }
}

impl<T: RigidBody + ?Sized> RigidBody for &mut T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn rotation(&self) -> Quat {
        (**self).rotation()
    }

    fn velocity(&self) -> Vec3 {
        (**self).velocity()
    }

    fn angular_velocity(&self) -> Vec3 {
        (**self).angular_velocity()
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        (**self).add_force(force, mode);
    }

    fn add_force_at_position(&mut self, force: Vec3, point: Vec3, mode: ForceMode) {
        (**self).add_force_at_position(force, point, mode);
    }

    fn add_torque(&mut self, torque: Vec3, mode: ForceMode) {
        (**self).add_torque(torque, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Still {
        rot: Quat,
        vel: Vec3,
    }

    impl RigidBody for Still {
        fn position(&self) -> Vec3 {
            Vec3::ZERO
        }
        fn rotation(&self) -> Quat {
            self.rot
        }
        fn velocity(&self) -> Vec3 {
            self.vel
        }
        fn add_force(&mut self, _force: Vec3, _mode: ForceMode) {}
        fn add_force_at_position(&mut self, _force: Vec3, _point: Vec3, _mode: ForceMode) {}
        fn add_torque(&mut self, _torque: Vec3, _mode: ForceMode) {}
    }

    #[test]
    fn local_axes_follow_rotation() {
        let body = Still {
            rot: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            vel: Vec3::ZERO,
        };
        assert!((body.forward() - Vec3::X).length() < 1e-6);
        assert!((body.right() + Vec3::Z).length() < 1e-6);
        assert!((body.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn local_velocity_reports_backwards_motion() {
        let body = Still {
            rot: Quat::from_rotation_y(std::f32::consts::PI),
            vel: Vec3::new(0.0, 0.0, 3.0),
        };
        assert!((body.local_velocity().z + 3.0).abs() < 1e-5);
    }

    #[test]
    fn force_mode_classification() {
        assert!(ForceMode::Impulse.is_instant());
        assert!(ForceMode::VelocityChange.is_instant());
        assert!(!ForceMode::Force.is_instant());
        assert!(ForceMode::Force.is_mass_dependent());
        assert!(!ForceMode::Acceleration.is_mass_dependent());
    }
}
