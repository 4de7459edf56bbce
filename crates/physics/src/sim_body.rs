//! # Reference Rigid Body
//!
//! A small CPU rigid body that implements [`RigidBody`] and integrates itself
//! with semi-implicit Euler. It is the backend used by the runtime, the RL
//! environment and the tests; real games plug their engine in instead.

use glam::{Quat, Vec3};

use crate::body::{BodyCommand, ForceMode, RigidBody};

/// Slight damping to keep long runs stable
const DAMPING_FACTOR: f32 = 0.999;

#[derive(Clone, Debug)]
pub struct SimBody {
    pub pos: Vec3,
    pub rot: Quat,
    pub vel: Vec3,
    pub angular_vel: Vec3,
    pub mass: f32,
    /// Scalar moment of inertia (uniform about every axis).
    pub inertia: f32,
    /// Continuous linear acceleration gathered since the last integration.
    accumulated_accel: Vec3,
    /// Continuous angular acceleration gathered since the last integration.
    accumulated_angular_accel: Vec3,
    commands: Vec<BodyCommand>,
}

impl SimBody {
    #[must_use]
    pub fn new(pos: Vec3, mass: f32, inertia: f32) -> Self {
        Self {
            pos,
            rot: Quat::IDENTITY,
            vel: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            mass,
            inertia,
            accumulated_accel: Vec3::ZERO,
            accumulated_angular_accel: Vec3::ZERO,
            commands: Vec::new(),
        }
    }

    /// A solid sphere of the given radius and mass.
    #[must_use]
    pub fn sphere(pos: Vec3, radius: f32, mass: f32) -> Self {
        Self::new(pos, mass, 0.4 * mass * radius * radius)
    }

    #[must_use]
    pub fn with_rotation(mut self, rot: Quat) -> Self {
        self.rot = rot.normalize();
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, vel: Vec3) -> Self {
        self.vel = vel;
        self
    }

    /// Commands received since the last call to [`SimBody::integrate`].
    #[must_use]
    pub fn commands(&self) -> &[BodyCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Teleport the body and kill all motion.
    pub fn place(&mut self, pos: Vec3, rot: Quat) {
        self.pos = pos;
        self.rot = rot.normalize();
        self.vel = Vec3::ZERO;
        self.angular_vel = Vec3::ZERO;
        self.accumulated_accel = Vec3::ZERO;
        self.accumulated_angular_accel = Vec3::ZERO;
    }

    /// Advance the body by `dt` under `gravity`, consuming continuous forces.
    pub fn integrate(&mut self, dt: f32, gravity: Vec3) {
        self.vel += (gravity + self.accumulated_accel) * dt;
        self.angular_vel += self.accumulated_angular_accel * dt;

        self.pos += self.vel * dt;

        let spin = self.angular_vel * dt;
        let angle = spin.length();
        if angle > f32::EPSILON {
            let delta = Quat::from_axis_angle(spin / angle, angle);
            self.rot = (delta * self.rot).normalize();
        }

        self.vel *= DAMPING_FACTOR;
        self.angular_vel *= DAMPING_FACTOR;

        self.accumulated_accel = Vec3::ZERO;
        self.accumulated_angular_accel = Vec3::ZERO;
        self.commands.clear();
    }

    fn apply_linear(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.accumulated_accel += force / self.mass,
            ForceMode::Acceleration => self.accumulated_accel += force,
            ForceMode::Impulse => self.vel += force / self.mass,
            ForceMode::VelocityChange => self.vel += force,
        }
    }

    fn apply_angular(&mut self, torque: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.accumulated_angular_accel += torque / self.inertia,
            ForceMode::Acceleration => self.accumulated_angular_accel += torque,
            ForceMode::Impulse => self.angular_vel += torque / self.inertia,
            ForceMode::VelocityChange => self.angular_vel += torque,
        }
    }
}

impl RigidBody for SimBody {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn rotation(&self) -> Quat {
        self.rot
    }

    fn velocity(&self) -> Vec3 {
        self.vel
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_vel
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        self.commands.push(BodyCommand::Force { force, mode });
        self.apply_linear(force, mode);
    }

    fn add_force_at_position(&mut self, force: Vec3, point: Vec3, mode: ForceMode) {
        self.commands.push(BodyCommand::ForceAtPosition { force, point, mode });
        self.apply_linear(force, mode);
        let arm = point - self.pos;
        self.apply_angular(arm.cross(force), mode);
    }

    fn add_torque(&mut self, torque: Vec3, mode: ForceMode) {
        self.commands.push(BodyCommand::Torque { torque, mode });
        self.apply_angular(torque, mode);
    }
}
