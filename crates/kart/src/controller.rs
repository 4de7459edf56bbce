//! # Locomotion Controller
//!
//! The per-tick state machine that turns a [`KartInput`] into force, torque
//! and impulse commands against the kart's [`RigidBody`].
//!
//! Each controlled tick runs these stages in order:
//!
//! 1. ingest and clamp the input, advance the airborne timer;
//! 2. drive along the forward axis (grounded or not, so thrust works in the air);
//! 3. steer: a lateral push at the front of the capsule on the ground, a yaw
//!    torque in the air;
//! 4. resolve at most one jump: an upward impulse from the ground, or the
//!    single mid-air charge;
//! 5. optional post-processing (extra air gravity, boost, speed and height
//!    caps, sideways friction).
//!
//! Ground state is never inferred from motion or jumping. It changes only
//! through the `notify_ground_contact_*` calls made by the collision layer,
//! which must be delivered before the tick's [`LocomotionController::step`].

use physics::{ForceMode, RigidBody, Tag, Vec3};
use tracing::{debug, trace};

use crate::input::KartInput;
use crate::settings::{
    ControllerSettings, SecondJumpDirection, AIRBORNE_SIGN_DEADZONE, AIR_JUMP_LIFT,
};
use crate::tuning::KartTuningProfile;

/// Mutable state owned by one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub grounded: bool,
    pub second_jump_available: bool,
    pub has_control: bool,
    /// Last ingested input, already clamped.
    pub input: KartInput,
    /// Seconds since the kart left the ground, zero while grounded.
    pub airborne_time: f32,
    /// Number of airborne to grounded transitions seen.
    pub landings: u64,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            grounded: true,
            second_jump_available: true,
            has_control: true,
            input: KartInput::default(),
            airborne_time: 0.0,
            landings: 0,
        }
    }
}

/// What the jump stage did on a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpAction {
    None,
    Ground(Vec3),
    Air(Vec3),
}

/// Drives one kart body from per-tick input and ground contact notifications.
pub struct LocomotionController<B: RigidBody> {
    body: B,
    tuning: KartTuningProfile,
    settings: ControllerSettings,
    state: LocomotionState,
    last_jump: JumpAction,
}

impl<B: RigidBody> LocomotionController<B> {
    pub fn new(body: B, tuning: KartTuningProfile, settings: ControllerSettings) -> Self {
        Self {
            body,
            tuning,
            settings,
            state: LocomotionState::default(),
            last_jump: JumpAction::None,
        }
    }

    /// Respawn a kart on `body` with a new tuning, carrying over the state of
    /// the controller it replaces. Jump charge, airborne timer and landing
    /// count are not touched.
    pub fn with_state(
        body: B,
        tuning: KartTuningProfile,
        settings: ControllerSettings,
        state: LocomotionState,
    ) -> Self {
        Self {
            body,
            tuning,
            settings,
            state,
            last_jump: JumpAction::None,
        }
    }

    /// Controller with default [`ControllerSettings`].
    pub fn with_tuning(body: B, tuning: KartTuningProfile) -> Self {
        Self::new(body, tuning, ControllerSettings::default())
    }

    /// Advance one fixed tick. Must be called exactly once per tick, after
    /// that tick's contact notifications.
    pub fn step(&mut self, input: KartInput) {
        if !self.state.has_control {
            return;
        }

        let input = input.clamped();
        self.state.input = input;
        let dt = self.settings.tick_duration;
        // Sampled before any command of this tick lands on the body.
        let local_speed = self.local_forward_speed();

        if self.state.grounded {
            self.state.airborne_time = 0.0;
        } else {
            self.state.airborne_time += dt;
        }

        self.apply_drive(&input, dt);
        self.apply_steering(&input, local_speed, dt);
        self.last_jump = self.apply_jump(&input);
        self.apply_post_processing(&input, dt);

        trace!(
            grounded = self.state.grounded,
            second_jump = self.state.second_jump_available,
            airborne_time = self.state.airborne_time,
            "kart tick"
        );
    }

    /// Restore both jump stages and clear the airborne timer, e.g. after the
    /// kart was repositioned. The body's transform and velocity are left to
    /// the caller.
    pub fn reset(&mut self) {
        self.state.grounded = true;
        self.state.second_jump_available = true;
        self.state.airborne_time = 0.0;
        self.last_jump = JumpAction::None;
    }

    pub fn notify_ground_contact_begin(&mut self, tag: &Tag) {
        if *tag != self.settings.ground_tag {
            return;
        }
        if !self.state.grounded {
            self.land();
        }
        self.state.grounded = true;
        self.state.second_jump_available = true;
    }

    /// Re-asserts contact for a ground collider still touching. Only acts if
    /// the begin event was missed.
    pub fn notify_ground_contact_stay(&mut self, tag: &Tag) {
        if *tag == self.settings.ground_tag && !self.state.grounded {
            self.notify_ground_contact_begin(tag);
        }
    }

    pub fn notify_ground_contact_end(&mut self, tag: &Tag) {
        if *tag == self.settings.ground_tag {
            self.state.grounded = false;
        }
    }

    pub fn set_control(&mut self, has_control: bool) {
        self.state.has_control = has_control;
    }

    #[must_use]
    pub fn has_control(&self) -> bool {
        self.state.has_control
    }

    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    #[must_use]
    pub fn has_second_jump(&self) -> bool {
        self.state.second_jump_available
    }

    /// Velocity along the body's own forward axis.
    #[must_use]
    pub fn local_forward_speed(&self) -> f32 {
        self.body.local_velocity().z
    }

    #[must_use]
    pub fn airborne_time(&self) -> f32 {
        self.state.airborne_time
    }

    #[must_use]
    pub fn landings(&self) -> u64 {
        self.state.landings
    }

    #[must_use]
    pub fn last_input(&self) -> KartInput {
        self.state.input
    }

    /// Jump stage outcome of the most recent controlled tick.
    #[must_use]
    pub fn last_jump(&self) -> JumpAction {
        self.last_jump
    }

    #[must_use]
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    #[must_use]
    pub fn tuning(&self) -> &KartTuningProfile {
        &self.tuning
    }

    #[must_use]
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }

    fn land(&mut self) {
        self.state.landings += 1;
        debug!(
            airborne_time = self.state.airborne_time,
            landings = self.state.landings,
            "kart landed"
        );
        self.state.airborne_time = 0.0;
    }

    fn apply_drive(&mut self, input: &KartInput, dt: f32) {
        let drive = self.body.forward() * self.tuning.forward_speed * input.net_throttle() * dt;
        self.body.add_force(drive, ForceMode::VelocityChange);
    }

    fn apply_steering(&mut self, input: &KartInput, local_speed: f32, dt: f32) {
        if self.state.grounded {
            if input.net_throttle() == 0.0 {
                return;
            }
            let rotation = self.body.rotation();
            let front_point = self.body.position()
                + rotation * Vec3::Z * self.settings.steer_point_offset();
            let lateral = self.body.right()
                * self.tuning.turn_speed
                * input.steering
                * sign(local_speed)
                * dt;
            self.body
                .add_force_at_position(lateral, front_point, ForceMode::VelocityChange);
        } else {
            let mut yaw = self.tuning.airborne_turn_speed * input.steering * dt;
            if self.settings.airborne_steer_sign_correction {
                let speed = if local_speed.abs() < AIRBORNE_SIGN_DEADZONE {
                    0.0
                } else {
                    local_speed
                };
                yaw *= sign(speed);
            }
            let torque = self.body.up() * yaw;
            self.body.add_torque(torque, ForceMode::VelocityChange);
        }
    }

    fn apply_jump(&mut self, input: &KartInput) -> JumpAction {
        if !input.jump {
            return JumpAction::None;
        }

        if self.state.grounded {
            let impulse = self.body.up() * self.tuning.jump_force;
            self.body.add_force(impulse, ForceMode::Impulse);
            debug!(?impulse, "ground jump");
            JumpAction::Ground(impulse)
        } else if self.state.second_jump_available {
            let impulse = self.air_jump_direction(input) * self.tuning.jump_force;
            self.body.add_force(impulse, ForceMode::Impulse);
            self.state.second_jump_available = false;
            debug!(?impulse, "air jump");
            JumpAction::Air(impulse)
        } else {
            JumpAction::None
        }
    }

    fn air_jump_direction(&self, input: &KartInput) -> Vec3 {
        match self.settings.second_jump {
            SecondJumpDirection::Forward => self.body.forward(),
            SecondJumpDirection::InputBiased => {
                let mut local = Vec3::new(input.steering, 0.0, input.slope_bias);
                if local.x == 0.0 && local.z == 0.0 {
                    local.y = -self.settings.gravity.y;
                } else {
                    local.y = AIR_JUMP_LIFT;
                }
                // A zero gravity world with no aim falls back to straight up.
                let local = local.try_normalize().unwrap_or(Vec3::Y);
                self.body.rotation() * local
            }
        }
    }

    fn apply_post_processing(&mut self, input: &KartInput, dt: f32) {
        if let Some(scale) = self.settings.post.airborne_gravity_scale {
            if !self.state.grounded {
                let pull = self.body.up() * self.settings.gravity.y * scale;
                self.body.add_force(pull, ForceMode::Acceleration);
            }
        }

        if let Some(boost) = self.tuning.boost_force {
            let below_cap = self
                .tuning
                .max_speed
                .map_or(true, |max| self.local_forward_speed() < max);
            if input.boost && below_cap {
                let push = self.body.forward() * boost;
                self.body.add_force(push, ForceMode::Force);
            }
        }

        if let Some(max) = self.tuning.max_speed {
            let max = max.max(0.0);
            let velocity = self.body.velocity();
            let planar = Vec3::new(velocity.x, 0.0, velocity.z);
            let speed = planar.length();
            if speed > max {
                let excess = planar - planar * (max / speed);
                self.body.add_force(-excess, ForceMode::VelocityChange);
            }
        }

        if let Some(friction) = self.tuning.sideways_friction {
            if self.state.grounded {
                let right = self.body.right();
                let lateral = right * self.body.velocity().dot(right);
                let fraction = (friction * dt).min(1.0);
                self.body.add_force(-lateral * fraction, ForceMode::VelocityChange);
            }
        }

        if let Some(cap) = self.settings.post.height_cap {
            let velocity = self.body.velocity();
            if self.body.position().y >= cap && velocity.y > 0.0 {
                self.body
                    .add_force(Vec3::new(0.0, -velocity.y, 0.0), ForceMode::VelocityChange);
            }
        }
    }
}

/// Sign with zero counted as positive.
fn sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}
