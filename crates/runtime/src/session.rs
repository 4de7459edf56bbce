//! One kart on a ground plane, ticked the way a host engine would: contacts
//! first, then the controller, then physics.

use kart::{ButtonEdge, ControllerSettings, KartInput, KartTuningProfile, LocomotionController};
use physics::{ContactPhase, GroundPlane, SimBody, Vec3};
use tracing::info;

const KART_RADIUS: f32 = 0.5;
const KART_MASS: f32 = 10.0;

/// Snapshot reported by the drive loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub tick: u64,
    pub position: Vec3,
    pub forward_speed: f32,
    pub grounded: bool,
    pub second_jump: bool,
    pub landings: u64,
}

pub struct DriveSession {
    kart: LocomotionController<SimBody>,
    ground: GroundPlane,
    jump: ButtonEdge,
    tick: u64,
}

impl DriveSession {
    #[must_use]
    pub fn new(tuning: KartTuningProfile, settings: ControllerSettings) -> Self {
        let ground = GroundPlane::new(0.0).with_tag(settings.ground_tag.clone());
        let body = SimBody::sphere(Vec3::new(0.0, KART_RADIUS, 0.0), KART_RADIUS, KART_MASS);
        Self {
            kart: LocomotionController::new(body, tuning, settings),
            ground,
            jump: ButtonEdge::new(),
            tick: 0,
        }
    }

    #[must_use]
    pub fn kart(&self) -> &LocomotionController<SimBody> {
        &self.kart
    }

    /// Advance one fixed tick. `input.jump` is the held button level; only
    /// its rising edge reaches the controller.
    pub fn tick(&mut self, input: KartInput) {
        let input = input.with_jump(self.jump.update(input.jump));

        let tag = self.ground.tag.clone();
        match self.ground.step(self.kart.body_mut(), KART_RADIUS) {
            Some(ContactPhase::Begin) => self.kart.notify_ground_contact_begin(&tag),
            Some(ContactPhase::Stay) => self.kart.notify_ground_contact_stay(&tag),
            Some(ContactPhase::End) => self.kart.notify_ground_contact_end(&tag),
            None => {}
        }

        self.kart.step(input);
        let settings = self.kart.settings();
        let (dt, gravity) = (settings.tick_duration, settings.gravity);
        self.kart.body_mut().integrate(dt, gravity);
        self.tick += 1;
    }

    /// Swap in a new tuning. Profiles are fixed for a controller's lifetime,
    /// so the kart is respawned in place with the current body and state.
    pub fn retune(&mut self, tuning: KartTuningProfile) {
        self.kart = LocomotionController::with_state(
            self.kart.body().clone(),
            tuning,
            self.kart.settings().clone(),
            self.kart.state().clone(),
        );
        info!(tick = self.tick, tuning = ?self.kart.tuning(), "kart retuned");
    }

    #[must_use]
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            tick: self.tick,
            position: self.kart.body().pos,
            forward_speed: self.kart.local_forward_speed(),
            grounded: self.kart.is_grounded(),
            second_jump: self.kart.has_second_jump(),
            landings: self.kart.landings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_jump_fires_once() {
        let mut session =
            DriveSession::new(KartTuningProfile::default(), ControllerSettings::default());
        session.tick(KartInput::default());
        let pressed = KartInput::default().with_jump(true);

        session.tick(pressed);
        assert!(matches!(session.kart().last_jump(), kart::JumpAction::Ground(_)));
        for _ in 0..5 {
            session.tick(pressed);
        }
        assert!(!session.kart().is_grounded());
        assert!(session.kart().has_second_jump(), "held button must not air jump");
    }
}
