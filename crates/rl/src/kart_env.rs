//! Single-kart training environment.
//!
//! One kart drives on a flat field. Each decision picks a [`KartAction`];
//! the decoded input is held for the decision period (the jump only fires on
//! the first tick, it is an edge). The reward is a small existential penalty
//! so episodes that end sooner score higher once an outer task adds its own
//! terms.

use kart::{ControllerSettings, KartInput, KartTuningProfile, LocomotionController};
use physics::{ContactPhase, GroundPlane, Quat, SimBody, Vec3};
use tracing::debug;

use crate::action::{KartAction, BRANCH_SIZES, JUMP_BRANCH};
use crate::env::Env;

/// Reward added on every decision.
pub const EXISTENTIAL_PENALTY: f32 = -1.0 / 3000.0;

/// Ticks between decisions while airborne when decisions are adaptive.
pub const AIRBORNE_DECISION_PERIOD: u32 = 1;

/// Ticks between decisions while grounded, and the fixed default.
pub const GROUNDED_DECISION_PERIOD: u32 = 5;

const OBS_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct KartEnvConfig {
    pub tuning: KartTuningProfile,
    pub settings: ControllerSettings,
    pub kart_radius: f32,
    pub kart_mass: f32,
    pub spawn: Vec3,
    /// Decisions per episode.
    pub max_steps: u32,
    /// Decide every tick in the air and every few ticks on the ground.
    pub adaptive_decisions: bool,
    pub seed: u64,
}

impl Default for KartEnvConfig {
    fn default() -> Self {
        Self {
            tuning: KartTuningProfile::default(),
            settings: ControllerSettings::default(),
            kart_radius: 0.5,
            kart_mass: 10.0,
            spawn: Vec3::new(0.0, 0.5, 0.0),
            max_steps: 3000,
            adaptive_decisions: false,
            seed: 0,
        }
    }
}

pub struct KartEnv {
    kart: LocomotionController<SimBody>,
    ground: GroundPlane,
    config: KartEnvConfig,
    rng: fastrand::Rng,
    steps: u32,
}

impl KartEnv {
    #[must_use]
    pub fn new(config: KartEnvConfig) -> Self {
        let body = SimBody::sphere(config.spawn, config.kart_radius, config.kart_mass);
        let kart = LocomotionController::new(body, config.tuning.clone(), config.settings.clone());
        let ground = GroundPlane::new(0.0).with_tag(config.settings.ground_tag.clone());
        let rng = fastrand::Rng::with_seed(config.seed);
        let mut env = Self {
            kart,
            ground,
            config,
            rng,
            steps: 0,
        };
        env.reset();
        env
    }

    #[must_use]
    pub fn kart(&self) -> &LocomotionController<SimBody> {
        &self.kart
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Ticks the next decision will span.
    #[must_use]
    pub fn decision_period(&self) -> u32 {
        if self.config.adaptive_decisions && !self.kart.is_grounded() {
            AIRBORNE_DECISION_PERIOD
        } else {
            GROUNDED_DECISION_PERIOD
        }
    }

    /// `[grounded, has_second_jump, local_forward_speed, height, airborne_time]`
    #[must_use]
    pub fn observe(&self) -> Vec<f32> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        vec![
            flag(self.kart.is_grounded()),
            flag(self.kart.has_second_jump()),
            self.kart.local_forward_speed(),
            self.kart.body().pos.y,
            self.kart.airborne_time(),
        ]
    }

    fn tick(&mut self, input: KartInput) {
        let tag = self.ground.tag.clone();
        let dt = self.config.settings.tick_duration;
        match self.ground.step(self.kart.body_mut(), self.config.kart_radius) {
            Some(ContactPhase::Begin) => self.kart.notify_ground_contact_begin(&tag),
            Some(ContactPhase::Stay) => self.kart.notify_ground_contact_stay(&tag),
            Some(ContactPhase::End) => self.kart.notify_ground_contact_end(&tag),
            None => {}
        }
        self.kart.step(input);
        let gravity = self.config.settings.gravity;
        self.kart.body_mut().integrate(dt, gravity);
    }
}

impl Env for KartEnv {
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool) {
        let first = KartAction::decode(action).to_input();
        let held = KartInput { jump: false, ..first };

        for tick in 0..self.decision_period() {
            self.tick(if tick == 0 { first } else { held });
        }

        self.steps += 1;
        let done = self.steps >= self.config.max_steps;
        (self.observe(), EXISTENTIAL_PENALTY, done)
    }

    fn reset(&mut self) -> Vec<f32> {
        let heading = self.rng.f32() * std::f32::consts::TAU;
        self.kart
            .body_mut()
            .place(self.config.spawn, Quat::from_rotation_y(heading));
        self.kart.reset();
        self.ground.reset();
        self.steps = 0;
        debug!(heading, "kart env reset");
        self.observe()
    }

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        BRANCH_SIZES.len()
    }

    fn action_mask(&self) -> Vec<Vec<bool>> {
        let mut mask: Vec<Vec<bool>> = BRANCH_SIZES.iter().map(|&n| vec![true; n]).collect();
        if !self.kart.has_second_jump() {
            mask[JUMP_BRANCH][1] = false;
        }
        mask
    }
}
