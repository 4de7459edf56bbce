//! Per-tick driving input.
//!
//! Input producers (gamepad polling, agent action decoding) build a
//! [`KartInput`] once per fixed tick. The controller clamps every axis on
//! ingestion, so producers never need to range-check.

use serde::{Deserialize, Serialize};

/// One tick worth of driving commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KartInput {
    /// Left/right steering, `[-1, 1]`.
    pub steering: f32,
    /// Forward/back stick bias used to aim the air jump, `[-1, 1]`.
    pub slope_bias: f32,
    /// Throttle, `[0, 1]`.
    pub acceleration: f32,
    /// Brake/reverse, `[0, 1]`.
    pub footbrake: f32,
    /// True only on the tick the jump button went down.
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
}

impl KartInput {
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        steering: f32,
        slope_bias: f32,
        acceleration: f32,
        footbrake: f32,
        jump: bool,
        boost: bool,
        handbrake: bool,
    ) -> Self {
        Self {
            steering,
            slope_bias,
            acceleration,
            footbrake,
            jump,
            boost,
            handbrake,
        }
    }

    /// Throttle only, no steering or buttons.
    #[must_use]
    pub const fn throttle(acceleration: f32) -> Self {
        Self::new(0.0, 0.0, acceleration, 0.0, false, false, false)
    }

    #[must_use]
    pub fn with_steering(mut self, steering: f32) -> Self {
        self.steering = steering;
        self
    }

    #[must_use]
    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// Copy with every axis forced into its valid range. NaN counts as zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            steering: clamp_axis(self.steering, -1.0, 1.0),
            slope_bias: clamp_axis(self.slope_bias, -1.0, 1.0),
            acceleration: clamp_axis(self.acceleration, 0.0, 1.0),
            footbrake: clamp_axis(self.footbrake, 0.0, 1.0),
            ..self
        }
    }

    /// `acceleration - footbrake`.
    #[must_use]
    pub fn net_throttle(&self) -> f32 {
        self.acceleration - self.footbrake
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// Turns a held button into a pressed-this-tick edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    prev_pressed: bool,
}

impl ButtonEdge {
    #[must_use]
    pub const fn new() -> Self {
        Self { prev_pressed: false }
    }

    /// Feed the raw button level for this tick; true on the rising edge only.
    pub fn update(&mut self, pressed: bool) -> bool {
        let just_pressed = pressed && !self.prev_pressed;
        self.prev_pressed = pressed;
        just_pressed
    }

    pub fn reset(&mut self) {
        self.prev_pressed = false;
    }
}
