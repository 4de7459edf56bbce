//! Discrete kart actions.
//!
//! Agents pick one option on each of three branches: throttle, steering and
//! jump. Decoding is total: unknown options fall back to "do nothing".

use kart::KartInput;

/// Options per branch: `[throttle, steering, jump]`.
pub const BRANCH_SIZES: [usize; 3] = [3, 3, 2];

/// Index of the jump branch.
pub const JUMP_BRANCH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Throttle {
    #[default]
    Coast,
    Accelerate,
    Brake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    #[default]
    Straight,
    Right,
    Left,
}

/// One decoded multi-discrete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KartAction {
    pub throttle: Throttle,
    pub steer: Steer,
    pub jump: bool,
}

impl KartAction {
    /// Decode a flat action vector. Missing branches count as option 0.
    #[must_use]
    pub fn decode(action: &[f32]) -> Self {
        let branch = |i: usize| action.get(i).map_or(0, |&v| option_index(v));
        Self {
            throttle: match branch(0) {
                1 => Throttle::Accelerate,
                2 => Throttle::Brake,
                _ => Throttle::Coast,
            },
            steer: match branch(1) {
                1 => Steer::Right,
                2 => Steer::Left,
                _ => Steer::Straight,
            },
            jump: branch(JUMP_BRANCH) == 1,
        }
    }

    /// Flat action vector for this action.
    #[must_use]
    pub fn encode(self) -> [f32; 3] {
        let throttle = match self.throttle {
            Throttle::Coast => 0.0,
            Throttle::Accelerate => 1.0,
            Throttle::Brake => 2.0,
        };
        let steer = match self.steer {
            Steer::Straight => 0.0,
            Steer::Right => 1.0,
            Steer::Left => 2.0,
        };
        [throttle, steer, if self.jump { 1.0 } else { 0.0 }]
    }

    /// Controller input for the first tick of this decision.
    #[must_use]
    pub fn to_input(self) -> KartInput {
        let (acceleration, footbrake) = match self.throttle {
            Throttle::Coast => (0.0, 0.0),
            Throttle::Accelerate => (1.0, 0.0),
            Throttle::Brake => (0.0, 1.0),
        };
        let steering = match self.steer {
            Steer::Straight => 0.0,
            Steer::Right => 1.0,
            Steer::Left => -1.0,
        };
        KartInput::new(steering, 0.0, acceleration, footbrake, self.jump, false, false)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn option_index(value: f32) -> usize {
    if value.is_finite() && value >= 0.0 {
        value as usize
    } else {
        0
    }
}
