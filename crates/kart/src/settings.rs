//! Controller settings that are not driving stats: timing, geometry, tags and
//! the behaviour toggles that pick between the historical controller variants.

use physics::{Tag, Vec3, GRAVITY};
use serde::{Deserialize, Serialize};

/// Fraction of the capsule half height at which grounded steering pushes.
pub const STEER_POINT_FACTOR: f32 = 0.45;

/// Vertical component of an input-aimed air jump.
pub const AIR_JUMP_LIFT: f32 = 0.25;

/// Speeds below this count as standing still for airborne sign correction.
pub const AIRBORNE_SIGN_DEADZONE: f32 = 0.01;

/// Direction of the mid-air jump impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondJumpDirection {
    /// Along the kart's forward axis.
    #[default]
    Forward,
    /// Aimed by the steering and slope-bias axes.
    InputBiased,
}

/// Optional stages run after the jump stage. All off by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcessing {
    /// Multiplier on gravity pulled along the kart's up axis while airborne.
    pub airborne_gravity_scale: Option<f32>,
    /// Height above which upward velocity is cancelled.
    pub height_cap: Option<f32>,
}

/// Everything the controller needs besides tuning stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Fixed tick length in seconds.
    pub tick_duration: f32,
    /// Colliders with this tag count as ground.
    pub ground_tag: Tag,
    /// Half height of the kart's capsule collider.
    pub capsule_half_height: f32,
    pub gravity: Vec3,
    pub second_jump: SecondJumpDirection,
    /// Flip airborne yaw input when rolling backwards.
    pub airborne_steer_sign_correction: bool,
    pub post: PostProcessing,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            tick_duration: 0.02,
            ground_tag: Tag::GROUND,
            capsule_half_height: 0.5,
            gravity: GRAVITY,
            second_jump: SecondJumpDirection::Forward,
            airborne_steer_sign_correction: false,
            post: PostProcessing::default(),
        }
    }
}

impl ControllerSettings {
    #[must_use]
    pub fn with_tick_duration(mut self, tick_duration: f32) -> Self {
        self.tick_duration = tick_duration;
        self
    }

    #[must_use]
    pub fn with_ground_tag(mut self, tag: Tag) -> Self {
        self.ground_tag = tag;
        self
    }

    /// Forward offset of the grounded steering force from the body center.
    #[must_use]
    pub fn steer_point_offset(&self) -> f32 {
        STEER_POINT_FACTOR * self.capsule_half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: ControllerSettings =
            serde_json::from_str(r#"{ "ground_tag": "field", "second_jump": "input_biased" }"#)
                .unwrap();
        assert_eq!(settings.ground_tag, Tag::from_static("field"));
        assert_eq!(settings.second_jump, SecondJumpDirection::InputBiased);
        assert!((settings.tick_duration - 0.02).abs() < f32::EPSILON);
        assert_eq!(settings.post, PostProcessing::default());
    }

    #[test]
    fn steer_point_uses_half_height() {
        let settings = ControllerSettings {
            capsule_half_height: 1.0,
            ..Default::default()
        };
        assert!((settings.steer_point_offset() - 0.45).abs() < 1e-6);
    }
}
