//! Airborne ball kick.
//!
//! A kart that flies into the ball while moving forward shoves it along the
//! line from the kart to the first contact point. Grounded or reversing karts
//! only push the ball through ordinary collision response.

use physics::{ContactEvent, ForceMode, RigidBody, Tag, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::LocomotionController;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallKick {
    /// Continuous force applied to the ball on a kick.
    pub kick_force: f32,
    pub ball_tag: Tag,
}

impl Default for BallKick {
    fn default() -> Self {
        Self {
            kick_force: 2000.0,
            ball_tag: Tag::BALL,
        }
    }
}

impl BallKick {
    /// Kick the ball if the kart is airborne and driving forward. Returns the
    /// applied force.
    pub fn on_kart_impact<B: RigidBody>(
        &self,
        kart: &LocomotionController<B>,
        event: &ContactEvent,
        ball: Option<&mut dyn RigidBody>,
    ) -> Option<Vec3> {
        if event.other != self.ball_tag || kart.is_grounded() || kart.local_forward_speed() <= 0.0 {
            return None;
        }

        let point = event.first_point()?;
        let direction = (point - kart.body().position()).try_normalize()?;
        let ball = ball?;

        let force = direction * self.kick_force;
        ball.add_force(force, ForceMode::Force);
        debug!(?force, "ball kick");
        Some(force)
    }
}
