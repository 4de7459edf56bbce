//! Bounce response for bumpers and walls.
//!
//! When something hits a bouncing surface, the averaged contact normal is
//! flipped and used to kick the other body away with a single velocity
//! change.

use physics::{average, ContactEvent, ForceMode, RigidBody, Tag, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounce {
    /// The other participant carries the exempt tag.
    Exempt,
    /// The impact had no contact points.
    NoContacts,
    /// The other participant has no rigid body to push.
    NoBody,
    /// A velocity change of this vector was applied.
    Applied(Vec3),
}

/// Stateless bounce handler attached to a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactResponder {
    pub bounce_force: f32,
    /// Participants with this tag never bounce.
    pub exempt_tag: Tag,
}

impl Default for ContactResponder {
    fn default() -> Self {
        Self {
            bounce_force: 5.0,
            exempt_tag: Tag::BALL,
        }
    }
}

impl ContactResponder {
    #[must_use]
    pub fn new(bounce_force: f32, exempt_tag: Tag) -> Self {
        Self {
            bounce_force,
            exempt_tag,
        }
    }

    /// Push `other_body` away from the surface along the negated mean of
    /// `normals`. Exempt tags, empty manifolds and missing bodies are no-ops.
    pub fn on_impact<I>(
        &self,
        normals: I,
        other_tag: &Tag,
        other_body: Option<&mut dyn RigidBody>,
    ) -> Bounce
    where
        I: IntoIterator<Item = Vec3>,
    {
        if *other_tag == self.exempt_tag {
            return Bounce::Exempt;
        }
        let Some(mean) = average(normals) else {
            return Bounce::NoContacts;
        };
        let Some(body) = other_body else {
            return Bounce::NoBody;
        };

        let impulse = -mean * self.bounce_force;
        body.add_force(impulse, ForceMode::VelocityChange);
        debug!(tag = %other_tag, ?impulse, "bounce");
        Bounce::Applied(impulse)
    }

    /// [`ContactResponder::on_impact`] for a whole contact event.
    pub fn on_event(&self, event: &ContactEvent, other_body: Option<&mut dyn RigidBody>) -> Bounce {
        self.on_impact(event.normals(), &event.other, other_body)
    }
}
