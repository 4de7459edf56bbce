//! Sphere-vs-ground-plane contact detection, response and phase tracking

use glam::Vec3;

use crate::contact::{ContactEvent, ContactPhase, ContactPoint, Tag};
use crate::sim_body::SimBody;

/// Contact between a body sphere and the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Contact point in world space
    pub point: Vec3,
    /// Plane normal (always +Y)
    pub normal: Vec3,
    /// Penetration depth
    pub depth: f32,
}

/// Infinite horizontal plane at `height`, tagged for gameplay filtering.
#[derive(Debug, Clone)]
pub struct GroundPlane {
    pub height: f32,
    pub tag: Tag,
    pub restitution: f32,
    pub friction: f32,
    /// Extra distance at which a resting body still counts as touching.
    pub contact_offset: f32,
    touching: bool,
}

impl GroundPlane {
    #[must_use]
    pub fn new(height: f32) -> Self {
        Self {
            height,
            tag: Tag::GROUND,
            restitution: 0.0,
            friction: 0.2,
            contact_offset: 0.01,
            touching: false,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Detect a sphere of `radius` centred at `center` touching the plane.
    #[must_use]
    pub fn detect(&self, center: Vec3, radius: f32) -> Option<GroundContact> {
        let distance = center.y - self.height;
        if distance < radius + self.contact_offset {
            Some(GroundContact {
                point: Vec3::new(center.x, self.height, center.z),
                normal: Vec3::Y,
                depth: radius - distance,
            })
        } else {
            None
        }
    }

    /// Push the body out of the plane and cancel approaching velocity.
    pub fn resolve(&self, body: &mut SimBody, contact: &GroundContact) {
        let velocity_along_normal = body.vel.dot(contact.normal);

        if velocity_along_normal < 0.0 {
            let j = -(1.0 + self.restitution) * velocity_along_normal;
            body.vel += contact.normal * j;
            apply_friction(body, contact, self.friction, j);
        }

        if contact.depth > 0.0 {
            body.pos += contact.normal * contact.depth;
        }
    }

    /// Run detection and response for one body and report how the touching
    /// state changed this step.
    pub fn step(&mut self, body: &mut SimBody, radius: f32) -> Option<ContactPhase> {
        let contact = self.detect(body.pos, radius);
        if let Some(contact) = &contact {
            self.resolve(body, contact);
        }
        self.update(contact.is_some())
    }

    /// Fold a raw touching flag into a begin/stay/end phase.
    pub fn update(&mut self, touching: bool) -> Option<ContactPhase> {
        let phase = match (self.touching, touching) {
            (false, true) => Some(ContactPhase::Begin),
            (true, true) => Some(ContactPhase::Stay),
            (true, false) => Some(ContactPhase::End),
            (false, false) => None,
        };
        self.touching = touching;
        phase
    }

    /// Contact manifold for an impact at `contact`.
    #[must_use]
    pub fn event(&self, contact: &GroundContact) -> ContactEvent {
        ContactEvent {
            other: self.tag.clone(),
            contacts: vec![ContactPoint {
                point: contact.point,
                normal: contact.normal,
            }],
        }
    }

    /// Forget the touching state, e.g. after teleporting the body.
    pub fn reset(&mut self) {
        self.touching = false;
    }
}

/// Apply friction impulse to body tangential velocity
fn apply_friction(body: &mut SimBody, contact: &GroundContact, friction: f32, normal_impulse: f32) {
    let normal_velocity = contact.normal * body.vel.dot(contact.normal);
    let tangent_velocity = body.vel - normal_velocity;

    let tangent_speed = tangent_velocity.length();
    if tangent_speed > 0.0001 {
        let tangent_direction = tangent_velocity / tangent_speed;
        let magnitude = (friction * normal_impulse.abs()).min(tangent_speed);
        body.vel -= tangent_direction * magnitude;
    }
}
