//! # Contacts and Tags
//!
//! Collision layers hand contact information to gameplay code as plain data.
//! A [`Tag`] names the category of the other participant, a [`ContactEvent`]
//! carries the normals and points of one impact.

use std::borrow::Cow;
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Category label attached to a collider. Matching is exact, there is no
/// hierarchy between tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const GROUND: Tag = Tag(Cow::Borrowed("ground"));
    pub const BALL: Tag = Tag(Cow::Borrowed("ball"));
    pub const WALL: Tag = Tag(Cow::Borrowed("wall"));

    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Lifecycle of a touching pair, as reported once per step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Begin,
    Stay,
    End,
}

/// One point of an impact manifold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// Contact point in world space
    pub point: Vec3,
    /// Surface normal at the contact
    pub normal: Vec3,
}

/// All contact points of one impact, plus the other participant's tag.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactEvent {
    pub other: Tag,
    pub contacts: Vec<ContactPoint>,
}

impl ContactEvent {
    pub fn new(other: impl Into<Tag>, contacts: Vec<ContactPoint>) -> Self {
        Self {
            other: other.into(),
            contacts,
        }
    }

    pub fn normals(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.contacts.iter().map(|c| c.normal)
    }

    #[must_use]
    pub fn first_point(&self) -> Option<Vec3> {
        self.contacts.first().map(|c| c.point)
    }

    /// Arithmetic mean of the contact normals, `None` for an empty manifold.
    #[must_use]
    pub fn average_normal(&self) -> Option<Vec3> {
        average(self.normals())
    }
}

/// Mean of a set of vectors. Returns `None` when the set is empty.
pub fn average(vectors: impl IntoIterator<Item = Vec3>) -> Option<Vec3> {
    let (sum, count) = vectors
        .into_iter()
        .fold((Vec3::ZERO, 0_u32), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        Some(sum / count as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_exactly() {
        assert_eq!(Tag::GROUND, Tag::new("ground"));
        assert_ne!(Tag::GROUND, Tag::new("Ground"));
        assert!(Tag::BALL == "ball");
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average(std::iter::empty()), None);
    }

    #[test]
    fn average_normal_of_manifold() {
        let event = ContactEvent::new(
            "wall",
            vec![
                ContactPoint { point: Vec3::ZERO, normal: Vec3::X },
                ContactPoint { point: Vec3::ONE, normal: Vec3::Y },
            ],
        );
        let avg = event.average_normal().unwrap();
        assert!((avg - Vec3::new(0.5, 0.5, 0.0)).length() < 1e-6);
        assert_eq!(event.first_point(), Some(Vec3::ZERO));
    }
}
