#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Kart Physics Layer
//!
//! The body and contact vocabulary shared by the kart controller, the RL
//! environment and the runtime.
//!
//! ## Key Components
//!
//! -   **Body abstraction:** [`RigidBody`] is the capability set a controller
//!     needs (read pose and velocity, apply force, torque and impulses in one
//!     of four [`ForceMode`]s). Any engine can implement it.
//! -   **Contacts:** [`Tag`] labels colliders, [`ContactEvent`] carries the
//!     normals of one impact and [`ContactPhase`] the begin/stay/end lifecycle.
//! -   **Reference backend:** [`SimBody`] is a small CPU rigid body with
//!     semi-implicit Euler integration and [`GroundPlane`] a tagged ground
//!     collider that reports contact phases, enough to drive a kart headless.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use physics::{ForceMode, GroundPlane, RigidBody, SimBody, Vec3};
//!
//! let mut ground = GroundPlane::new(0.0);
//! let mut body = SimBody::sphere(Vec3::new(0.0, 2.0, 0.0), 0.5, 10.0);
//! body.add_force(Vec3::Z, ForceMode::VelocityChange);
//! body.integrate(0.02, Vec3::new(0.0, -9.81, 0.0));
//! let phase = ground.step(&mut body, 0.5);
//! ```

pub mod body;
pub mod contact;
pub mod ground;
pub mod sim_body;

pub use body::{BodyCommand, ForceMode, RigidBody};
pub use contact::{average, ContactEvent, ContactPhase, ContactPoint, Tag};
pub use glam::{Quat, Vec3};
pub use ground::{GroundContact, GroundPlane};
pub use sim_body::SimBody;

/// Standard gravity used by the defaults across the workspace.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
