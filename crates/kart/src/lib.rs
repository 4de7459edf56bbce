#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Kart Locomotion
//!
//! Fixed-timestep driving logic for physics karts.
//!
//! -   [`LocomotionController`] owns one kart body. Each tick it turns a
//!     clamped [`KartInput`] into drive, steering and jump commands, and the
//!     collision layer tells it when ground contact begins and ends.
//! -   [`ContactResponder`] turns an impact's contact normals into a single
//!     bounce impulse on the other participant.
//! -   [`BallKick`] lets an airborne kart shove the ball it flies into.
//!
//! Driving stats live in [`KartTuningProfile`]; timing, geometry, tags and
//! the optional behaviour stages live in [`ControllerSettings`].
//!
//! ```rust,ignore
//! use kart::{KartInput, KartTuningProfile, LocomotionController};
//! use physics::{SimBody, Tag, Vec3};
//!
//! let body = SimBody::sphere(Vec3::new(0.0, 0.5, 0.0), 0.5, 10.0);
//! let mut kart = LocomotionController::with_tuning(body, KartTuningProfile::default());
//! kart.notify_ground_contact_begin(&Tag::GROUND);
//! kart.step(KartInput::throttle(1.0).with_jump(true));
//! ```

pub mod bounce;
pub mod controller;
pub mod error;
pub mod input;
pub mod kick;
pub mod settings;
pub mod tuning;

pub use bounce::{Bounce, ContactResponder};
pub use controller::{JumpAction, LocomotionController, LocomotionState};
pub use error::TuningError;
pub use input::{ButtonEdge, KartInput};
pub use kick::BallKick;
pub use settings::{ControllerSettings, PostProcessing, SecondJumpDirection};
pub use tuning::KartTuningProfile;
