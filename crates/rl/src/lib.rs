#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Kart Training Environments
//!
//! Wraps a [`kart::LocomotionController`] and a flat ground plane behind the
//! [`Env`] trait so an agent can drive it with discrete actions.
//!
//! -   [`KartAction`] decodes the three action branches into a
//!     [`kart::KartInput`].
//! -   [`KartEnv`] runs the fixed-timestep loop, holds each decision for its
//!     decision period and masks the air jump once it has been spent.

pub mod action;
pub mod env;
pub mod kart_env;

pub use action::{KartAction, Steer, Throttle, BRANCH_SIZES, JUMP_BRANCH};
pub use env::Env;
pub use kart_env::{KartEnv, KartEnvConfig, EXISTENTIAL_PENALTY};
