//! Kart tuning profile.
//!
//! The values a kart applies in its driving. A profile is loaded once and
//! stays immutable for the lifetime of the kart it is attached to.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Driving stats of one kart.
///
/// The controller trusts these values as given; loaders call
/// [`KartTuningProfile::validate`] before handing a profile over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KartTuningProfile {
    /// Velocity change per second of full throttle along the kart's forward axis.
    pub forward_speed: f32,

    /// Lateral velocity change per second of full steering while grounded.
    pub turn_speed: f32,

    /// Yaw rate change per second of full steering while airborne.
    pub airborne_turn_speed: f32,

    /// Impulse magnitude of both jump stages.
    pub jump_force: f32,

    /// Planar speed cap (m/s). Also limits boosting.
    pub max_speed: Option<f32>,

    /// Continuous forward force while boost is held.
    pub boost_force: Option<f32>,

    /// Fraction of lateral velocity removed per second while grounded.
    pub sideways_friction: Option<f32>,
}

impl Default for KartTuningProfile {
    fn default() -> Self {
        Self {
            forward_speed: 12.5,
            turn_speed: 10.0,
            airborne_turn_speed: 10.0,
            jump_force: 200.0,
            max_speed: None,
            boost_force: None,
            sideways_friction: None,
        }
    }
}

impl KartTuningProfile {
    /// Soccer kart values with every optional stage on.
    #[must_use]
    pub fn arcade() -> Self {
        Self {
            max_speed: Some(6.0),
            boost_force: Some(750.0),
            sideways_friction: Some(10.0),
            ..Default::default()
        }
    }

    /// Check every stat is finite and the required ones are positive.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`TuningError`].
    pub fn validate(&self) -> Result<(), TuningError> {
        let required = [
            ("forward_speed", self.forward_speed),
            ("turn_speed", self.turn_speed),
            ("airborne_turn_speed", self.airborne_turn_speed),
            ("jump_force", self.jump_force),
        ];
        let optional = [
            ("max_speed", self.max_speed),
            ("boost_force", self.boost_force),
            ("sideways_friction", self.sideways_friction),
        ];

        for (field, value) in required
            .into_iter()
            .chain(optional.into_iter().filter_map(|(f, v)| v.map(|v| (f, v))))
        {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
