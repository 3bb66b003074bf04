//! Ride-hail delay model.
//!
//! A shared ride is planned as a car trip. On top of the driving time the
//! rider waits for a pickup and the driver takes a detour; both are drawn at
//! random and clamped to a plausible range.

use chrono::Duration;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use crate::domain::minutes_f64;

use super::config::{ConfigError, PlannerConfig};

/// Delays sampled for one shared ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideHailDelays {
    /// Waiting for the pickup.
    pub wait: Duration,
    /// Extra driving for pickups and drop-offs.
    pub detour: Duration,
}

impl RideHailDelays {
    /// `wait + detour`.
    pub fn total(&self) -> Duration {
        self.wait + self.detour
    }
}

/// Samples ride-hail delays.
#[derive(Debug, Clone)]
pub struct RideHailModel {
    wait: Normal<f64>,
    wait_bounds: (f64, f64),
    detour: Exp<f64>,
    detour_bounds: (f64, f64),
}

impl RideHailModel {
    /// Build the model from planner configuration.
    pub fn new(config: &PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let wait = Normal::new(config.ride_wait_mean_mins, config.ride_wait_std_dev_mins)
            .map_err(|_| ConfigError::InvalidParameter {
                name: "ride wait standard deviation",
                value: config.ride_wait_std_dev_mins,
            })?;
        let detour = Exp::new(1.0 / config.ride_detour_mean_mins).map_err(|_| {
            ConfigError::InvalidParameter {
                name: "ride detour mean",
                value: config.ride_detour_mean_mins,
            }
        })?;

        Ok(Self {
            wait,
            wait_bounds: (config.ride_wait_min_mins, config.ride_wait_max_mins),
            detour,
            detour_bounds: (config.ride_detour_min_mins, config.ride_detour_max_mins),
        })
    }

    /// Draw one pair of delays.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RideHailDelays {
        let wait = self
            .wait
            .sample(rng)
            .clamp(self.wait_bounds.0, self.wait_bounds.1);
        let detour = self
            .detour
            .sample(rng)
            .clamp(self.detour_bounds.0, self.detour_bounds.1);

        // Bounds are validated to at most a day, so both always convert.
        RideHailDelays {
            wait: minutes_f64(wait).unwrap_or_default(),
            detour: minutes_f64(detour).unwrap_or_default(),
        }
    }
}
