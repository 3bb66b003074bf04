//! Planner configuration.

/// Error returned when the planner configuration cannot build its models.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A distribution parameter is out of its valid domain
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A clamp range has min above max or allows more than a day
    #[error("invalid {name} bounds: [{min}, {max}]")]
    InvalidBounds {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

/// Longest delay a ride-hail clamp range may allow.
pub const MAX_RIDE_DELAY_MINS: f64 = 24.0 * 60.0;

/// Configuration parameters for trip planning.
///
/// Only shared rides have tunables: the delays a ride-hail trip adds on top
/// of driving. All values are in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Mean of the normally distributed pickup wait.
    pub ride_wait_mean_mins: f64,

    /// Standard deviation of the pickup wait.
    pub ride_wait_std_dev_mins: f64,

    /// Shortest pickup wait after clamping.
    pub ride_wait_min_mins: f64,

    /// Longest pickup wait after clamping.
    pub ride_wait_max_mins: f64,

    /// Mean of the exponentially distributed detour time.
    pub ride_detour_mean_mins: f64,

    /// Shortest detour after clamping.
    pub ride_detour_min_mins: f64,

    /// Longest detour after clamping.
    pub ride_detour_max_mins: f64,
}

impl PlannerConfig {
    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_positive = |name, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidParameter { name, value })
            }
        };
        let bounds = |name, min: f64, max: f64| {
            if min.is_finite() && max.is_finite() && min >= 0.0 && min <= max && max <= MAX_RIDE_DELAY_MINS {
                Ok(())
            } else {
                Err(ConfigError::InvalidBounds { name, min, max })
            }
        };

        if !self.ride_wait_mean_mins.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "ride wait mean",
                value: self.ride_wait_mean_mins,
            });
        }
        finite_positive("ride wait standard deviation", self.ride_wait_std_dev_mins)?;
        finite_positive("ride detour mean", self.ride_detour_mean_mins)?;
        bounds(
            "ride wait",
            self.ride_wait_min_mins,
            self.ride_wait_max_mins,
        )?;
        bounds(
            "ride detour",
            self.ride_detour_min_mins,
            self.ride_detour_max_mins,
        )?;
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ride_wait_mean_mins: 8.0,
            ride_wait_std_dev_mins: 3.0,
            ride_wait_min_mins: 1.0,
            ride_wait_max_mins: 15.0,
            ride_detour_mean_mins: 2.0,
            ride_detour_min_mins: 1.0,
            ride_detour_max_mins: 8.0,
        }
    }
}
