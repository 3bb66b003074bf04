//! Itinerary legs as returned by the routing engine.

use chrono::Duration;

use super::{Coordinate, DomainError};

/// Identifier of a candidate itinerary within one engine response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(pub u32);

/// One segment of a candidate itinerary: a walk, a wait-and-ride, a drive.
///
/// # Invariants
///
/// - `travel_time`, `wait_time` and `distance_m` are non-negative
/// - `distance_m` is finite
/// - `travel_time + wait_time` fits in a `Duration`
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryLeg {
    option_id: OptionId,
    segment_index: u32,
    travel_time: Duration,
    wait_time: Duration,
    distance_m: f64,
    geometry: Vec<Coordinate>,
}

impl ItineraryLeg {
    /// Creates a leg, validating its measurements.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLeg` if a duration or the distance is
    /// negative, the distance is not finite, or the two durations cannot be
    /// added.
    pub fn new(
        option_id: OptionId,
        segment_index: u32,
        travel_time: Duration,
        wait_time: Duration,
        distance_m: f64,
        geometry: Vec<Coordinate>,
    ) -> Result<Self, DomainError> {
        if travel_time < Duration::zero() {
            return Err(DomainError::InvalidLeg("travel time must not be negative"));
        }
        if wait_time < Duration::zero() {
            return Err(DomainError::InvalidLeg("wait time must not be negative"));
        }
        if !distance_m.is_finite() || distance_m < 0.0 {
            return Err(DomainError::InvalidLeg(
                "distance must be a non-negative number",
            ));
        }
        if travel_time.checked_add(&wait_time).is_none() {
            return Err(DomainError::InvalidLeg("travel plus wait time is out of range"));
        }

        Ok(Self {
            option_id,
            segment_index,
            travel_time,
            wait_time,
            distance_m,
            geometry,
        })
    }

    pub fn option_id(&self) -> OptionId {
        self.option_id
    }

    pub fn segment_index(&self) -> u32 {
        self.segment_index
    }

    /// Time spent moving.
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Time spent waiting before the leg starts.
    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }

    /// `travel_time + wait_time`.
    pub fn elapsed(&self) -> Duration {
        self.travel_time + self.wait_time
    }

    /// Distance covered, in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Ordered points of the leg's line geometry.
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }
}
