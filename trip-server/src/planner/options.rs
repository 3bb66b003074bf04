//! Candidate itineraries and their metrics.
//!
//! The engine returns a flat table of legs. Legs sharing an option id form
//! one candidate itinerary. For transit, the first and last legs are taken
//! to be walks and everything between them transit rides.

use std::collections::BTreeMap;

use chrono::Duration;
use tracing::warn;

use crate::domain::{Coordinate, DomainError, ItineraryLeg, OptionId};

/// Number of legs in a transit option that are not rides after the first
/// boarding: the walk in, the first ride and the walk out.
const NON_TRANSFER_LEGS: i64 = 3;

/// One candidate itinerary: its legs in segment order.
///
/// # Invariants
///
/// - At least one leg
/// - Legs are sorted by segment index
/// - Every duration metric fits in a `Duration`
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryOption {
    id: OptionId,
    legs: Vec<ItineraryLeg>,
    total_time: Duration,
    wait_time: Duration,
    walking_time: Duration,
    out_of_vehicle_time: Duration,
}

impl ItineraryOption {
    /// Builds an option from its legs, sorting them by segment index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyOption` if `legs` is empty, or
    /// `DomainError::DurationOverflow` if a summed duration leaves chrono's
    /// range.
    pub fn new(id: OptionId, mut legs: Vec<ItineraryLeg>) -> Result<Self, DomainError> {
        legs.sort_by_key(|leg| leg.segment_index());
        let (Some(first), Some(last)) = (legs.first(), legs.last()) else {
            return Err(DomainError::EmptyOption);
        };

        let walking_time = first
            .travel_time()
            .checked_add(&last.travel_time())
            .ok_or(DomainError::DurationOverflow("walking time"))?;
        let total_time = checked_sum(legs.iter().map(ItineraryLeg::elapsed))
            .ok_or(DomainError::DurationOverflow("total time"))?;
        let wait_time = checked_sum(legs.iter().map(ItineraryLeg::wait_time))
            .ok_or(DomainError::DurationOverflow("wait time"))?;
        let out_of_vehicle_time = walking_time
            .checked_add(&wait_time)
            .ok_or(DomainError::DurationOverflow("out-of-vehicle time"))?;

        Ok(Self {
            id,
            legs,
            total_time,
            wait_time,
            walking_time,
            out_of_vehicle_time,
        })
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// The walk to the first stop.
    pub fn first_leg(&self) -> &ItineraryLeg {
        // Invariant: at least one leg
        &self.legs[0]
    }

    /// The walk from the last stop.
    pub fn last_leg(&self) -> &ItineraryLeg {
        &self.legs[self.legs.len() - 1]
    }

    /// Legs between the first and last; the transit rides.
    pub fn interior_legs(&self) -> &[ItineraryLeg] {
        if self.legs.len() <= 2 {
            &[]
        } else {
            &self.legs[1..self.legs.len() - 1]
        }
    }

    /// Sum of travel and wait time over all legs.
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Sum of wait time over all legs.
    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }

    /// Transfers between transit vehicles, as `leg count - 3`.
    ///
    /// Assumes exactly one walk at each end. Options that do not start and
    /// end with a walk are miscounted, and one- or two-leg options come out
    /// negative.
    pub fn num_transfers(&self) -> i64 {
        self.legs.len() as i64 - NON_TRANSFER_LEGS
    }

    /// Travel time of the first and last legs.
    ///
    /// For a single-leg option that leg is counted twice.
    pub fn walking_time(&self) -> Duration {
        self.walking_time
    }

    /// Distance of the first and last legs, in meters.
    pub fn walking_distance_m(&self) -> f64 {
        self.first_leg().distance_m() + self.last_leg().distance_m()
    }

    /// Distance over all legs, in meters.
    pub fn distance_m(&self) -> f64 {
        self.legs.iter().map(ItineraryLeg::distance_m).sum()
    }

    /// Walking plus waiting.
    pub fn out_of_vehicle_time(&self) -> Duration {
        self.out_of_vehicle_time
    }

    /// Coordinates of every interior leg, concatenated in leg order.
    pub fn interior_geometry(&self) -> Vec<Coordinate> {
        self.interior_legs()
            .iter()
            .flat_map(|leg| leg.geometry().iter().copied())
            .collect()
    }
}

fn checked_sum(durations: impl Iterator<Item = Duration>) -> Option<Duration> {
    durations.fold(Some(Duration::zero()), |acc, d| acc?.checked_add(&d))
}

/// Group a leg table into options ordered by ascending option id.
///
/// Options whose durations cannot be summed are dropped with a warning.
pub fn group_options(legs: Vec<ItineraryLeg>) -> Vec<ItineraryOption> {
    let mut by_id: BTreeMap<OptionId, Vec<ItineraryLeg>> = BTreeMap::new();
    for leg in legs {
        by_id.entry(leg.option_id()).or_default().push(leg);
    }

    by_id
        .into_iter()
        .filter_map(|(id, legs)| match ItineraryOption::new(id, legs) {
            Ok(option) => Some(option),
            Err(e) => {
                warn!(option = id.0, error = %e, "dropping unusable option");
                None
            }
        })
        .collect()
}
