//! Itinerary reduction: from the engine's leg table to one recommended trip.

use rand::Rng;
use tracing::debug;

use crate::domain::{ItineraryLeg, TransportMode};

use super::error::PlanError;
use super::options::group_options;
use super::request::TripRequest;
use super::select::{fastest_leg, select_option};
use super::shared_ride::RideHailModel;
use super::summary::{
    ItinerarySummary, RideHailBreakdown, RouteGeometry, SummaryDetail, TransitBreakdown,
};

/// Reduce the engine's legs for `request` to a single summary.
///
/// `legs` must be the table for `request.mode.engine_mode()`; for a shared
/// ride that is the car table. `rng` drives the ride-hail delays and is
/// untouched for other modes.
///
/// # Errors
///
/// Returns `PlanError::NoItineraryFound` if `legs` is empty or no option's
/// times fit in a `Duration`.
pub fn reduce<R: Rng + ?Sized>(
    request: &TripRequest,
    legs: Vec<ItineraryLeg>,
    ride_hail: &RideHailModel,
    rng: &mut R,
) -> Result<ItinerarySummary, PlanError> {
    if legs.is_empty() {
        return Err(PlanError::NoItineraryFound { mode: request.mode });
    }

    match request.mode {
        TransportMode::Car | TransportMode::Bicycle | TransportMode::Walk => {
            reduce_direct(request.mode, &legs)
        }
        TransportMode::SharedRide => reduce_shared_ride(&legs, ride_hail, rng),
        TransportMode::Transit => reduce_transit(request, legs),
    }
}

/// Fastest leg wins; distance covers every leg of its option.
fn reduce_direct(
    mode: TransportMode,
    legs: &[ItineraryLeg],
) -> Result<ItinerarySummary, PlanError> {
    let best = fastest_leg(legs).ok_or(PlanError::NoItineraryFound { mode })?;

    let distance_m = legs
        .iter()
        .filter(|leg| leg.option_id() == best.option_id())
        .map(ItineraryLeg::distance_m)
        .sum();

    let mut options: Vec<_> = legs.iter().map(ItineraryLeg::option_id).collect();
    options.sort();
    options.dedup();

    debug!(
        %mode,
        option = best.option_id().0,
        travel_secs = best.travel_time().num_seconds(),
        "selected fastest leg"
    );

    Ok(ItinerarySummary {
        mode,
        total_time: best.travel_time(),
        distance_m,
        options_considered: options.len(),
        detail: SummaryDetail::Direct,
        route: RouteGeometry::Single(best.geometry().to_vec()),
    })
}

/// The car trip plus a sampled pickup wait and detour.
fn reduce_shared_ride<R: Rng + ?Sized>(
    legs: &[ItineraryLeg],
    ride_hail: &RideHailModel,
    rng: &mut R,
) -> Result<ItinerarySummary, PlanError> {
    let car = reduce_direct(TransportMode::Car, legs)?;
    let delays = ride_hail.sample(rng);
    let total_time = car
        .total_time
        .checked_add(&delays.total())
        .ok_or(PlanError::NoItineraryFound {
            mode: TransportMode::SharedRide,
        })?;

    debug!(
        base_secs = car.total_time.num_seconds(),
        wait_secs = delays.wait.num_seconds(),
        detour_secs = delays.detour.num_seconds(),
        "sampled ride-hail delays"
    );

    Ok(ItinerarySummary {
        mode: TransportMode::SharedRide,
        total_time,
        distance_m: car.distance_m,
        options_considered: car.options_considered,
        detail: SummaryDetail::SharedRide(RideHailBreakdown {
            base_travel_time: car.total_time,
            delays,
        }),
        route: car.route,
    })
}

/// Best option under the request's criterion, drawn as walk/transit/walk.
fn reduce_transit(
    request: &TripRequest,
    legs: Vec<ItineraryLeg>,
) -> Result<ItinerarySummary, PlanError> {
    let options = group_options(legs);
    let best = select_option(&options, request.optimization).ok_or(
        PlanError::NoItineraryFound {
            mode: TransportMode::Transit,
        },
    )?;

    debug!(
        criterion = %request.optimization,
        option = best.id().0,
        candidates = options.len(),
        "selected transit option"
    );

    let route = RouteGeometry::Transit {
        first_walk: best.first_leg().geometry().to_vec(),
        transit: best.interior_geometry(),
        last_walk: best.last_leg().geometry().to_vec(),
    };

    Ok(ItinerarySummary {
        mode: TransportMode::Transit,
        total_time: best.total_time(),
        distance_m: best.distance_m(),
        options_considered: options.len(),
        detail: SummaryDetail::Transit(TransitBreakdown {
            option_id: best.id(),
            wait_time: best.wait_time(),
            num_transfers: best.num_transfers(),
            walking_time: best.walking_time(),
            walking_distance_m: best.walking_distance_m(),
            out_of_vehicle_time: best.out_of_vehicle_time(),
        }),
        route,
    })
}

#[cfg(test)]
#[path = "reduce_tests.rs"]
mod tests;
