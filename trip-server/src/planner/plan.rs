//! One planning round trip: query the engine, reduce its answer.

use rand::Rng;
use tracing::{debug, info};

use crate::engine::{EngineQuery, RoutingEngine};

use super::error::PlanError;
use super::reduce::reduce;
use super::request::TripRequest;
use super::shared_ride::RideHailModel;
use super::summary::ItinerarySummary;

/// Trip planner over a routing engine.
pub struct Planner<'a, E: RoutingEngine> {
    engine: &'a E,
    ride_hail: &'a RideHailModel,
}

impl<'a, E: RoutingEngine> Planner<'a, E> {
    /// Create a new planner.
    pub fn new(engine: &'a E, ride_hail: &'a RideHailModel) -> Self {
        Self { engine, ride_hail }
    }

    /// The engine query for `request`. Shared rides are asked for as car
    /// trips.
    pub fn query_for(request: &TripRequest) -> EngineQuery {
        EngineQuery::new(
            request.origin,
            request.destination,
            request.departure,
            request.mode.engine_mode(),
        )
    }

    /// Plan one trip. Makes exactly one engine call.
    ///
    /// # Errors
    ///
    /// - `PlanError::EngineInvocation` if the engine call fails
    /// - `PlanError::NoItineraryFound` if the engine returns no usable legs
    pub async fn plan<R: Rng + ?Sized>(
        &self,
        request: &TripRequest,
        rng: &mut R,
    ) -> Result<ItinerarySummary, PlanError> {
        let query = Self::query_for(request);
        debug!(
            mode = %request.mode,
            engine_mode = ?query.mode(),
            departure = %query.departure,
            "planning trip"
        );

        let legs = self.engine.compute_legs(&query).await?;
        let summary = reduce(request, legs, self.ride_hail, rng)?;

        info!(
            mode = %summary.mode,
            total_secs = summary.total_time.num_seconds(),
            options = summary.options_considered,
            "trip planned"
        );

        Ok(summary)
    }
}
