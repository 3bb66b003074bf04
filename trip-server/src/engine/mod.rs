//! Routing engine access.
//!
//! The engine is an external service that, given origin, destination,
//! departure time and one mode, returns a flat table of legs across several
//! candidate itineraries. This module provides an HTTP client for it, a
//! file-backed mock for development, and the [`RoutingEngine`] trait the
//! planner is written against.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::ItineraryLeg;

pub use client::{DEFAULT_BASE_URL, EngineClient, EngineConfig};
pub use convert::{ConversionError, convert_leg, convert_response};
pub use error::EngineError;
pub use mock::MockEngine;
pub use types::{DEPARTURE_FORMAT, EngineQuery, EngineResponse, LegDto};

/// Anything that can answer an engine query with a leg table.
pub trait RoutingEngine {
    /// Legs for `query`. An empty table means no itinerary was found.
    fn compute_legs(
        &self,
        query: &EngineQuery,
    ) -> impl Future<Output = Result<Vec<ItineraryLeg>, EngineError>> + Send;
}

impl RoutingEngine for EngineClient {
    async fn compute_legs(&self, query: &EngineQuery) -> Result<Vec<ItineraryLeg>, EngineError> {
        EngineClient::compute_legs(self, query).await
    }
}

impl RoutingEngine for MockEngine {
    async fn compute_legs(&self, query: &EngineQuery) -> Result<Vec<ItineraryLeg>, EngineError> {
        MockEngine::compute_legs(self, query).await
    }
}

/// The engine chosen at startup.
#[derive(Debug, Clone)]
pub enum Engine {
    Http(EngineClient),
    Mock(MockEngine),
}

impl RoutingEngine for Engine {
    async fn compute_legs(&self, query: &EngineQuery) -> Result<Vec<ItineraryLeg>, EngineError> {
        match self {
            Engine::Http(client) => client.compute_legs(query).await,
            Engine::Mock(mock) => mock.compute_legs(query).await,
        }
    }
}
