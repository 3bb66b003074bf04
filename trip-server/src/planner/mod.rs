//! Trip planning: from UI state to one recommended itinerary.
//!
//! The request builder turns form text and the UI session into a validated
//! [`TripRequest`]. The [`Planner`] asks the routing engine for candidate
//! legs and reduces them to an [`ItinerarySummary`]: the fastest leg for
//! car, bicycle and walk; the car trip plus sampled ride-hail delays for a
//! shared ride; the best option under the user's criterion for transit.

mod config;
mod error;
mod options;
mod plan;
mod reduce;
mod request;
mod select;
mod shared_ride;
mod summary;

pub use config::{ConfigError, PlannerConfig};
pub use error::PlanError;
pub use options::{ItineraryOption, group_options};
pub use plan::Planner;
pub use reduce::reduce;
pub use request::{TripForm, TripRequest, build_request};
pub use select::{criterion_key, fastest_leg, select_option};
pub use shared_ride::{RideHailDelays, RideHailModel};
pub use summary::{
    ItinerarySummary, RideHailBreakdown, RouteGeometry, SummaryDetail, TransitBreakdown,
};
