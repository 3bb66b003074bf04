//! Domain types for the trip planner.
//!
//! This module contains the validated types shared by the request builder,
//! the itinerary reducer and the web layer. Types enforce their invariants
//! at construction time, so code that receives them can trust their validity.

mod coordinate;
mod criterion;
mod departure;
mod error;
mod leg;
mod mode;
mod units;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use criterion::OptimizationCriterion;
pub use departure::{
    DepartureChoice, InvalidDeparture, hour_options, minute_options, resolve_departure,
};
pub use error::DomainError;
pub use leg::{ItineraryLeg, OptionId};
pub use mode::{InvalidMode, TransportMode};
pub use units::{
    MILES_PER_METER, format_clock, format_duration_long, format_miles, format_minutes_seconds,
    hms, meters_to_miles, minutes_f64, seconds_f64,
};
