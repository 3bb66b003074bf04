//! Trip summaries: the reduced result shown to the user.

use chrono::Duration;

use crate::domain::{
    Coordinate, OptionId, TransportMode, format_clock, format_duration_long, format_miles,
    format_minutes_seconds,
};

use super::shared_ride::RideHailDelays;

/// Route geometry to draw on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteGeometry {
    /// One line for car, bicycle, walk and shared-ride trips.
    Single(Vec<Coordinate>),

    /// Walk to the first stop, every transit ride joined end to end, walk
    /// from the last stop.
    Transit {
        first_walk: Vec<Coordinate>,
        transit: Vec<Coordinate>,
        last_walk: Vec<Coordinate>,
    },
}

/// Transit-only figures for the selected option.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitBreakdown {
    pub option_id: OptionId,
    pub wait_time: Duration,
    pub num_transfers: i64,
    pub walking_time: Duration,
    pub walking_distance_m: f64,
    pub out_of_vehicle_time: Duration,
}

/// Shared-ride figures: the car trip and the delays added to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideHailBreakdown {
    pub base_travel_time: Duration,
    pub delays: RideHailDelays,
}

/// Mode-specific part of a summary.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryDetail {
    /// Car, bicycle or walk.
    Direct,
    SharedRide(RideHailBreakdown),
    Transit(TransitBreakdown),
}

/// The recommended itinerary reduced to what the user sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ItinerarySummary {
    pub mode: TransportMode,
    pub total_time: Duration,
    /// Meters over every leg of the chosen option.
    pub distance_m: f64,
    /// Candidate itineraries the engine offered.
    pub options_considered: usize,
    pub detail: SummaryDetail,
    pub route: RouteGeometry,
}

impl ItinerarySummary {
    /// Time spent waiting: for transit, at stops; for a shared ride, for the
    /// pickup. Zero otherwise.
    pub fn wait_time(&self) -> Duration {
        match &self.detail {
            SummaryDetail::Direct => Duration::zero(),
            SummaryDetail::SharedRide(ride) => ride.delays.wait,
            SummaryDetail::Transit(transit) => transit.wait_time,
        }
    }

    /// Transfers between transit vehicles; `None` for other modes.
    pub fn num_transfers(&self) -> Option<i64> {
        match &self.detail {
            SummaryDetail::Transit(transit) => Some(transit.num_transfers),
            _ => None,
        }
    }

    /// Walking time to and from transit; `None` for other modes.
    pub fn walking_time(&self) -> Option<Duration> {
        match &self.detail {
            SummaryDetail::Transit(transit) => Some(transit.walking_time),
            _ => None,
        }
    }

    /// Walking distance to and from transit in meters; `None` for other modes.
    pub fn walking_distance_m(&self) -> Option<f64> {
        match &self.detail {
            SummaryDetail::Transit(transit) => Some(transit.walking_distance_m),
            _ => None,
        }
    }

    /// Walking plus waiting for transit; `None` for other modes.
    pub fn out_of_vehicle_time(&self) -> Option<Duration> {
        match &self.detail {
            SummaryDetail::Transit(transit) => Some(transit.out_of_vehicle_time),
            _ => None,
        }
    }

    /// Display lines for the result panel, most important first.
    pub fn lines(&self) -> Vec<String> {
        match &self.detail {
            SummaryDetail::Direct => vec![
                format!(
                    "Calculated Travel Time: {}",
                    format_duration_long(self.total_time)
                ),
                format!("Total Distance: {}", format_miles(self.distance_m)),
            ],
            SummaryDetail::SharedRide(ride) => vec![
                format!(
                    "Calculated Shared Ride Travel Time: {}",
                    format_duration_long(self.total_time)
                ),
                format!("Wait Time: {}", format_minutes_seconds(ride.delays.wait)),
                format!(
                    "Additional Travel Time: {}",
                    format_minutes_seconds(ride.delays.detour)
                ),
                format!(
                    "Base Travel Time: {}",
                    format_minutes_seconds(ride.base_travel_time)
                ),
            ],
            SummaryDetail::Transit(transit) => vec![
                format!(
                    "Calculated Travel Time: {}",
                    format_duration_long(self.total_time)
                ),
                format!(
                    "Total Walking Distance: {}",
                    format_miles(transit.walking_distance_m)
                ),
                format!(
                    "Total Out of Vehicle Time: {}",
                    format_clock(transit.out_of_vehicle_time)
                ),
                format!(
                    "Total Walking Time: {}",
                    format_clock(transit.walking_time)
                ),
                format!("Number of Transfers: {}", transit.num_transfers),
            ],
        }
    }
}
