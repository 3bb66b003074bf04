//! Routing engine wire types.
//!
//! The query is built from a validated trip request. Response fields are
//! `Option` throughout because the engine sends `null` for legs it could
//! not fully cost.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, TransportMode};

/// Timestamp layout the engine expects for departures.
pub const DEPARTURE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Body of `POST {base_url}/plan`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineQuery {
    pub origin: Coordinate,
    pub destination: Coordinate,
    /// Local time, `YYYY-MM-DDTHH:MM:SS`.
    pub departure: String,
    /// Always a single engine mode.
    pub transport_modes: Vec<TransportMode>,
}

impl EngineQuery {
    /// Query for one mode. Shared rides must already be mapped to `Car`.
    pub fn new(
        origin: Coordinate,
        destination: Coordinate,
        departure: NaiveDateTime,
        mode: TransportMode,
    ) -> Self {
        Self {
            origin,
            destination,
            departure: departure.format(DEPARTURE_FORMAT).to_string(),
            transport_modes: vec![mode],
        }
    }

    /// The single mode asked for.
    pub fn mode(&self) -> Option<TransportMode> {
        self.transport_modes.first().copied()
    }
}

/// Response from `POST {base_url}/plan`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineResponse {
    /// Flat leg table across every candidate itinerary.
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One row of the leg table.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Candidate itinerary this leg belongs to.
    pub option: Option<u32>,

    /// Position of the leg within its itinerary.
    pub segment: Option<u32>,

    /// Mode name, e.g. `"WALK"`, `"BUS"`, `"CAR"`.
    pub transport_mode: Option<String>,

    /// Seconds in motion. `null` when the engine could not route the leg.
    pub travel_time: Option<f64>,

    /// Seconds waiting before the leg.
    pub wait_time: Option<f64>,

    /// Meters.
    pub distance: Option<f64>,

    /// GeoJSON `LineString` in `[lon, lat]` order.
    pub geometry: Option<geojson::Geometry>,
}
