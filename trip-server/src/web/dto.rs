//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;
use crate::planner::{ItinerarySummary, TripForm};
use crate::session::{ClickTarget, MapSelection, TripSession, UiTrigger};

/// Request to plan a trip after a UI action.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Press counts before this action
    #[serde(default)]
    pub session: TripSession,

    /// DOM id of the element that fired, e.g. `"mode-bike"`
    pub trigger: UiTrigger,

    /// Current form values
    #[serde(default)]
    pub form: TripForm,
}

/// Summary figures in machine-readable form.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub mode: TransportMode,

    /// Total trip time in seconds
    pub total_secs: i64,

    /// Meters
    pub distance_m: f64,

    /// Seconds waiting at stops or for a pickup
    pub wait_secs: i64,

    /// Transit only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_transfers: Option<i64>,

    /// Transit only, seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_secs: Option<i64>,

    /// Transit only, meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_distance_m: Option<f64>,

    /// Candidate itineraries the engine offered
    pub options_considered: usize,
}

impl SummaryResult {
    pub fn from_summary(summary: &ItinerarySummary) -> Self {
        Self {
            mode: summary.mode,
            total_secs: summary.total_time.num_seconds(),
            distance_m: summary.distance_m,
            wait_secs: summary.wait_time().num_seconds(),
            num_transfers: summary.num_transfers(),
            walking_secs: summary.walking_time().map(|d| d.num_seconds()),
            walking_distance_m: summary.walking_distance_m(),
            options_considered: summary.options_considered,
        }
    }
}

/// Response to a plan request.
///
/// When the action did not call for a calculation, `summary` is absent and
/// `lines` is empty; the client keeps the updated `session` either way.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Rendered result panel
    pub html: String,

    /// Result panel text, one entry per line
    pub lines: Vec<String>,

    /// Mode to highlight
    pub selected_mode: Option<TransportMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryResult>,

    /// Press counts including this action
    pub session: TripSession,

    /// Map layers to draw
    pub layers: geojson::FeatureCollection,
}

/// A click on the map.
#[derive(Debug, Deserialize)]
pub struct MapClickRequest {
    pub lat: f64,
    pub lon: f64,

    /// Current input text
    #[serde(default)]
    pub selection: MapSelection,
}

/// Selection after a map click.
#[derive(Debug, Serialize)]
pub struct MapClickResponse {
    pub selection: MapSelection,

    /// Which input the click filled
    pub target: ClickTarget,

    /// Markers for the new selection
    pub layers: geojson::FeatureCollection,
}

/// Fresh state after "Start Over".
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: TripSession,
    pub selection: MapSelection,
    pub layers: geojson::FeatureCollection,
}

/// Error response body.
///
/// A failed plan still carries the session including the press that
/// triggered it, so the client keeps counting.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<TripSession>,
}
