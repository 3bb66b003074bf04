//! Building a trip request from UI state.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::{
    Coordinate, DepartureChoice, OptimizationCriterion, TransportMode, resolve_departure,
};
use crate::session::{TripSession, UiTrigger};

use super::error::PlanError;

/// A normalized request for one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TransportMode,
    /// Local date-time of departure.
    pub departure: NaiveDateTime,
    pub optimization: OptimizationCriterion,
}

/// Raw form state, as typed or picked in the UI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripForm {
    /// `"lat, lon"` text
    #[serde(default)]
    pub origin: String,

    /// `"lat, lon"` text
    #[serde(default)]
    pub destination: String,

    #[serde(default)]
    pub departure: DepartureChoice,

    /// `YYYY-MM-DD`
    pub departure_date: Option<String>,

    /// `"00"` to `"23"`
    pub departure_hour: Option<String>,

    /// `"00"` to `"55"`
    pub departure_minute: Option<String>,

    #[serde(default)]
    pub optimization: OptimizationCriterion,
}

/// Build a trip request for the action that just happened.
///
/// `session` must already include the press for `trigger`. Returns
/// `Ok(None)` when the action does not call for a calculation: it is not a
/// mode, calculate or criterion action, or "Calculate" has never been
/// pressed.
///
/// # Errors
///
/// - `PlanError::IncompleteSelection` if origin or destination is empty
/// - `PlanError::InvalidInput` if coordinate or departure text is malformed
pub fn build_request(
    form: &TripForm,
    trigger: UiTrigger,
    session: &TripSession,
    now: NaiveDateTime,
) -> Result<Option<TripRequest>, PlanError> {
    let Some(mode) = session.resolve_mode(trigger) else {
        return Ok(None);
    };
    if !session.has_calculated() {
        return Ok(None);
    }

    let origin = form.origin.trim();
    let destination = form.destination.trim();
    if origin.is_empty() {
        return Err(PlanError::IncompleteSelection("origin is missing"));
    }
    if destination.is_empty() {
        return Err(PlanError::IncompleteSelection("destination is missing"));
    }

    let origin = Coordinate::parse(origin)?;
    let destination = Coordinate::parse(destination)?;

    let departure = resolve_departure(
        form.departure,
        form.departure_date.as_deref(),
        form.departure_hour.as_deref(),
        form.departure_minute.as_deref(),
        now,
    )?;

    Ok(Some(TripRequest {
        origin,
        destination,
        mode,
        departure,
        optimization: form.optimization,
    }))
}
