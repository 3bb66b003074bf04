//! Errors from building and planning a trip.

use crate::domain::{InvalidCoordinate, InvalidDeparture, TransportMode};
use crate::engine::EngineError;

/// Everything that can stop a trip from being planned.
///
/// Every variant is recoverable from the user's side: they can fix their
/// input or try again.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Coordinate or departure text could not be parsed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Origin or destination has not been chosen yet
    #[error("incomplete selection: {0}")]
    IncompleteSelection(&'static str),

    /// The engine returned no usable legs
    #[error("no {mode} itinerary found")]
    NoItineraryFound { mode: TransportMode },

    /// The engine call itself failed
    #[error("routing engine failed: {0}")]
    EngineInvocation(#[from] EngineError),
}

impl PlanError {
    /// Message to show in the result panel.
    pub fn user_message(&self) -> String {
        match self {
            PlanError::InvalidInput(msg) => format!("Please check your input: {msg}"),
            PlanError::IncompleteSelection(msg) => {
                format!("Select an origin and a destination first ({msg}).")
            }
            PlanError::NoItineraryFound { mode } => {
                format!("No route found for {mode} between these points.")
            }
            PlanError::EngineInvocation(e) => format!("Error calculating travel time: {e}"),
        }
    }
}

impl From<InvalidCoordinate> for PlanError {
    fn from(e: InvalidCoordinate) -> Self {
        PlanError::InvalidInput(e.to_string())
    }
}

impl From<InvalidDeparture> for PlanError {
    fn from(e: InvalidDeparture) -> Self {
        PlanError::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    #[test]
    fn error_display() {
        let err = PlanError::IncompleteSelection("destination is missing");
        assert_eq!(
            err.to_string(),
            "incomplete selection: destination is missing"
        );

        let err = PlanError::NoItineraryFound {
            mode: TransportMode::Bicycle,
        };
        assert_eq!(err.to_string(), "no BICYCLE itinerary found");

        let err = PlanError::EngineInvocation(EngineError::RateLimited);
        assert_eq!(
            err.to_string(),
            "routing engine failed: rate limited by routing engine"
        );
    }

    #[test]
    fn coordinate_errors_become_invalid_input() {
        let err: PlanError = Coordinate::parse("here").unwrap_err().into();
        assert!(matches!(err, PlanError::InvalidInput(_)));
        assert!(err.user_message().starts_with("Please check your input"));
    }

    #[test]
    fn no_itinerary_message() {
        let err = PlanError::NoItineraryFound {
            mode: TransportMode::Transit,
        };
        assert_eq!(
            err.user_message(),
            "No route found for TRANSIT between these points."
        );
    }
}
