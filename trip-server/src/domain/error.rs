//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from engine and HTTP errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Leg measurements from the engine are unusable
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Summing an option's durations left chrono's range
    #[error("{0} overflows")]
    DurationOverflow(&'static str),

    /// An option has no legs
    #[error("itinerary option must have at least one leg")]
    EmptyOption,
}
