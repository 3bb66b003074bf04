//! Transport modes offered by the planner.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidMode(String);

/// A transport mode selectable in the UI.
///
/// `SharedRide` is not something the routing engine understands; it is
/// planned as a car trip with ride-hail delays added on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Transit,
    Car,
    Bicycle,
    SharedRide,
    Walk,
}

impl TransportMode {
    /// All modes in the order their buttons appear in the UI.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Transit,
        TransportMode::Car,
        TransportMode::Bicycle,
        TransportMode::SharedRide,
        TransportMode::Walk,
    ];

    /// Order in which modes are checked when inferring the last selected
    /// mode from press counts.
    pub const TIE_BREAK_ORDER: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bicycle,
        TransportMode::Transit,
        TransportMode::SharedRide,
        TransportMode::Walk,
    ];

    /// Canonical upper-case name, e.g. `"SHARED_RIDE"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Transit => "TRANSIT",
            TransportMode::Car => "CAR",
            TransportMode::Bicycle => "BICYCLE",
            TransportMode::SharedRide => "SHARED_RIDE",
            TransportMode::Walk => "WALK",
        }
    }

    /// Parse a canonical mode name.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| InvalidMode(s.to_string()))
    }

    /// The mode to request from the routing engine.
    pub fn engine_mode(&self) -> TransportMode {
        match self {
            TransportMode::SharedRide => TransportMode::Car,
            other => *other,
        }
    }

    /// Button label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Transit => "Transit 🚌",
            TransportMode::Car => "Car 🚗",
            TransportMode::Bicycle => "Bike 🚲",
            TransportMode::SharedRide => "Shared Ride 🚕",
            TransportMode::Walk => "Walk 🚶🏻",
        }
    }

    /// DOM id of the mode's button.
    pub fn button_id(&self) -> &'static str {
        match self {
            TransportMode::Transit => "mode-transit",
            TransportMode::Car => "mode-car",
            TransportMode::Bicycle => "mode-bike",
            TransportMode::SharedRide => "mode-shared-ride",
            TransportMode::Walk => "mode-walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
