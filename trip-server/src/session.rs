//! Per-browser UI session state.
//!
//! The browser keeps this state between actions and sends it with every
//! request; the server never stores it. Mode buttons count their presses,
//! and "Calculate" reuses the most pressed mode.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, TransportMode};

/// Error returned when an action id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown UI action: {0}")]
pub struct InvalidTrigger(String);

/// The UI action that caused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UiTrigger {
    /// A click on the map.
    MapClick,
    /// The "Calculate Travel Time" button.
    Calculate,
    /// The "Start Over" button.
    StartOver,
    /// One of the mode buttons.
    Mode(TransportMode),
    /// The optimization criterion dropdown changed.
    Optimization,
}

impl UiTrigger {
    /// Parse the DOM id of the element that fired.
    pub fn parse(id: &str) -> Result<Self, InvalidTrigger> {
        match id {
            "map-graph" => Ok(UiTrigger::MapClick),
            "calculate-button" => Ok(UiTrigger::Calculate),
            "start-over-button" => Ok(UiTrigger::StartOver),
            "optimization-criteria" => Ok(UiTrigger::Optimization),
            other => TransportMode::ALL
                .into_iter()
                .find(|m| m.button_id() == other)
                .map(UiTrigger::Mode)
                .ok_or_else(|| InvalidTrigger(other.to_string())),
        }
    }

    /// DOM id of the element.
    pub fn id(&self) -> &'static str {
        match self {
            UiTrigger::MapClick => "map-graph",
            UiTrigger::Calculate => "calculate-button",
            UiTrigger::StartOver => "start-over-button",
            UiTrigger::Mode(mode) => mode.button_id(),
            UiTrigger::Optimization => "optimization-criteria",
        }
    }
}

impl TryFrom<String> for UiTrigger {
    type Error = InvalidTrigger;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UiTrigger::parse(&s)
    }
}

impl From<UiTrigger> for String {
    fn from(t: UiTrigger) -> Self {
        t.id().to_string()
    }
}

/// Cumulative button presses for one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSession {
    pub transit: u32,
    pub car: u32,
    pub bicycle: u32,
    pub shared_ride: u32,
    pub walk: u32,
    pub calculate: u32,
}

impl TripSession {
    /// Record a press of the button behind `trigger`.
    ///
    /// "Start Over" clears the session instead.
    pub fn press(&mut self, trigger: UiTrigger) {
        match trigger {
            UiTrigger::Mode(mode) => *self.count_mut(mode) += 1,
            UiTrigger::Calculate => self.calculate += 1,
            UiTrigger::StartOver => self.reset(),
            UiTrigger::MapClick | UiTrigger::Optimization => {}
        }
    }

    /// Forget every press.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Presses of `mode`'s button so far.
    pub fn count(&self, mode: TransportMode) -> u32 {
        match mode {
            TransportMode::Transit => self.transit,
            TransportMode::Car => self.car,
            TransportMode::Bicycle => self.bicycle,
            TransportMode::SharedRide => self.shared_ride,
            TransportMode::Walk => self.walk,
        }
    }

    fn count_mut(&mut self, mode: TransportMode) -> &mut u32 {
        match mode {
            TransportMode::Transit => &mut self.transit,
            TransportMode::Car => &mut self.car,
            TransportMode::Bicycle => &mut self.bicycle,
            TransportMode::SharedRide => &mut self.shared_ride,
            TransportMode::Walk => &mut self.walk,
        }
    }

    /// Whether "Calculate" has been pressed at least once.
    pub fn has_calculated(&self) -> bool {
        self.calculate > 0
    }

    /// The mode taken to be the user's current choice: the first mode, in
    /// CAR, BICYCLE, TRANSIT, SHARED_RIDE, WALK order, whose press count is
    /// at least every other mode's. With no presses this is CAR.
    pub fn most_pressed_mode(&self) -> TransportMode {
        let max = TransportMode::ALL
            .into_iter()
            .map(|m| self.count(m))
            .max()
            .unwrap_or(0);

        TransportMode::TIE_BREAK_ORDER
            .into_iter()
            .find(|&m| self.count(m) >= max)
            .unwrap_or(TransportMode::Car)
    }

    /// The mode to plan for after `trigger`, or `None` if the action does
    /// not ask for a plan.
    pub fn resolve_mode(&self, trigger: UiTrigger) -> Option<TransportMode> {
        match trigger {
            UiTrigger::Mode(mode) => Some(mode),
            UiTrigger::Calculate => Some(self.most_pressed_mode()),
            // The criterion only ranks transit options
            UiTrigger::Optimization => Some(TransportMode::Transit),
            UiTrigger::MapClick | UiTrigger::StartOver => None,
        }
    }
}

/// Which input a map click filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The origin was empty and now holds the click.
    Origin,
    /// The destination was empty and now holds the click.
    Destination,
    /// Both were set; the click became the new origin and the destination
    /// was cleared.
    RestartedOrigin,
}

/// Origin and destination input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSelection {
    pub origin: String,
    pub destination: String,
}

impl MapSelection {
    /// Apply a map click: fill the origin, then the destination, then start
    /// a new selection from the click.
    pub fn apply_click(&mut self, point: Coordinate) -> ClickTarget {
        let text = point.to_string();
        if self.origin.trim().is_empty() {
            self.origin = text;
            ClickTarget::Origin
        } else if self.destination.trim().is_empty() {
            self.destination = text;
            ClickTarget::Destination
        } else {
            self.origin = text;
            self.destination.clear();
            ClickTarget::RestartedOrigin
        }
    }

    /// Clear both inputs.
    pub fn reset(&mut self) {
        self.origin.clear();
        self.destination.clear();
    }

    /// The origin, if its text parses.
    pub fn origin_point(&self) -> Option<Coordinate> {
        Coordinate::parse(&self.origin).ok()
    }

    /// The destination, if its text parses.
    pub fn destination_point(&self) -> Option<Coordinate> {
        Coordinate::parse(&self.destination).ok()
    }
}
