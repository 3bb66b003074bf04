//! Askama templates for the web frontend.

use askama::Template;

use crate::config::MapView;
use crate::domain::{OptimizationCriterion, TransportMode, hour_options, minute_options};
use crate::planner::ItinerarySummary;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Planner page: inputs, mode buttons, result panel and map.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Shown in the result panel until the first calculation
    pub prompt: &'static str,
    pub modes: Vec<ModeButtonView>,
    pub criteria: Vec<CriterionView>,
    pub hours: Vec<String>,
    pub minutes: Vec<String>,
    /// `YYYY-MM-DD`, the earliest date the picker offers
    pub today: String,
    pub map_lat: f64,
    pub map_lon: f64,
    pub map_zoom: u8,
}

impl IndexTemplate {
    pub fn new(map: &MapView, today: String) -> Self {
        Self {
            prompt: CALCULATE_PROMPT,
            modes: TransportMode::ALL.iter().map(ModeButtonView::from_mode).collect(),
            criteria: OptimizationCriterion::ALL
                .iter()
                .map(|c| CriterionView::from_criterion(*c, OptimizationCriterion::default()))
                .collect(),
            hours: hour_options(),
            minutes: minute_options(),
            today,
            map_lat: map.center.lat(),
            map_lon: map.center.lon(),
            map_zoom: map.zoom,
        }
    }
}

/// Result panel text while there is nothing to calculate.
pub const CALCULATE_PROMPT: &str = "Enter valid coordinates and click 'Calculate Travel Time'.";

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Result panel for a planned trip.
#[derive(Template)]
#[template(path = "trip_summary.html")]
pub struct TripSummaryTemplate {
    pub mode_label: String,
    pub lines: Vec<String>,
}

impl TripSummaryTemplate {
    pub fn from_summary(summary: &ItinerarySummary) -> Self {
        Self {
            mode_label: summary.mode.label().to_string(),
            lines: summary.lines(),
        }
    }
}

/// Result panel holding a single message: a prompt or an error.
#[derive(Template)]
#[template(path = "trip_message.html")]
pub struct TripMessageTemplate {
    pub message: String,
    pub is_error: bool,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A mode button.
#[derive(Debug, Clone)]
pub struct ModeButtonView {
    /// DOM id, also the action id sent back
    pub id: String,
    /// Canonical mode name
    pub value: String,
    pub label: String,
}

impl ModeButtonView {
    pub fn from_mode(mode: &TransportMode) -> Self {
        Self {
            id: mode.button_id().to_string(),
            value: mode.as_str().to_string(),
            label: mode.label().to_string(),
        }
    }
}

/// An entry in the optimization criterion dropdown.
#[derive(Debug, Clone)]
pub struct CriterionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl CriterionView {
    pub fn from_criterion(
        criterion: OptimizationCriterion,
        current: OptimizationCriterion,
    ) -> Self {
        Self {
            value: criterion.as_str().to_string(),
            label: criterion.label().to_string(),
            selected: criterion == current,
        }
    }
}
