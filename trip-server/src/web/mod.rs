//! Web layer for the trip planner.
//!
//! Serves the planner page and the JSON/HTML endpoints behind it.

mod dto;
mod layers;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use layers::{map_layers, route_layers, selection_layers};
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
