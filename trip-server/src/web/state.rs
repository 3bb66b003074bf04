//! Application state for the web layer.

use std::sync::Arc;

use crate::config::MapView;
use crate::engine::Engine;
use crate::planner::RideHailModel;

/// Shared application state.
///
/// Holds no per-user data: each browser carries its own session.
#[derive(Clone)]
pub struct AppState {
    /// Routing engine, live or mock
    pub engine: Arc<Engine>,

    /// Shared-ride delay model
    pub ride_hail: Arc<RideHailModel>,

    /// Initial map view
    pub map: MapView,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: Engine, ride_hail: RideHailModel, map: MapView) -> Self {
        Self {
            engine: Arc::new(engine),
            ride_hail: Arc::new(ride_hail),
            map,
        }
    }
}
