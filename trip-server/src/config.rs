//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Coordinate;
use crate::engine::{DEFAULT_BASE_URL, EngineConfig};
use crate::planner::PlannerConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default engine request timeout in seconds.
pub const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 30;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct InvalidSetting {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Initial map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: Coordinate::DURHAM,
            zoom: 10,
        }
    }
}

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `TRIP_ENGINE_URL`
    pub engine_url: String,
    /// `TRIP_ENGINE_API_KEY`
    pub engine_api_key: Option<String>,
    /// `TRIP_ENGINE_TIMEOUT_SECS`
    pub engine_timeout_secs: u64,
    /// `TRIP_MOCK_DIR`; when set the mock engine is used
    pub mock_dir: Option<PathBuf>,
    /// `TRIP_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `TRIP_STATIC_DIR`
    pub static_dir: PathBuf,
    pub map: MapView,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, InvalidSetting> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read configuration through `var`, which returns a variable's value
    /// if set. Empty values count as unset.
    pub fn from_vars<F>(var: F) -> Result<Self, InvalidSetting>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let engine_timeout_secs = match get("TRIP_ENGINE_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| InvalidSetting {
                    name: "TRIP_ENGINE_TIMEOUT_SECS",
                    value: v.clone(),
                    reason: "expected a positive number of seconds".to_string(),
                })?,
            None => DEFAULT_ENGINE_TIMEOUT_SECS,
        };

        let bind_addr = get("TRIP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| InvalidSetting {
                name: "TRIP_BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            engine_url: get("TRIP_ENGINE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            engine_api_key: get("TRIP_ENGINE_API_KEY"),
            engine_timeout_secs,
            mock_dir: get("TRIP_MOCK_DIR").map(PathBuf::from),
            bind_addr,
            static_dir: get("TRIP_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            map: MapView::default(),
            planner: PlannerConfig::default(),
        })
    }

    /// Settings for the HTTP engine client.
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default()
            .with_base_url(&self.engine_url)
            .with_timeout(self.engine_timeout_secs);
        match &self.engine_api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}
