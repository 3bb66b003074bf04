//! Mock routing engine for development without a live engine.
//!
//! Loads canned responses from JSON files and serves them as if they were
//! live engine answers. Origin, destination and departure are ignored.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{ItineraryLeg, TransportMode};

use super::convert::convert_response;
use super::error::EngineError;
use super::types::{EngineQuery, EngineResponse};

/// Mock engine that serves responses from JSON files.
#[derive(Debug, Clone)]
pub struct MockEngine {
    /// Pre-loaded responses, keyed by engine mode.
    responses: Arc<HashMap<TransportMode, EngineResponse>>,
}

impl MockEngine {
    /// Load every `{MODE}.json` file in `data_dir` (e.g. `TRANSIT.json`,
    /// `CAR.json`). Other files are ignored.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, EngineError> {
        let responses = load_dir(data_dir.as_ref())?;
        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Serve the canned leg table for the query's mode.
    pub async fn compute_legs(&self, query: &EngineQuery) -> Result<Vec<ItineraryLeg>, EngineError> {
        let mode = query
            .mode()
            .ok_or_else(|| EngineError::NotConfigured("query names no mode".to_string()))?;

        let responses = &self.responses;
        let response = responses.get(&mode).ok_or_else(|| EngineError::ApiError {
            status: 404,
            message: format!(
                "No mock data for mode {mode}. Available: {:?}",
                responses.keys().map(TransportMode::as_str).collect::<Vec<_>>()
            ),
        })?;

        let legs = convert_response(response)?;
        debug!(%mode, legs = legs.len(), "served mock legs");
        Ok(legs)
    }

    /// Modes with mock data.
    pub fn available_modes(&self) -> Vec<TransportMode> {
        let mut modes: Vec<_> = self.responses.keys().copied().collect();
        modes.sort_by_key(|m| m.as_str());
        modes
    }
}

fn load_dir(data_dir: &Path) -> Result<HashMap<TransportMode, EngineResponse>, EngineError> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| {
        EngineError::NotConfigured(format!("Failed to read mock data directory: {e}"))
    })?;

    let mut responses = HashMap::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            EngineError::NotConfigured(format!("Failed to read directory entry: {e}"))
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let Some(mode) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| TransportMode::parse(s).ok())
        else {
            continue;
        };

        let json = std::fs::read_to_string(&path).map_err(|e| {
            EngineError::NotConfigured(format!("Failed to read {}: {e}", path.display()))
        })?;

        let response: EngineResponse =
            serde_json::from_str(&json).map_err(|e| EngineError::Json {
                message: format!("{}: {e}", path.display()),
                body: None,
            })?;

        responses.insert(mode, response);
    }

    if responses.is_empty() {
        return Err(EngineError::NotConfigured(format!(
            "No mock response files found in {}",
            data_dir.display()
        )));
    }

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn query(mode: TransportMode) -> EngineQuery {
        EngineQuery::new(
            Coordinate::new(35.99, -78.9).unwrap(),
            Coordinate::new(36.0, -78.93).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            mode,
        )
    }

    #[tokio::test]
    async fn load_bundled_mock_data() {
        let engine = MockEngine::new("data/mock_engine").unwrap();
        let modes = engine.available_modes();

        assert!(modes.contains(&TransportMode::Transit));
        assert!(modes.contains(&TransportMode::Car));
    }

    #[tokio::test]
    async fn bundled_transit_has_several_options() {
        let engine = MockEngine::new("data/mock_engine").unwrap();
        let legs = engine
            .compute_legs(&query(TransportMode::Transit))
            .await
            .unwrap();

        let mut options: Vec<_> = legs.iter().map(|l| l.option_id()).collect();
        options.dedup();
        assert!(options.len() > 1);
    }

    #[tokio::test]
    async fn unknown_mode_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("CAR.json"), r#"{"legs": []}"#).unwrap();

        let engine = MockEngine::new(dir.path()).unwrap();
        let result = engine.compute_legs(&query(TransportMode::Walk)).await;

        assert!(matches!(result, Err(EngineError::ApiError { status: 404, .. })));
    }

    #[tokio::test]
    async fn ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("WALK.json"), r#"{"legs": []}"#).unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        std::fs::write(dir.path().join("BOAT.json"), "{}").unwrap();

        let engine = MockEngine::new(dir.path()).unwrap();
        assert_eq!(engine.available_modes(), vec![TransportMode::Walk]);
    }

    #[test]
    fn empty_dir_is_not_configured() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MockEngine::new(dir.path()),
            Err(EngineError::NotConfigured(_))
        ));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("CAR.json"), "{not json").unwrap();
        assert!(matches!(
            MockEngine::new(dir.path()),
            Err(EngineError::Json { .. })
        ));
    }
}
