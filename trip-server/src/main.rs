use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::config::ServerConfig;
use trip_server::engine::{Engine, EngineClient, MockEngine};
use trip_server::planner::RideHailModel;
use trip_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "trip_server=info";

fn init_logging() {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("Invalid {}={directives:?}: {err}", EnvFilter::DEFAULT_ENV);
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }),
        Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ServerConfig::from_env()?;

    // Create the routing engine
    let engine = match &config.mock_dir {
        Some(dir) => {
            let mock = MockEngine::new(dir)?;
            info!(
                dir = %dir.display(),
                modes = ?mock.available_modes(),
                "using mock routing engine"
            );
            Engine::Mock(mock)
        }
        None => {
            if config.engine_api_key.is_none() {
                warn!("TRIP_ENGINE_API_KEY not set; engine requests are unauthenticated");
            }
            let client = EngineClient::new(config.engine_config())?;
            info!(url = %client.plan_url(), "using routing engine");
            Engine::Http(client)
        }
    };

    let ride_hail = RideHailModel::new(&config.planner)?;

    // Build app state and router
    let state = AppState::new(engine, ride_hail, config.map);
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Trip Planner listening on http://{}", config.bind_addr);
    info!("API endpoints: GET /health, POST /map/click, POST /session/reset, POST /trip/plan");

    axum::serve(listener, app).await?;
    Ok(())
}
