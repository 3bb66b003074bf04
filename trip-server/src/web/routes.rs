//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::Coordinate;
use crate::planner::{PlanError, Planner, TripForm, build_request};
use crate::session::{MapSelection, TripSession, UiTrigger};

use super::dto::*;
use super::layers::map_layers;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/map/click", post(map_click))
        .route("/session/reset", post(reset_session))
        .route("/trip/plan", post(plan_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Planner page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let html = IndexTemplate::new(&state.map, today)
        .render()
        .map_err(template_error)?;
    Ok(Html(html))
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Anything without a route.
async fn not_found(uri: Uri) -> impl IntoResponse {
    let page = ErrorTemplate {
        title: "Not Found".into(),
        message: "There is nothing at this address.".into(),
        details: Some(uri.path().to_string()),
    };
    (
        StatusCode::NOT_FOUND,
        Html(
            page.render()
                .unwrap_or_else(|e| format!("Template error: {}", e)),
        ),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Internal {
        message: format!("Template error: {}", e),
    }
}

/// Apply a map click to the origin/destination selection.
async fn map_click(Json(req): Json<MapClickRequest>) -> Result<Json<MapClickResponse>, AppError> {
    let point = Coordinate::new(req.lat, req.lon).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let mut selection = req.selection;
    let target = selection.apply_click(point);
    let layers = map_layers(
        None,
        selection.origin_point(),
        selection.destination_point(),
    );

    Ok(Json(MapClickResponse {
        selection,
        target,
        layers,
    }))
}

/// "Start Over": a fresh session and an empty map.
async fn reset_session() -> Json<SessionResponse> {
    Json(SessionResponse {
        session: TripSession::default(),
        selection: MapSelection::default(),
        layers: map_layers(None, None, None),
    })
}

/// Plan a trip after a UI action.
async fn plan_trip(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let html = accepts_html(&headers);

    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid plan request");
            let e = AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            };
            return if html {
                e.into_html_response()
            } else {
                e.into_response()
            };
        }
    };

    // The press counts whether or not the plan succeeds
    let mut session = req.session;
    session.press(req.trigger);

    match run_plan(&state, req.trigger, req.form, &session, html).await {
        Ok(response) => response,
        Err(e) if html => e.into_html_response(),
        Err(e) => e.into_json_response(Some(session)),
    }
}

async fn run_plan(
    state: &AppState,
    trigger: UiTrigger,
    form: TripForm,
    session: &TripSession,
    html: bool,
) -> Result<Response, AppError> {
    let now = Local::now().naive_local();
    let Some(request) = build_request(&form, trigger, session, now)? else {
        // Nothing to calculate; hand back the updated counts
        let fragment = if session.resolve_mode(trigger).is_some() {
            TripMessageTemplate {
                message: CALCULATE_PROMPT.into(),
                is_error: false,
            }
            .render()
            .map_err(template_error)?
        } else {
            String::new()
        };

        if html {
            return Ok(Html(fragment).into_response());
        }
        let selection = MapSelection {
            origin: form.origin,
            destination: form.destination,
        };
        return Ok(Json(PlanTripResponse {
            html: fragment,
            lines: Vec::new(),
            selected_mode: match trigger {
                UiTrigger::Mode(mode) => Some(mode),
                _ => None,
            },
            summary: None,
            session: *session,
            layers: map_layers(
                None,
                selection.origin_point(),
                selection.destination_point(),
            ),
        })
        .into_response());
    };

    let planner = Planner::new(state.engine.as_ref(), state.ride_hail.as_ref());
    let mut rng = StdRng::from_entropy();
    let summary = planner.plan(&request, &mut rng).await?;

    let fragment = TripSummaryTemplate::from_summary(&summary)
        .render()
        .map_err(template_error)?;

    if html {
        return Ok(Html(fragment).into_response());
    }

    Ok(Json(PlanTripResponse {
        html: fragment,
        lines: summary.lines(),
        selected_mode: Some(summary.mode),
        summary: Some(SummaryResult::from_summary(&summary)),
        session: *session,
        layers: map_layers(
            Some(&summary),
            Some(request.origin),
            Some(request.destination),
        ),
    })
    .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.as_str()),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message.as_str()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.as_str()),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, reason = message, "request failed");
        } else {
            warn!(%status, reason = message, "request rejected");
        }
    }

    /// The error as a result panel fragment.
    pub fn into_html_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let fragment = TripMessageTemplate {
            message: message.to_string(),
            is_error: true,
        }
        .render()
        .unwrap_or_else(|_| message.to_string());
        (status, Html(fragment)).into_response()
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.user_message();
        match e {
            PlanError::InvalidInput(_) | PlanError::IncompleteSelection(_) => {
                AppError::BadRequest { message }
            }
            PlanError::NoItineraryFound { .. } => AppError::NotFound { message },
            PlanError::EngineInvocation(_) => AppError::BadGateway { message },
        }
    }
}

impl AppError {
    /// The error as JSON, with the session the client should adopt.
    pub fn into_json_response(self, session: Option<TripSession>) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let body = Json(ErrorResponse {
            error: message.to_string(),
            session,
        });
        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_json_response(None)
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
