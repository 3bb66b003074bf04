use super::*;

use serde_json::{Value, json};

use crate::config::MapView;
use crate::engine::{Engine, MockEngine};
use crate::planner::{PlannerConfig, RideHailModel};

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn(engine: Engine) -> String {
    let ride_hail = RideHailModel::new(&PlannerConfig::default()).unwrap();
    let app = create_router(AppState::new(engine, ride_hail, MapView::default()), "static");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_with_mock_data() -> String {
    spawn(Engine::Mock(MockEngine::new("data/mock_engine").unwrap())).await
}

fn form() -> Value {
    json!({
        "origin": "35.9940, -78.8986",
        "destination": "36.0014, -78.9382",
        "departure": "now",
        "optimization": "total_time"
    })
}

async fn post_json(url: &str, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_and_pages() {
    let base = spawn_with_mock_data().await;

    let health = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");

    let index = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    let body = index.text().await.unwrap();
    assert!(body.contains("calculate-button"));
    assert!(body.contains("mode-shared-ride"));

    let about = reqwest::get(format!("{base}/about")).await.unwrap();
    assert_eq!(about.status(), StatusCode::OK);

    let missing = reqwest::get(format!("{base}/nowhere")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(missing.text().await.unwrap().contains("/nowhere"));
}

#[tokio::test]
async fn calculate_plans_most_pressed_mode() {
    let base = spawn_with_mock_data().await;

    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({
            "session": {"walk": 2, "car": 1},
            "trigger": "calculate-button",
            "form": form(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["selected_mode"], "WALK");
    assert_eq!(body["session"]["calculate"], 1);
    assert_eq!(body["session"]["walk"], 2);
    assert!(
        body["lines"][0]
            .as_str()
            .unwrap()
            .starts_with("Calculated Travel Time:")
    );
    assert_eq!(body["layers"]["type"], "FeatureCollection");

    let layers: Vec<&str> = body["layers"]["features"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["properties"]["layer"].as_str())
        .collect();
    assert_eq!(layers, vec!["route", "origin", "destination"]);
}

#[tokio::test]
async fn transit_plan_draws_walk_transit_walk() {
    let base = spawn_with_mock_data().await;

    let body: Value = post_json(
        &format!("{base}/trip/plan"),
        &json!({
            "session": {"calculate": 1},
            "trigger": "mode-transit",
            "form": form(),
        }),
    )
    .await
    .json()
    .await
    .unwrap();

    assert_eq!(body["selected_mode"], "TRANSIT");
    assert_eq!(body["session"]["transit"], 1);
    assert!(body["summary"]["num_transfers"].is_i64());

    let layers: Vec<&str> = body["layers"]["features"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["properties"]["layer"].as_str())
        .collect();
    assert_eq!(
        layers,
        vec!["walk", "transit", "walk", "origin", "destination"]
    );
}

#[tokio::test]
async fn mode_press_before_calculate_only_counts() {
    let base = spawn_with_mock_data().await;

    let body: Value = post_json(
        &format!("{base}/trip/plan"),
        &json!({"trigger": "mode-bike", "form": form()}),
    )
    .await
    .json()
    .await
    .unwrap();

    assert_eq!(body["session"]["bicycle"], 1);
    assert_eq!(body["lines"].as_array().unwrap().len(), 0);
    assert!(body.get("summary").is_none());
    assert!(body["html"].as_str().unwrap().contains("Calculate Travel Time"));
}

#[tokio::test]
async fn missing_destination_is_bad_request() {
    let base = spawn_with_mock_data().await;

    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({
            "session": {"calculate": 1},
            "trigger": "mode-car",
            "form": {"origin": "35.9940, -78.8986"},
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("destination"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let base = spawn_with_mock_data().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/trip/plan"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("session").is_none());
}

#[tokio::test]
async fn failed_plans_still_count_the_press() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy("data/mock_engine/CAR.json", dir.path().join("CAR.json")).unwrap();
    let base = spawn(Engine::Mock(MockEngine::new(dir.path()).unwrap())).await;

    // No BICYCLE data: the engine call fails but the press is kept
    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({"session": {"calculate": 1}, "trigger": "mode-bike", "form": form()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["session"]["bicycle"], 1);
    assert_eq!(body["session"]["calculate"], 1);

    // A first Calculate without a destination still opens the gate
    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({"trigger": "calculate-button", "form": {"origin": "35.9940, -78.8986"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let session = response.json::<Value>().await.unwrap()["session"].clone();
    assert_eq!(session["calculate"], 1);

    // So the next mode press plans straight away
    let body: Value = post_json(
        &format!("{base}/trip/plan"),
        &json!({"session": session, "trigger": "mode-car", "form": form()}),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(body["selected_mode"], "CAR");
    assert!(body.get("summary").is_some_and(|s| !s.is_null()));
    assert_eq!(body["session"]["car"], 1);
}

#[tokio::test]
async fn html_clients_get_fragments() {
    let base = spawn_with_mock_data().await;
    let client = reqwest::Client::new();

    let ok = client
        .post(format!("{base}/trip/plan"))
        .header("accept", "text/html")
        .json(&json!({"trigger": "calculate-button", "form": form()}))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    let html = ok.text().await.unwrap();
    assert!(html.contains("trip-summary"));
    assert!(!html.contains("<html"));

    let bad = client
        .post(format!("{base}/trip/plan"))
        .header("accept", "text/html")
        .json(&json!({"trigger": "calculate-button", "form": {"origin": "here", "destination": "there"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert!(bad.text().await.unwrap().contains("trip-message error"));
}

#[tokio::test]
async fn engine_failures_are_bad_gateway() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CAR.json"), r#"{"legs": []}"#).unwrap();
    let base = spawn(Engine::Mock(MockEngine::new(dir.path()).unwrap())).await;

    // No WALK data: the mock engine answers 404, which is an engine failure
    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({"session": {"calculate": 1}, "trigger": "mode-walk", "form": form()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    // Empty CAR table: nothing found
    let response = post_json(
        &format!("{base}/trip/plan"),
        &json!({"session": {"calculate": 1}, "trigger": "mode-car", "form": form()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("No route found"));
}

#[tokio::test]
async fn map_clicks_cycle_through_selection() {
    let base = spawn_with_mock_data().await;
    let url = format!("{base}/map/click");

    let first: Value = post_json(&url, &json!({"lat": 35.99, "lon": -78.9}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first["target"], "origin");
    assert_eq!(first["selection"]["origin"], "35.99, -78.9");

    let second: Value = post_json(
        &url,
        &json!({"lat": 36.0, "lon": -78.93, "selection": first["selection"]}),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(second["target"], "destination");
    assert_eq!(second["layers"]["features"].as_array().unwrap().len(), 2);

    let third: Value = post_json(
        &url,
        &json!({"lat": 35.95, "lon": -78.88, "selection": second["selection"]}),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(third["target"], "restarted_origin");
    assert_eq!(third["selection"]["origin"], "35.95, -78.88");
    assert_eq!(third["selection"]["destination"], "");
}

#[tokio::test]
async fn map_click_out_of_range_is_rejected() {
    let base = spawn_with_mock_data().await;

    let response = post_json(&format!("{base}/map/click"), &json!({"lat": 95.0, "lon": 0.0})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn start_over_clears_everything() {
    let base = spawn_with_mock_data().await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/session/reset"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["session"]["calculate"], 0);
    assert_eq!(body["selection"]["origin"], "");
    assert!(body["layers"]["features"].as_array().unwrap().is_empty());
}
