//! End-to-end tests for the HTTP API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`.

mod support;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use spacex_dash::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::from_dataset(support::example_dataset()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 3);
}

#[tokio::test]
async fn test_index_page() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/v1/layout"));
    // The page honours the layout's dropdown search flag and slider marks
    assert!(html.contains("c.searchable"));
    assert!(html.contains("c.marks"));
    // and drops chart responses superseded by a newer request
    assert!(html.contains("appliedSeq[id] ?? 0) > seq"));
}

#[tokio::test]
async fn test_layout() {
    let (status, body) = get("/v1/layout").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "SpaceX Launch Records Dashboard");

    let components = body["components"].as_array().unwrap();
    assert_eq!(components[0]["type"], "dropdown");
    assert_eq!(components[0]["id"], "site-dropdown");
    assert_eq!(components[0]["value"], "ALL");
    assert_eq!(components[0]["searchable"], true);
    assert_eq!(components[3]["type"], "range_slider");
    assert_eq!(components[3]["value"], json!([500.0, 9000.0]));
    assert_eq!(
        components[3]["marks"],
        json!([0.0, 2500.0, 5000.0, 7500.0, 10000.0])
    );
}

#[tokio::test]
async fn test_options() {
    let (status, body) = get("/v1/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "label": "All Sites", "value": "ALL" },
            { "label": "A", "value": "A" },
            { "label": "B", "value": "B" },
        ])
    );
}

#[tokio::test]
async fn test_dataset_summary() {
    let (status, body) = get("/v1/dataset/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"], 3);
    assert_eq!(body["min_payload"], 500.0);
    assert_eq!(body["max_payload"], 9000.0);
    assert_eq!(body["sites"], json!(["A", "B"]));
}

#[tokio::test]
async fn test_pie_chart_all_sites() {
    let (status, body) = get("/v1/charts/success-pie-chart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chart"]["type"], "pie");
    assert_eq!(body["chart"]["title"], "Total Success Launches by Site");
    assert_eq!(body["figure"]["data"][0]["labels"], json!(["A", "B"]));
    assert_eq!(body["figure"]["data"][0]["values"], json!([1, 1]));
}

#[tokio::test]
async fn test_pie_chart_single_site() {
    let (status, body) = get("/v1/charts/success-pie-chart?site=A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chart"]["title"], "Total Success Launches for Site A");
    assert_eq!(body["chart"]["slices"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_scatter_chart_range() {
    let (status, body) =
        get("/v1/charts/success-payload-scatter-chart?payload_min=0&payload_max=4000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chart"]["type"], "scatter");
    let points = body["chart"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["launch_site"], "A");
    assert_eq!(points[1]["launch_site"], "B");
}

#[tokio::test]
async fn test_scatter_chart_reversed_range_is_empty() {
    let (status, body) =
        get("/v1/charts/success-payload-scatter-chart?payload_min=9000&payload_max=500").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["chart"]["points"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_initial_render() {
    let (status, body) = post_json("/v1/update", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let outputs = body["outputs"].as_object().unwrap();
    assert_eq!(outputs.len(), 2);
    assert!(outputs.contains_key("success-pie-chart"));
    assert!(outputs.contains_key("success-payload-scatter-chart"));
}

#[tokio::test]
async fn test_update_slider_change() {
    let (status, body) = post_json(
        "/v1/update",
        json!({
            "changed_inputs": ["payload-slider"],
            "inputs": { "site-dropdown": "A", "payload-slider": [0, 10000] },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let outputs = body["outputs"].as_object().unwrap();
    assert_eq!(outputs.len(), 1);
    let scatter = &outputs["success-payload-scatter-chart"]["chart"];
    assert_eq!(
        scatter["title"],
        "Correlation between Payload and Success for Site A"
    );
    assert_eq!(scatter["points"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_unknown_input() {
    let (status, body) = post_json(
        "/v1/update",
        json!({ "changed_inputs": ["color-picker"] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_INPUT");
}

#[tokio::test]
async fn test_update_invalid_slider_value() {
    let (status, body) = post_json(
        "/v1/update",
        json!({
            "changed_inputs": ["payload-slider"],
            "inputs": { "payload-slider": "wide" },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"], "payload-slider");
}
