// ABOUTME: Integration tests for the dashboard HTTP surface
// ABOUTME: Drives the assembled router end to end, covering pages, prediction, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::test_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn valid_form() -> Value {
    json!({
        "steps": "10000",
        "heart_rate": "75",
        "weight": "155",
        "body_fat": "20",
        "sleep": "8",
        "pace_min": "8",
        "pace_sec": "30"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router(74.0).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "runwithit-server");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = test_router(74.0).oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_home_page_renders_predictor() {
    let response = test_router(74.0).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Run With It!"));
    assert!(html.contains("id=\"steps\""));
    assert!(html.contains("Your predicted running time"));
}

#[tokio::test]
async fn test_about_page() {
    let response = test_router(74.0).oneshot(get("/page-2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("About Me"));
    assert!(html.contains("LinkedIn"));
}

#[tokio::test]
async fn test_insights_page() {
    let response = test_router(74.0).oneshot(get("/page-3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Generate Insights!"));
    assert!(html.contains("Metric Pair"));
    assert!(html.contains(".embed"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_home() {
    let response = test_router(74.0)
        .oneshot(get("/no-such-page"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Your predicted running time"));
}

#[tokio::test]
async fn test_predict_minutes_form() {
    // Raw 74 at 8:30 pace: adjusted 59, minutes form, 6.9 miles
    let response = test_router(74.0)
        .oneshot(post_json("/api/predict", &valid_form()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["duration"], "59 minutes");
    assert_eq!(body["distance"], "At your pace, that will be: 6.9 miles");
    assert_eq!(body["total_minutes"], 59);
    assert!((body["distance_miles"].as_f64().unwrap() - 6.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_predict_hours_form() {
    // Raw 135 at 7:00 pace: adjusted 120, plural hours, 17.1 miles
    let mut form = valid_form();
    form["pace_min"] = json!("7");
    form["pace_sec"] = json!("0");

    let response = test_router(135.0)
        .oneshot(post_json("/api/predict", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["duration"], "2 hours and 0 minutes");
    assert_eq!(body["hours"], 2);
    assert_eq!(body["minutes"], 0);
    assert!((body["distance_miles"].as_f64().unwrap() - 17.1).abs() < 1e-9);
}

#[tokio::test]
async fn test_predict_singular_hour() {
    let response = test_router(90.0)
        .oneshot(post_json("/api/predict", &valid_form()))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["duration"], "1 hour and 15 minutes");
}

#[tokio::test]
async fn test_predict_rejects_non_numeric_input() {
    let mut form = valid_form();
    form["weight"] = json!("heavy");

    let response = test_router(74.0)
        .oneshot(post_json("/api/predict", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
    assert_eq!(body["error"]["field"], "weight");
}

#[tokio::test]
async fn test_predict_rejects_missing_field() {
    let mut form = valid_form();
    form["sleep"] = json!("");

    let response = test_router(74.0)
        .oneshot(post_json("/api/predict", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_predict_zero_pace_is_explicit_error() {
    let mut form = valid_form();
    form["pace_min"] = json!("0");
    form["pace_sec"] = json!("0");

    let response = test_router(74.0)
        .oneshot(post_json("/api/predict", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "DIVISION_UNDEFINED");
}

#[tokio::test]
async fn test_insights_table_endpoint() {
    let response = test_router(74.0)
        .oneshot(get("/api/insights/table"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["columns"][0], "Metric Pair");
    assert_eq!(body["total_rows"], 2);
    assert_eq!(body["rows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_chart_catalog_endpoint() {
    let response = test_router(74.0)
        .oneshot(get("/api/insights/charts"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["period"], "daily");
    assert!(entries[0]["url"].as_str().unwrap().contains(".embed"));
}

#[tokio::test]
async fn test_chart_by_period() {
    let response = test_router(74.0)
        .oneshot(get("/api/insights/charts/weekly"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["period"], "weekly");
    assert_eq!(body["label"], "Weekly");
}

#[tokio::test]
async fn test_chart_unknown_period_is_404() {
    let response = test_router(74.0)
        .oneshot(get("/api/insights/charts/yearly"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
