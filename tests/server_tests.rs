//! HTTP API tests against the router, without network or middleware.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use ratio_matcher::web::server::{api_router, AppState};
use ratio_matcher::{MatchingConfig, MatchingEngine};

fn app(max_iterations: u64) -> Router {
    api_router(Arc::new(AppState {
        engine: MatchingEngine::with_config(MatchingConfig { max_iterations }),
    }))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/match")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_match_linear_search() {
    let (status, json) = post_json(
        app(1_000_000),
        r#"{"a": 3.14159265359, "b": 1, "threshold": 0.05, "onlyClosest": false,
            "minComplexity": 0, "maxComplexity": 30, "primitiveOnly": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iterationLimitReached"], false);
    assert_eq!(json["processingInfo"]["algorithm"], "linear_search");
    assert_eq!(json["processingInfo"]["totalMatches"], 1);
    assert_eq!(json["results"][0]["countA"], 7);
    assert_eq!(json["results"][0]["countB"], 22);
    assert_eq!(json["results"][0]["complexity"], 29);
}

#[tokio::test]
async fn test_match_continued_fraction() {
    let (status, json) = post_json(
        app(1_000_000),
        r#"{"a": 2, "b": 1, "onlyClosest": true, "maxComplexity": 10}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["processingInfo"]["algorithm"], "continued_fraction");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["isBestYet"], true);
    assert_eq!(results[0]["difference"], 0.0);
}

#[tokio::test]
async fn test_match_sorted_and_truncated() {
    let (status, json) = post_json(
        app(1_000_000),
        r#"{"a": 1.5, "b": 1, "threshold": 0.01, "maxComplexity": 100,
            "sortBy": "quality", "displayLimit": 3}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["processingInfo"]["totalMatches"], 20);
    assert_eq!(json["processingInfo"]["displayLimitReached"], true);
    assert_eq!(json["processingInfo"]["sortBy"], "quality");
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_match_reports_iteration_limit() {
    let (status, json) = post_json(
        app(1_000),
        r#"{"a": 1, "b": 1.0000001, "threshold": 1e-12, "maxComplexity": 1000000000000}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iterationLimitReached"], true);
    assert_eq!(json["processingInfo"]["maxIterations"], 1_000);
}

#[tokio::test]
async fn test_match_rejects_invalid_request() {
    let (status, json) = post_json(app(1_000), r#"{"a": -1, "b": 1}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorType"], "not_positive");
    assert_eq!(json["error"], "A must be greater than zero, got -1");

    let (status, json) = post_json(
        app(1_000),
        r#"{"a": 1, "b": 2, "minComplexity": 10, "maxComplexity": 10}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorType"], "complexity_range_inverted");
}

#[tokio::test]
async fn test_match_rejects_malformed_json() {
    let (status, json) = post_json(app(1_000), r#"{"a": 1, "b": "#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorType"], "invalid_request");
    assert!(json["details"].is_null());

    let (status, json) = post_json(app(1_000), r#"{"b": 1}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errorType"], "invalid_request");
}

#[tokio::test]
async fn test_health_and_index() {
    let response = app(1_000)
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");

    let response = app(1_000)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/api/match"));
}
