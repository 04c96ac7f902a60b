use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use household_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_test_router() -> Router {
    let config = Config::from_env().unwrap();
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn default_household_plan() {
    let (status, plan) = post_json(
        build_test_router(),
        "/api/v1/allocation",
        json!({"age": 30, "risk": 5, "familyMembers": 3, "features": [], "eduPriority": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["familyMembers"], 3);
    assert_close(&plan["cashPct"], 0.1);
    assert_close(&plan["fixedIncomePct"], 0.4);
    assert_close(&plan["equityPct"], 0.45);
    assert_close(&plan["insurancePct"], 0.7);
    assert_close(&plan["totalWeight"], 1.65);
}

#[tokio::test]
async fn missing_fields_take_defaults_and_elders_halve_fixed_income() {
    let (status, plan) = post_json(
        build_test_router(),
        "/api/v1/allocation",
        json!({"features": ["dependent_elders"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&plan["fixedIncomePct"], 0.2);
    assert_close(&plan["equityPct"], 0.45);
}

#[tokio::test]
async fn out_of_range_risk_is_a_bad_request() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/v1/allocation",
        json!({"risk": 11}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("'risk' must be between 1 and 10"));
}

#[tokio::test]
async fn unknown_feature_is_a_bad_request() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/v1/allocation",
        json!({"features": ["yacht"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("yacht"));
}

async fn post_raw(uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn negative_risk_is_a_json_bad_request() {
    let (status, body) = post_raw("/api/v1/allocation", r#"{"risk": -1}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("risk"));
}

#[tokio::test]
async fn non_numeric_risk_is_a_json_bad_request() {
    let (status, body) = post_raw("/api/v1/allocation/chart", r#"{"risk": "high"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn malformed_json_is_a_json_bad_request() {
    let (status, body) = post_raw("/api/v1/allocation", r#"{"risk": 5"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn chart_json_lists_slices_in_order() {
    let (status, chart) = post_json(
        build_test_router(),
        "/api/v1/allocation/chart",
        json!({"familyMembers": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["title"], "4-person household allocation plan");
    assert_close(&chart["hole"], 0.3);
    let labels: Vec<&str> = chart["slices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Cash", "Fixed income", "Equity", "Insurance"]);
    assert_close(&chart["slices"][3]["sharePct"], 42.4);
}

#[tokio::test]
async fn chart_svg_accepts_repeated_features() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/allocation/chart.svg?risk=2&familyMembers=2&features=mortgage&features=dependent_elders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml; charset=utf-8"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let svg = String::from_utf8(body.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("2-person household allocation plan"));
    assert_eq!(svg.matches("<path").count(), 4);
}

#[tokio::test]
async fn chart_svg_rejects_bad_numbers() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/allocation/chart.svg?eduPriority=lots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_is_not_implemented() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/allocation/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Exporting plans is not available yet");
}

#[tokio::test]
async fn openapi_document_lists_allocation_paths() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/v1/allocation"].is_object());
    assert!(doc["paths"]["/api/v1/allocation/chart.svg"].is_object());
}
