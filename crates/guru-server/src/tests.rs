//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(uri: &str, body: serde_json::Value) -> axum::response::Response {
    setup_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

// ========== Health Tests ==========

#[tokio::test]
async fn test_home() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Financial Guru ML Server! 🐍");
}

// ========== Timeline API Tests ==========

#[tokio::test]
async fn test_timeline_peak_day() {
    let response = post_json(
        "/timeline",
        json!({
            "expenses": [
                { "description": "Groceries", "amount": 50, "date": "2024-03-04", "category": "Food" },
                { "description": "Fuel", "amount": 70, "date": "2024-03-11", "category": "Travel" }
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["insight"], "💡 You typically spend the most on Mondays.");
}

#[tokio::test]
async fn test_timeline_empty_list() {
    let response = post_json("/timeline", json!({ "expenses": [] })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["insight"], "Not enough data for timeline analysis yet.");
}

#[tokio::test]
async fn test_timeline_no_valid_dates() {
    let response = post_json(
        "/timeline",
        json!({ "expenses": [ { "amount": 10, "date": "someday" } ] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(
        json["insight"],
        "No valid dates found for timeline analysis."
    );
}

#[tokio::test]
async fn test_timeline_missing_expenses() {
    let response = post_json("/timeline", json!({ "records": [] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Missing 'expenses' data");
}

#[tokio::test]
async fn test_timeline_null_expenses_is_missing() {
    let response = post_json("/timeline", json!({ "expenses": null })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_timeline_missing_amount_column() {
    let response = post_json(
        "/timeline",
        json!({ "expenses": [ { "description": "Rent", "date": "2024-03-04" } ] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Missing 'amount' column in expense data");
}

#[tokio::test]
async fn test_timeline_malformed_records_are_server_errors() {
    let response = post_json("/timeline", json!({ "expenses": "not a list" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Timeline analysis failed: "));
}

#[tokio::test]
async fn test_timeline_invalid_json_body() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/timeline")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Timeline analysis failed: "));
}

#[tokio::test]
async fn test_timeline_non_object_body() {
    let response = post_json("/timeline", json!([1, 2, 3])).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ========== Tags API Tests ==========

#[tokio::test]
async fn test_tags_price_increase() {
    let response = post_json(
        "/tags",
        json!({
            "new_expense": { "description": "coffee", "amount": 150 },
            "past_expenses": [
                { "description": "Coffee", "amount": 100, "date": "2024-01-01" }
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["tags"], json!(["⚠️ 50% price increase"]));
}

#[tokio::test]
async fn test_tags_price_increase_and_similar() {
    let response = post_json(
        "/tags",
        json!({
            "new_expense": { "description": "Coffee", "amount": 130, "category": "Food" },
            "past_expenses": [
                { "description": "coffee", "amount": 100, "date": "2024-01-01", "category": "Food" },
                { "description": "Pizza", "amount": 300, "date": "2024-01-02", "category": "Food" }
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(
        json["tags"],
        json!(["⚠️ 30% price increase", "💡 Similar: Pizza (₹300)"])
    );
}

#[tokio::test]
async fn test_tags_empty_past_expenses() {
    let response = post_json(
        "/tags",
        json!({
            "new_expense": { "description": "Coffee", "amount": 150 },
            "past_expenses": []
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["tags"], json!([]));
}

#[tokio::test]
async fn test_tags_missing_fields() {
    for body in [
        json!({ "new_expense": { "description": "Coffee" } }),
        json!({ "past_expenses": [] }),
        json!({ "new_expense": null, "past_expenses": [] }),
    ] {
        let response = post_json("/tags", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_body_json(response).await;
        assert_eq!(
            json["error"],
            "Missing 'new_expense' or 'past_expenses' data"
        );
    }
}

#[tokio::test]
async fn test_tags_malformed_new_expense() {
    let response = post_json(
        "/tags",
        json!({ "new_expense": 42, "past_expenses": [] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Tag analysis failed: "));
}

// ========== CORS Tests ==========

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "https://guru.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let app = create_router(ServerConfig {
        allowed_origins: vec!["https://guru.example.com".to_string()],
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "https://guru.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://guru.example.com"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

// ========== Helper Tests ==========

#[test]
fn test_parse_allowed_origins() {
    assert_eq!(
        parse_allowed_origins(" https://a.example.com, ,https://b.example.com "),
        vec!["https://a.example.com", "https://b.example.com"]
    );
    assert!(parse_allowed_origins("").is_empty());
    assert_eq!(parse_allowed_origins("bad\norigin,ok"), vec!["ok"]);
}

#[test]
fn test_app_error_mapping() {
    let err = AppError::analysis("Timeline", guru_core::Error::missing_data("expenses"));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Missing 'expenses' data");

    let err = AppError::analysis(
        "Tag",
        guru_core::Error::InvalidData("bad record".to_string()),
    );
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "Tag analysis failed: Invalid data: bad record");
}
