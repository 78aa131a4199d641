#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal_macros::dec;
use serde_json::json;

use super::*;
use crate::analyzer::analyze_budget;
use crate::models::{Expenses, Goal};

fn make_budget() -> Budget {
    Budget::new(
        dec!(3000),
        Expenses {
            rent: dec!(1200),
            food: dec!(400),
            transportation: dec!(150),
            utilities: dec!(100),
            entertainment: dec!(200),
            savings: dec!(300),
            other: dec!(150),
        },
        Goal::BigPurchase,
    )
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn analyzer(base_url: &str) -> HttpAnalyzer {
    HttpAnalyzer::new(base_url, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_endpoint_trailing_slash() {
    let a = HttpAnalyzer::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
    assert_eq!(a.endpoint(), "http://localhost:5000/api/analyze");
    let b = HttpAnalyzer::new("http://localhost:5000", Duration::from_secs(1)).unwrap();
    assert_eq!(b.endpoint(), "http://localhost:5000/api/analyze");
}

#[tokio::test]
async fn test_analyze_success_round_trips_budget() {
    let router = Router::new().route(
        "/api/analyze",
        post(|Json(budget): Json<Budget>| async move { Json(analyze_budget(&budget)) }),
    );
    let url = spawn_stub(router).await;

    let result = analyzer(&url).analyze(&make_budget()).await.unwrap();
    assert_eq!(result.goal, Goal::BigPurchase);
    assert_eq!(result.breakdown.len(), 7);
    assert_eq!(result.breakdown[0].category, "Rent");
    assert_eq!(result.breakdown[0].amount, dec!(1200));
}

#[tokio::test]
async fn test_analyze_sends_all_categories() {
    let router = Router::new().route(
        "/api/analyze",
        post(|Json(body): Json<serde_json::Value>| async move {
            let expenses = body["expenses"].as_object().cloned().unwrap_or_default();
            let has_all = [
                "rent",
                "food",
                "transportation",
                "utilities",
                "entertainment",
                "savings",
                "other",
            ]
            .iter()
            .all(|k| expenses.get(*k).is_some_and(|v| v.is_number()));
            if has_all && body["monthly_income"].is_number() && body["goal"] == "big_purchase" {
                (StatusCode::OK, Json(json!({ "breakdown": [], "goal": "big_purchase" })))
            } else {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": "bad payload" })))
            }
        }),
    );
    let url = spawn_stub(router).await;

    let result = analyzer(&url).analyze(&make_budget()).await;
    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn test_analyze_rejected_with_message() {
    let router = Router::new().route(
        "/api/analyze",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid_request", "message": "Income must be positive" })),
            )
        }),
    );
    let url = spawn_stub(router).await;

    let err = analyzer(&url).analyze(&make_budget()).await.unwrap_err();
    assert_eq!(
        err,
        AnalyzerError::Rejected {
            status: 400,
            message: Some("Income must be positive".into()),
        }
    );
    assert_eq!(err.user_message("Failed to analyze budget"), "Income must be positive");
}

#[tokio::test]
async fn test_analyze_rejected_without_message() {
    let router = Router::new().route(
        "/api/analyze",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_stub(router).await;

    let err = analyzer(&url).analyze(&make_budget()).await.unwrap_err();
    assert_eq!(
        err,
        AnalyzerError::Rejected {
            status: 500,
            message: None,
        }
    );
    assert_eq!(err.user_message("Failed to analyze budget"), "Failed to analyze budget");
}

#[tokio::test]
async fn test_analyze_rejected_ignores_payload_shape() {
    // A failing status with a perfectly good result body is still a failure
    let router = Router::new().route(
        "/api/analyze",
        post(|Json(budget): Json<Budget>| async move {
            (StatusCode::SERVICE_UNAVAILABLE, Json(analyze_budget(&budget)))
        }),
    );
    let url = spawn_stub(router).await;

    let err = analyzer(&url).analyze(&make_budget()).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::Rejected { status: 503, message: None }));
}

#[tokio::test]
async fn test_analyze_malformed_success() {
    let router = Router::new().route(
        "/api/analyze",
        post(|| async { Json(json!({ "financial_advice": "no breakdown here" })) }),
    );
    let url = spawn_stub(router).await;

    let err = analyzer(&url).analyze(&make_budget()).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidResponse(_)));
    assert_eq!(err.user_message("Failed to analyze scenario"), "Failed to analyze scenario");
}

#[tokio::test]
async fn test_analyze_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = analyzer(&format!("http://{addr}"))
        .analyze(&make_budget())
        .await
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::Network(_)));
}

// ── server_message ────────────────────────────────────────────

#[test]
fn test_server_message() {
    assert_eq!(
        server_message(r#"{"message": "Chatbot is currently unavailable."}"#),
        Some("Chatbot is currently unavailable.".into())
    );
    assert_eq!(server_message(r#"{"message": ""}"#), None);
    assert_eq!(server_message(r#"{"message": 42}"#), None);
    assert_eq!(server_message(r#"{"error": "x"}"#), None);
    assert_eq!(server_message("<html>502</html>"), None);
    assert_eq!(server_message(""), None);
}
