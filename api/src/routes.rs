//! # JSON data routes
//!
//! The four read-only endpoints served in front of the Dioxus application:
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | GET | `/status-check` | `{status, message, serverTime, clientAddress}` |
//! | GET | `/users` | the users collection |
//! | GET | `/authors` | the authors collection |
//! | GET | `/health` | `{message, time}` or 500 `{error}` |
//!
//! Handlers are stateless; the generated collections are shared read-only
//! through an `Arc`. Route-to-handler mapping must be unique: axum panics at
//! startup if the same method+path is registered twice, so a duplicate can
//! never silently shadow an earlier handler.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::db;
use crate::models::{Author, MockData, User};

/// Body of the `/status-check` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusCheck {
    status: u16,
    message: &'static str,
    server_time: String,
    client_address: Option<String>,
}

/// Body of a successful `/health` response.
#[derive(Debug, Serialize)]
struct Health {
    message: &'static str,
    time: DateTime<Utc>,
}

/// Fixed-shape body for a failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

const INTERNAL_ERROR: ErrorBody = ErrorBody {
    error: "Internal server error",
};

/// Build the data router over the shared collections.
pub fn router(data: Arc<MockData>) -> Router {
    Router::new()
        .route("/status-check", get(status_check))
        .route("/users", get(users))
        .route("/authors", get(authors))
        .route("/health", get(health))
        .with_state(data)
}

/// `GET /status-check` — always succeeds. Reports the time of handling (not
/// cached) and the forwarded client address when a proxy supplies one.
async fn status_check(headers: HeaderMap) -> Json<StatusCheck> {
    let client_address = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    Json(StatusCheck {
        status: 200,
        message: "Server is up and running",
        server_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        client_address,
    })
}

/// `GET /users` — the full users collection, in index order.
async fn users(State(data): State<Arc<MockData>>) -> Json<Vec<User>> {
    Json(data.users.clone())
}

/// `GET /authors` — the full authors collection, in index order.
async fn authors(State(data): State<Arc<MockData>>) -> Json<Vec<Author>> {
    Json(data.authors.clone())
}

/// `GET /health` — one liveness round trip against the backing store per
/// call. Any pool or query failure becomes the fixed-shape 500 body.
async fn health() -> Response {
    match db::probe_time().await {
        Ok(time) => Json(Health {
            message: "Hello from the backend! New data added is here",
            time,
        })
        .into_response(),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(INTERNAL_ERROR)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(Arc::new(MockData::generate()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn users_returns_the_generated_collection() {
        let (status, body) = get_json(test_router(), "/users").await;
        assert_eq!(status, StatusCode::OK);

        let expected = serde_json::to_value(crate::models::mock_users(20)).unwrap();
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn users_is_idempotent_across_calls() {
        let app = test_router();
        let (_, first) = get_json(app.clone(), "/users").await;
        let (_, second) = get_json(app, "/users").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn authors_returns_ten_records_with_expected_index_three() {
        let (status, body) = get_json(test_router(), "/authors").await;
        assert_eq!(status, StatusCode::OK);

        let authors = body.as_array().unwrap();
        assert_eq!(authors.len(), 10);
        assert_eq!(
            authors[3],
            serde_json::json!({
                "id": 3,
                "name": "Author 4",
                "bio": "This is a short bio of Author 4.",
                "image": "https://via.placeholder.com/600/771796",
                "location": "Location 4",
            })
        );
    }

    #[tokio::test]
    async fn status_check_echoes_the_forwarding_header() {
        let response = test_router()
            .oneshot(
                Request::get("/status-check")
                    .header("X-Forwarded-For", "203.0.113.9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 200);
        assert_eq!(body["message"], "Server is up and running");
        assert_eq!(body["clientAddress"], "203.0.113.9");
        assert!(body["serverTime"].is_string());
    }

    #[tokio::test]
    async fn status_check_reports_null_without_forwarding_header() {
        let (status, body) = get_json(test_router(), "/status-check").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["clientAddress"].is_null());
    }

    #[tokio::test]
    async fn health_returns_error_body_when_store_is_unreachable() {
        // Point the probe at a port nothing listens on.
        std::env::set_var("DATABASE_URL", "postgres://127.0.0.1:1/unreachable");

        let (status, body) = get_json(test_router(), "/health").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
