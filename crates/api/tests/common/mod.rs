//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without a TCP listener. The identity collaborator is simulated by
//! injecting `x-user-id` / `x-user-tier` headers.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use projboard_api::config::ServerConfig;
use projboard_api::router::build_app_router;
use projboard_api::state::AppState;
use projboard_db::models::user::CreateUser;
use projboard_db::repositories::UserRepo;

/// Acting user for a request: `(user_id, tier)`.
pub type Identity = (i64, &'static str);

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors production via [`build_app_router`].
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed a user row and return its ID.
pub async fn seed_user(pool: &PgPool, name: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
        },
    )
    .await
    .expect("create user")
    .id
}

/// Send a request with an optional JSON body and optional identity headers.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    identity: Option<Identity>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((user_id, tier)) = identity {
        builder = builder
            .header("x-user-id", user_id.to_string())
            .header("x-user-tier", tier);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::GET, uri, None, identity).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    identity: Option<Identity>,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), identity).await
}

pub async fn post(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::POST, uri, None, identity).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    identity: Option<Identity>,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), identity).await
}

pub async fn delete(app: Router, uri: &str, identity: Option<Identity>) -> Response<Body> {
    send(app, Method::DELETE, uri, None, identity).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal valid create-project payload.
pub fn project_payload(title: &str, company: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "company_name": company,
        "company_address": "1 Main St",
        "company_site": "https://example.org",
        "mission_statement": "Do some good",
        "contact_name": "Dana",
        "contact_position": "Director",
        "contact_email": "dana@example.org",
        "contact_number": "555-0100",
        "contact_hours": "9-5",
        "nonprofit": true
    })
}
