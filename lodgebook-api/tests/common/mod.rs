/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database setup (no external services required)
/// - Router construction over the test database
/// - JSON request/response helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use lodgebook_api::app::{build_router, AppState};
use lodgebook_api::config::{ApiConfig, Config, DatabaseConfig as ApiDatabaseConfig};
use lodgebook_shared::db::migrations::run_migrations;
use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
use sqlx::SqlitePool;
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        // In-memory SQLite is per-connection; the pool is pinned to one
        // connection so every request sees the same schema.
        let db = create_pool(DatabaseConfig::in_memory()).await?;
        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: ApiDatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Sends a JSON request through the router and parses the JSON response
pub async fn request(
    ctx: &TestContext,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = ctx
        .app
        .clone()
        .call(request)
        .await
        .expect("Request should not fail at the transport level");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            panic!(
                "Response was not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&bytes)
            )
        })
    };

    (status, json)
}

/// POST helper returning the parsed body, asserting 200 OK
pub async fn post_ok(ctx: &TestContext, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let (status, json) = request(ctx, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "POST {} failed: {}", uri, json);
    json
}

/// GET helper returning the parsed body, asserting 200 OK
pub async fn get_ok(ctx: &TestContext, uri: &str) -> serde_json::Value {
    let (status, json) = request(ctx, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {} failed: {}", uri, json);
    json
}
