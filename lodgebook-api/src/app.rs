/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use lodgebook_api::{app::AppState, config::Config};
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = lodgebook_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                        # Health check
/// └── /v1/                           # API v1 (versioned)
///     ├── /rooms/                    # Rooms, beds, bills
///     │   ├── POST /                 # Create room
///     │   ├── GET  /                 # List rooms
///     │   ├── GET  /:id              # Room detail (beds + bills)
///     │   ├── POST /:id/beds         # Create bed in room
///     │   └── POST /:id/bills        # Upload electricity bill
///     └── /people/                   # Tenants, dues, payments
///         ├── POST /                 # Occupy bed / create tenant
///         ├── GET  /                 # List tenants
///         ├── GET  /:id              # Tenant detail (payments)
///         ├── GET  /:id/due          # Due statement
///         ├── GET  /:id/payments     # Payment history
///         ├── POST /:id/payments     # Record payment
///         └── POST /:id/payments/full # Pay full amount due
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Rooms, beds, bills
    let room_routes = Router::new()
        .route("/", post(routes::rooms::create_room))
        .route("/", get(routes::rooms::list_rooms))
        .route("/:id", get(routes::rooms::room_detail))
        .route("/:id/beds", post(routes::rooms::create_bed))
        .route("/:id/bills", post(routes::rooms::upload_bill));

    // Tenants, dues, payments
    let people_routes = Router::new()
        .route("/", post(routes::people::create_person))
        .route("/", get(routes::people::list_people))
        .route("/:id", get(routes::people::person_detail))
        .route("/:id/due", get(routes::people::due_statement))
        .route("/:id/payments", get(routes::people::list_payments))
        .route("/:id/payments", post(routes::people::record_payment))
        .route("/:id/payments/full", post(routes::people::pay_full));

    // Build complete v1 API
    let v1_routes = Router::new()
        .nest("/rooms", room_routes)
        .nest("/people", people_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
