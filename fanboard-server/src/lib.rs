//! fanboard-server library
//!
//! Router construction and shared application state for the Fanboard
//! artist-likes service.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod sse;

use sse::SseBroadcaster;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Fan-out channel for artist update notifications
    pub broadcaster: SseBroadcaster,
    /// Lowercase name of the request header carrying the resolved identity
    pub identity_header: String,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, broadcaster: SseBroadcaster, identity_header: String) -> Self {
        Self {
            db,
            broadcaster,
            identity_header,
        }
    }
}

/// Build application router
///
/// `/api/artists` requires identity; health and the static client do not.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/api/artists",
            get(api::artists::list_artists)
                .post(api::artists::like_artist)
                .delete(api::artists::unlike_artist),
        )
        .merge(api::health::health_routes())
        .route("/", get(api::ui::serve_index))
        .route("/static/app.js", get(api::ui::serve_app_js))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
