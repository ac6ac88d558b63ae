use crate::config::ServerConfig;
use crate::http;
use crate::middleware::cors::cors_middleware;
use crate::middleware::error_boundary::error_boundary_middleware;
use crate::middleware::request_tracing::request_tracing_middleware;
use crate::middleware::security_headers::security_headers_middleware;
use crate::{AppState, FolderService, NoteService};
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use noteful_store::Database;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

impl AppState {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self::with_config(db, ServerConfig::default())
    }

    /// Builds both services over the same injected database handle.
    #[must_use]
    pub fn with_config(db: Database, config: ServerConfig) -> Self {
        Self {
            folders: FolderService::new(db.clone()),
            notes: NoteService::new(db),
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::landing_handler))
        .route("/api/openapi.json", get(http::handlers::openapi_handler))
        .merge(http::folders::router())
        .merge(http::notes::router())
        .layer(from_fn_with_state(state.clone(), error_boundary_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
