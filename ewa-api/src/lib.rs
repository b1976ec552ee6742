//! ewa-api library - E-Waste Analyzer HTTP service
//!
//! - `POST /submit` classification gateway
//! - `GET /stream` streaming explanation relay (SSE)
//! - `GET /health`, `GET /api/buildinfo`
//!
//! Both external services sit behind traits ([`classify::Classifier`],
//! [`relay::Generator`]) so the router can be driven with test doubles.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use ewa_common::DisposalDirectory;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod classify;
pub mod error;
pub mod relay;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
///
/// Holds only immutable data and stateless clients; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// External image classifier
    pub classifier: Arc<dyn classify::Classifier>,
    /// External generative-text service
    pub generator: Arc<dyn relay::Generator>,
    /// Disposal reference data
    pub directory: Arc<DisposalDirectory>,
}

impl AppState {
    /// Create application state with the built-in disposal tables
    pub fn new(
        classifier: Arc<dyn classify::Classifier>,
        generator: Arc<dyn relay::Generator>,
    ) -> Self {
        Self::with_directory(
            classifier,
            generator,
            Arc::new(DisposalDirectory::builtin().clone()),
        )
    }

    pub fn with_directory(
        classifier: Arc<dyn classify::Classifier>,
        generator: Arc<dyn relay::Generator>,
        directory: Arc<DisposalDirectory>,
    ) -> Self {
        Self {
            classifier,
            generator,
            directory,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // Upload size is enforced by validation, not by the transport
        .route(
            "/submit",
            post(api::submit_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/stream", get(api::stream_explanation))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser front end is served from another origin
        .layer(CorsLayer::permissive())
}
