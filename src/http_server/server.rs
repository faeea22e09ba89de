//! # HTTP Server
//!
//! Combines the resource routers into one axum application.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::course_routes::course_routes;
use super::enrollment_routes::enrollment_routes;
use super::observability_routes::health_routes;
use super::student_routes::student_routes;
use crate::api::ApiError;
use crate::storage::Store;

/// State shared by every resource route
pub struct ApiState {
    pub store: Store,
}

impl ApiState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// HTTP server for the course API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with default configuration
    pub fn new(store: Store) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a server over `store` with custom configuration
    pub fn with_config(store: Store, config: HttpServerConfig) -> Self {
        let router = build_router(store, &config);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "course API listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Build the full router: resource routes under `/api`, health at the root.
pub fn build_router(store: Store, config: &HttpServerConfig) -> Router {
    let state = Arc::new(ApiState::new(store));

    let api = Router::new()
        .merge(course_routes(state.clone()))
        .merge(student_routes(state.clone()))
        .merge(enrollment_routes(state));

    Router::new()
        .merge(health_routes())
        .nest("/api", api)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Not Found")
}
