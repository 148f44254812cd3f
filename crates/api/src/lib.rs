//! # Slotbook API
//!
//! The API crate provides the web server for the slotbook appointment
//! service. It exposes the end-user surface (browse free slots, book one)
//! and the admin surface (batch creation, deletion, support assignment,
//! follow-up tracking) over the shared optimistic session.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like the admin access
//!   gate and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; all state lives in the
//! [`slotbook_store::session::Agenda`] behind a single mutex, matching the
//! one-logical-owner session model.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for the admin gate and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono_tz::Tz;
use eyre::Result;
use slotbook_store::session::Agenda;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
///
/// The agenda is the single logical owner of the local slot view; the mutex
/// serializes mutations so a session never races against itself.
pub struct ApiState {
    pub agenda: Mutex<Agenda>,
    /// Plain shared-secret admin code (dev setups).
    pub admin_access_code: Option<String>,
    /// Argon2 PHC hash of the admin code; takes precedence over the plain
    /// code when both are set.
    pub admin_access_hash: Option<String>,
    /// Timezone used for calendar-day grouping and the assistant digest.
    pub display_tz: Tz,
}

/// Builds the application router over the given state. Shared between the
/// server and the integration tests.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // End-user slot browsing and booking
        .merge(routes::slots::routes())
        // Admin slot management
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and session.
///
/// Initializes logging, builds the router, applies CORS and timeout
/// layers, and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, agenda: Agenda) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        agenda: Mutex::new(agenda),
        admin_access_code: config.admin_access_code.clone(),
        admin_access_hash: config.admin_access_hash.clone(),
        display_tz: config.display_tz,
    });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
