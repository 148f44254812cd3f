//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the slotbook
//! API server. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `STORE_URL`: Base URL of the remote slot store; when unset the server
//!   runs against an in-memory store (dev mode)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `ADMIN_ACCESS_CODE`: Plain shared-secret code for the admin gate
//! - `ADMIN_ACCESS_HASH`: Argon2 hash of the admin code; preferred over the
//!   plain code when both are present
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `DISPLAY_TZ`: Timezone for calendar-day grouping (default:
//!   "America/Bogota")

use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the slotbook API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Base URL of the remote slot store (optional; in-memory fallback)
    pub store_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Plain admin access code (optional)
    pub admin_access_code: Option<String>,

    /// Argon2 hash of the admin access code (optional)
    pub admin_access_hash: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Display timezone for day grouping and the assistant digest
    pub display_tz: Tz,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables, with sensible
    /// defaults where possible.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` cannot be parsed as a u16 or
    /// `DISPLAY_TZ` is not a known timezone name.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Remote store settings
        let store_url = env::var("STORE_URL").ok();

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Admin gate settings
        let admin_access_code = env::var("ADMIN_ACCESS_CODE").ok();
        let admin_access_hash = env::var("ADMIN_ACCESS_HASH").ok();

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Display settings
        let display_tz = env::var("DISPLAY_TZ")
            .unwrap_or_else(|_| "America/Bogota".to_string())
            .parse::<Tz>()
            .map_err(|e| eyre::eyre!("Invalid DISPLAY_TZ value: {e}"))?;

        Ok(Self {
            host,
            port,
            store_url,
            log_level,
            cors_origins,
            admin_access_code,
            admin_access_hash,
            request_timeout,
            display_tz,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
