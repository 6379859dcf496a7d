//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

use crate::domain::broadcaster::DEFAULT_SESSION_QUEUE_CAPACITY;
use crate::domain::credentials::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// Default welcome text sent to a session when it connects.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Connected to admin channel";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Single-tenant admin username.
    pub admin_username: String,

    /// Single-tenant admin password.
    pub admin_password: String,

    /// Bounded outbound queue length per realtime session.
    pub session_queue_capacity: usize,

    /// Text of the `admin_response` sent on connect. `None` disables it.
    pub welcome_message: Option<String>,

    /// Whether 500 responses include the raw error description.
    pub expose_error_details: bool,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let admin_username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let session_queue_capacity =
            parse_env("SESSION_QUEUE_CAPACITY", DEFAULT_SESSION_QUEUE_CAPACITY);

        let welcome_message = match std::env::var("WS_WELCOME_MESSAGE") {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(_) => Some(DEFAULT_WELCOME_MESSAGE.to_string()),
        };

        let expose_error_details = parse_env_bool("EXPOSE_ERROR_DETAILS", false);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            admin_username,
            admin_password,
            session_queue_capacity,
            welcome_message,
            expose_error_details,
            log_format,
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_queue_capacity: DEFAULT_SESSION_QUEUE_CAPACITY,
            welcome_message: Some(DEFAULT_WELCOME_MESSAGE.to_string()),
            expose_error_details: false,
            log_format: LogFormat::Text,
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("listen_addr", &self.listen_addr)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("session_queue_capacity", &self.session_queue_capacity)
            .field("welcome_message", &self.welcome_message)
            .field("expose_error_details", &self.expose_error_details)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

/// Parses `"true"`, `"1"`, `"false"`, `"0"` (case-insensitive).
fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
