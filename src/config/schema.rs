//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root configuration for the admin gate service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Admin interface installation.
    pub admin: AdminConfig,

    /// Password expiration policy.
    pub password_expiration: PasswordExpirationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Known admin users and their bearer tokens.
    pub users: Vec<UserConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Admin interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Whether the admin application is installed. When false no routes
    /// are exposed at all.
    pub installed: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { installed: true }
    }
}

/// Password expiration policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordExpirationConfig {
    /// Request paths exempt from the expiration check. Exact match.
    pub whitelist: Vec<String>,

    /// Lifetime of a freshly changed password, in days.
    pub max_age_days: i64,
}

impl Default for PasswordExpirationConfig {
    fn default() -> Self {
        Self {
            whitelist: vec!["/admin/login/".to_string(), "/admin/logout/".to_string()],
            max_age_days: 90,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// A user known to the bearer-token directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    /// Numeric user id, used in `/admin/auth/user/{id}/...` paths.
    pub id: u64,

    pub username: String,

    /// Bearer token presented in the `Authorization` header.
    pub token: String,

    /// RFC 3339 timestamp after which the password counts as expired.
    pub password_expires: DateTime<Utc>,
}
