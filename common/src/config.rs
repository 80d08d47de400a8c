//! Application configuration.
//!
//! All settings come from environment variables with sensible defaults,
//! so the service starts with no configuration at all.

/// Runtime configuration for a service instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name used in logs and response metadata.
    pub service_name: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Driver-level connect timeout for datastore probes, in seconds.
    pub connect_timeout_secs: u64,
    /// Hard ceiling for the bounded-work endpoint, in seconds.
    pub work_ceiling_secs: u64,
}

impl AppConfig {
    /// Loads configuration from the environment for the given service.
    pub fn load_with_service(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_parse_or("PORT", 3000),
            connect_timeout_secs: env_parse_or("CONNECT_TIMEOUT_SECS", 10),
            work_ceiling_secs: env_parse_or("WORK_CEILING_SECS", 150),
        }
    }
}

/// Reads an environment variable, falling back to a default when absent or empty.
pub fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
