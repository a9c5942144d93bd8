//! Environment variable parsing utilities
//!
//! Small helpers shared by the pool and service configuration so that
//! missing or malformed values never reach an `unwrap()`.

use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or does not parse.
///
/// # Example
/// ```ignore
/// let max: u32 = parse_env_with_default("DB_MAX_CONNECTIONS", 10);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a required environment variable.
///
/// Unlike [`parse_env_with_default`] a value that is present but invalid is
/// reported instead of silently replaced.
pub fn parse_env_required<T: FromStr>(key: &str) -> Result<T, String> {
    std::env::var(key)
        .map_err(|_| format!("Environment variable {} not found", key))?
        .trim()
        .parse()
        .map_err(|_| format!("Failed to parse environment variable {}", key))
}

/// Parse an optional environment variable.
///
/// Returns `Ok(None)` when unset and an error when set to something that
/// does not parse.
pub fn parse_env_optional<T: FromStr>(key: &str) -> Result<Option<T>, String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("Failed to parse environment variable {}", key)),
        Err(_) => Ok(None),
    }
}
