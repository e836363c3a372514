//! # Common Error Types
//!
//! Consolidated error handling for the dashboard.
//!
//! ## Error Categories
//!
//! - **Api**: Remote market data failures (network, HTTP status, JSON decoding)
//! - **Config**: Invalid environment configuration
//!
//! Every remote failure collapses into [`AppError::Api`]; the listing view only
//! distinguishes "fetch failed" from "fetch succeeded".
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dashboard::core::error::{AppError, Result};
//!
//! fn parse_interval(raw: &str) -> Result<u64> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid interval: {}", raw)))
//! }
//!
//! assert!(parse_interval("30").is_ok());
//! assert!(parse_interval("soon").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// `Clone` so results can travel inside [`crate::app::AppEvent`] across the
/// async channel.
///
/// ```rust
/// use dashboard::core::error::AppError;
///
/// let err = AppError::Api("HTTP 503 Service Unavailable".to_string());
/// assert_eq!(err.to_string(), "API error: HTTP 503 Service Unavailable");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Remote market data error.
    ///
    /// - Network failures (connection refused, DNS, timeout)
    /// - Non-2xx HTTP status
    /// - Malformed or partial JSON, including a missing quote currency
    #[error("API error: {0}")]
    Api(String),

    /// Configuration error (bad environment variable, invalid asset list).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else if let Some(status) = err.status() {
            AppError::Api(format!("HTTP {}", status))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("DASHBOARD_REFRESH_SECS must be at least 1".to_string()).to_string(),
            "Configuration error: DASHBOARD_REFRESH_SECS must be at least 1"
        );
    }

    #[test]
    fn test_error_is_cloneable_for_events() {
        let err = AppError::Api("timeout".to_string());
        assert_eq!(err.clone(), err);
    }
}
