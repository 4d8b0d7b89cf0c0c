//! Error types for the common library.
//!
//! This module provides a unified error hierarchy using `thiserror` for consistent
//! error handling across the Ark MCP servers.
//!
//! # Error Categories
//!
//! - `ConfigError`: Missing or invalid configuration
//! - `Error::Api`: Ark API errors (includes endpoint and status)
//! - `Error::Validation`: Input validation failures
//! - `Error::Io`: File system operations
//! - `Error::TaskFailed`: The remote task reported a failed status
//! - `Error::Timeout`: Polling budget exhausted before a terminal status
//! - `Error::UnexpectedStatus`: The remote task reported an unknown status
//! - `Error::UnexpectedResponse`: A response was missing a required field

use thiserror::Error;

/// Unified error type for the common library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (missing env vars, invalid values)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API errors with endpoint and HTTP status context
    ///
    /// A `status_code` of 0 means no HTTP response was received
    /// (connect failure, request timeout).
    #[error("API error for {endpoint} (HTTP {status_code}): {message}")]
    Api {
        /// The API endpoint that was called
        endpoint: String,
        /// HTTP status code returned by the API
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The remote task finished with a failed status
    #[error("Task failed with error: {0}")]
    TaskFailed(String),

    /// The remote task did not settle within the polling budget
    #[error("Task timed out after {0} polling attempts")]
    Timeout(u32),

    /// The remote task reported a status outside the known vocabulary
    #[error("Unexpected task status: {0}")]
    UnexpectedStatus(String),

    /// A response parsed but lacked data the workflow needs
    #[error("{0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Create a new API error with endpoint, status code, and message.
    ///
    /// # Example
    ///
    /// ```
    /// use ark_mcp_common::error::Error;
    ///
    /// let err = Error::api(
    ///     "https://ark.cn-beijing.volces.com/api/v3/contents/generations/tasks",
    ///     500,
    ///     "Internal server error"
    /// );
    /// assert!(err.to_string().contains("volces.com"));
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn api(endpoint: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Create a new task failure error carrying the remote error detail.
    ///
    /// # Example
    ///
    /// ```
    /// use ark_mcp_common::error::Error;
    ///
    /// let err = Error::task_failed("quota exceeded");
    /// assert!(err.to_string().contains("quota exceeded"));
    /// ```
    pub fn task_failed(detail: impl Into<String>) -> Self {
        Error::TaskFailed(detail.into())
    }

    /// Create a new timeout error after `attempts` polls.
    pub fn timeout(attempts: u32) -> Self {
        Error::Timeout(attempts)
    }

    /// Create a new unexpected status error.
    pub fn unexpected_status(status: impl Into<String>) -> Self {
        Error::UnexpectedStatus(status.into())
    }

    /// Create a new unexpected response error.
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Error::UnexpectedResponse(message.into())
    }

    /// HTTP status code of an API error, if any response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } if *status_code != 0 => Some(*status_code),
            _ => None,
        }
    }
}

/// Configuration errors.
///
/// These errors occur when loading or validating configuration from
/// environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new missing environment variable error.
    pub fn missing_env_var(name: impl Into<String>) -> Self {
        ConfigError::MissingEnvVar(name.into())
    }

    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}

/// Result type alias using the unified Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_includes_endpoint_and_status() {
        let err = Error::api("https://ark.example.com/api/v3/contents/generations/tasks", 502, "Bad gateway");
        let msg = err.to_string();
        assert!(msg.contains("ark.example.com"), "Should contain endpoint");
        assert!(msg.contains("502"), "Should contain status code");
        assert!(msg.contains("Bad gateway"), "Should contain message");
    }

    #[test]
    fn test_status_code_only_for_http_responses() {
        assert_eq!(Error::api("x", 401, "unauthorized").status_code(), Some(401));
        assert_eq!(Error::api("x", 0, "connection refused").status_code(), None);
        assert_eq!(Error::timeout(120).status_code(), None);
    }

    #[test]
    fn test_config_error_includes_var_name() {
        let err = ConfigError::missing_env_var("DOUBAO_API_KEY");
        assert!(err.to_string().contains("DOUBAO_API_KEY"));
    }

    #[test]
    fn test_invalid_value_includes_reason() {
        let err = ConfigError::invalid_value("ARK_BASE_URL", "expected an http(s) URL");
        let msg = err.to_string();
        assert!(msg.contains("ARK_BASE_URL"));
        assert!(msg.contains("http(s)"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::missing_env_var("TEST_VAR").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_task_failed_carries_detail_verbatim() {
        let err = Error::task_failed("quota exceeded");
        assert_eq!(err.to_string(), "Task failed with error: quota exceeded");
    }

    #[test]
    fn test_timeout_mentions_attempts() {
        let err = Error::timeout(120);
        assert_eq!(err.to_string(), "Task timed out after 120 polling attempts");
    }

    #[test]
    fn test_unexpected_status_names_status() {
        let err = Error::unexpected_status("cancelled");
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_unexpected_response_is_bare_message() {
        let err = Error::unexpected_response("No video URL in response");
        assert_eq!(err.to_string(), "No video URL in response");
    }
}
