//! Dashboard error types
//!
//! A fetch cycle fails in one of two ways. Both are caught by the controller
//! and collapsed into the same user-visible notice.

use thiserror::Error;

/// Text of the blocking notice shown when a cycle fails
pub const LOAD_FAILED_NOTICE: &str = "Erro ao carregar dados. Por favor, tente novamente.";

/// Errors that can end a fetch cycle
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Non-success HTTP status (`status` set) or network-level failure
    #[error("Request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    /// Response body was not a valid dashboard payload
    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

impl DashboardError {
    /// Failure for a non-success HTTP status
    pub fn status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, body)
        };
        DashboardError::RequestFailed {
            status: Some(status),
            message,
        }
    }

    /// True for network-level and HTTP status failures
    pub fn is_request_failure(&self) -> bool {
        matches!(self, DashboardError::RequestFailed { .. })
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::ParseFailed(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DashboardError::ParseFailed(err.to_string())
        } else {
            DashboardError::RequestFailed {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
