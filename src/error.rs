//! Error types for the sidebar and content loader

use thiserror::Error;

/// Main error type for sidebar operations
#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Node '{0}' not found in sidebar")]
    UnknownNode(String),

    #[error("Fetching '{path}' failed with status {status}")]
    FetchStatus { path: String, status: u16 },

    #[error("Fetching '{path}' failed: {reason}")]
    FetchFailed { path: String, reason: String },

    #[error("Fetching '{path}' timed out after {timeout_ms} ms")]
    FetchTimedOut { path: String, timeout_ms: u32 },

    #[error("Fragment '{path}' has no element with id '{container}'")]
    MissingContainer { path: String, container: String },

    #[error("Malformed sidebar row '{row}': {reason}")]
    MalformedRow { row: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl SidebarError {
    /// True for failures of the network/file request itself
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SidebarError::FetchStatus { .. }
                | SidebarError::FetchFailed { .. }
                | SidebarError::FetchTimedOut { .. }
        )
    }

    /// True when fetched or rendered markup does not have the expected shape
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            SidebarError::MissingContainer { .. } | SidebarError::MalformedRow { .. }
        )
    }
}

/// Result type for sidebar operations
pub type SidebarResult<T> = Result<T, SidebarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let status = SidebarError::FetchStatus {
            path: "guide/intro.html".into(),
            status: 404,
        };
        assert!(status.is_fetch_error());
        assert!(!status.is_structural_error());
        assert_eq!(
            status.to_string(),
            "Fetching 'guide/intro.html' failed with status 404"
        );

        let missing = SidebarError::MissingContainer {
            path: "a.html".into(),
            container: "content".into(),
        };
        assert!(missing.is_structural_error());
        assert!(!missing.is_fetch_error());

        assert!(!SidebarError::UnknownNode("x".into()).is_fetch_error());
    }
}
