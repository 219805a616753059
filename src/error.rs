//! Error types for AgileZen API operations.

use thiserror::Error;

/// Errors that can occur while building or sending AgileZen requests.
#[derive(Debug, Error)]
pub enum KaizenError {
    /// A verb outside of GET/POST/PUT/DELETE was set on a request.
    #[error("Invalid HTTP verb '{0}': expected one of GET, POST, PUT, DELETE")]
    InvalidVerb(String),

    /// A sub-resource was addressed without a concrete parent id.
    #[error("Cannot address {resource} without a {parent} id")]
    Chaining {
        resource: &'static str,
        parent: &'static str,
    },

    /// Request state was copied into a request bound to another API session.
    #[error("Invalid copy target: {0}")]
    InvalidTarget(String),

    /// The API answered with a non-success status.
    #[error("AgileZen API error ({status}): {message}")]
    Transport {
        status: u16,
        message: String,
        body: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The story's phase is not part of the project's phase list.
    #[error("Unknown phase '{0}'")]
    UnknownPhase(String),

    /// The story cannot move past the last phase.
    #[error("Story is already in the last phase '{0}'")]
    LastPhase(String),

    /// No story is left in the phase to take one from.
    #[error("No story left in phase '{0}'")]
    EmptyPhase(String),
}

impl KaizenError {
    /// HTTP status code of a failed API call, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error comes from a workflow rule rather than the API.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::UnknownPhase(_) | Self::LastPhase(_) | Self::EmptyPhase(_))
    }
}

/// Result type alias for kaizen operations.
pub type Result<T> = core::result::Result<T, KaizenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaining_message_names_parent() {
        let err = KaizenError::Chaining {
            resource: "phases",
            parent: "project",
        };
        assert_eq!(err.to_string(), "Cannot address phases without a project id");
    }

    #[test]
    fn test_status_code_only_for_transport() {
        let err = KaizenError::Transport {
            status: 404,
            message: "Not Found".to_string(),
            body: String::new(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(KaizenError::Config("x".into()).status_code(), None);
    }

    #[test]
    fn test_workflow_errors_are_domain() {
        assert!(KaizenError::EmptyPhase("Ready".into()).is_domain());
        assert!(KaizenError::LastPhase("Archive".into()).is_domain());
        assert!(!KaizenError::Config("x".into()).is_domain());
    }
}
