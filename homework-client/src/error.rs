//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the Bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, timeout, DNS failure and other transport errors
    ///
    /// The request URL is stripped: the Bot API puts the token in the path.
    #[error("Ошибка соединения с API: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// API answered with a status code outside the 2xx range
    #[error("Неуспешный статус ответа API: {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, kept for logs
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Ошибка при декодировании JSON: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Connectivity(e.without_url())
    }
}

impl ClientError {
    /// Create an unexpected status error from status code and body
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Connectivity(e) => e.status().map(|s| s.as_u16()),
            Self::MalformedPayload(_) => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}
