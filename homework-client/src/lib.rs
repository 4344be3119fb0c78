//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients used by the homework status bot:
//! - [`PracticumClient`] fetches homework statuses from the review API
//! - [`TelegramClient`] delivers text messages through the Telegram Bot API
//!
//! Both clients classify failures into [`ClientError`] and never retry;
//! retry cadence belongs to the caller.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//! use homework_core::domain::Watermark;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!         Duration::from_secs(30),
//!     )?;
//!
//!     let payload = client.fetch_statuses(Watermark::initial()).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{DEFAULT_API_URL, TelegramClient};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// HTTP client for the homework review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client with a request timeout
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework statuses endpoint
    /// * `token` - OAuth access token
    /// * `timeout` - Upper bound for a whole request, including the body
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(endpoint, token, client))
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// The caller is responsible for configuring timeouts on `client`.
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and deserialize a JSON body
///
/// Non-2xx responses become [`ClientError::UnexpectedStatus`] with the body
/// text attached. Only a body that arrived in full but is not JSON becomes
/// [`ClientError::MalformedPayload`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::unexpected_status(status.as_u16(), error_text));
    }

    // Body read failures (timeouts included) stay transport errors
    let body = response.bytes().await?;

    serde_json::from_slice(&body).map_err(|e| ClientError::MalformedPayload(e.to_string()))
}
