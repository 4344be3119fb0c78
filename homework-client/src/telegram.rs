//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot posts plain text to one chat.

use crate::error::{ClientError, Result};
use crate::handle_response;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Default Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope returned by every Bot API method
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    error_code: Option<u16>,
    #[serde(default)]
    description: Option<String>,
}

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot access token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Bot API client with a request timeout
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(api_url, token, client))
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to `chat_id`
    ///
    /// A 2xx answer with `"ok": false` is reported as
    /// [`ClientError::UnexpectedStatus`] carrying the Bot API description.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: BotApiResponse = handle_response(response).await?;

        if !body.ok {
            return Err(ClientError::unexpected_status(
                body.error_code.unwrap_or(status),
                body.description.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!("Bot API accepted message for chat {}", chat_id);
        Ok(())
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::new(server.uri(), "123:bot-token", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::with_client("https://api.telegram.org/", "t", Client::new());
        assert_eq!(client.api_url(), DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:bot-token/sendMessage"))
            .and(body_json(json!({ "chat_id": "42", "text": "Привет" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": {} })),
            )
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).send_message("42", "Привет").await.unwrap();
    }

    #[tokio::test]
    async fn test_send_message_rejected_by_api() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:bot-token/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("42", "text")
            .await
            .unwrap_err();

        assert!(err.is_client_error(), "{err:?}");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_send_message_ok_false_in_success_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:bot-token/sendMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": false,
                "description": "Forbidden: bot was blocked by the user"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("42", "text")
            .await
            .unwrap_err();

        match err {
            ClientError::UnexpectedStatus { status, message } => {
                assert_eq!(status, 200);
                assert!(message.contains("blocked"));
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_token() {
        // Grab a free port, then release it so nothing listens there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TelegramClient::new(
            format!("http://{addr}"),
            "123:SECRET-BOT-TOKEN",
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.send_message("42", "text").await.unwrap_err();

        assert!(matches!(err, ClientError::Connectivity(_)), "{err:?}");
        assert!(!err.to_string().contains("SECRET-BOT-TOKEN"), "{err}");
        assert!(!format!("{err:?}").contains("SECRET-BOT-TOKEN"), "{err:?}");
    }
}
