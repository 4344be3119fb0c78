//! Notifier service
//!
//! Delivers text messages to the fixed destination chat.

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Service trait for delivering notifications
///
/// Implementations are bound to a single destination. Callers treat
/// delivery as best effort and only log failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the destination
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Notifier backed by the Telegram Bot API
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier posting to `chat_id`
    pub fn new(client: TelegramClient, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await
    }
}
