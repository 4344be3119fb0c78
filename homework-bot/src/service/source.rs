//! Status source
//!
//! Anything that can answer "what changed since this watermark".

use async_trait::async_trait;
use homework_client::{PracticumClient, Result};
use homework_core::domain::Watermark;
use serde_json::Value;

/// Service trait for fetching raw homework status payloads
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the raw payload for records newer than `watermark`
    async fn fetch_statuses(&self, watermark: Watermark) -> Result<Value>;
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, watermark: Watermark) -> Result<Value> {
        PracticumClient::fetch_statuses(self, watermark).await
    }
}
