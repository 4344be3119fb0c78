//! Homework statuses endpoint

use crate::PracticumClient;
use crate::error::Result;
use crate::handle_response;
use homework_core::domain::Watermark;
use serde_json::Value;
use tracing::debug;

impl PracticumClient {
    /// Fetch homework statuses changed since `watermark`
    ///
    /// Sends `Authorization: OAuth <token>` and `from_date=<watermark>`.
    /// The payload is returned untyped; shape checks are up to the caller.
    ///
    /// # Errors
    /// * [`ClientError::Connectivity`](crate::ClientError::Connectivity) on transport failure or timeout
    /// * [`ClientError::UnexpectedStatus`](crate::ClientError::UnexpectedStatus) on a non-2xx answer
    /// * [`ClientError::MalformedPayload`](crate::ClientError::MalformedPayload) if the body is not JSON
    pub async fn fetch_statuses(&self, watermark: Watermark) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", watermark);

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", watermark.as_secs())])
            .send()
            .await?;

        handle_response(response).await
    }
}
