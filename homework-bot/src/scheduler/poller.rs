//! Status poller
//!
//! Polls the review API for homework status changes and relays them to the
//! notifier. Each cycle is isolated: whatever fails inside it is reported to
//! the chat and the next cycle runs after the usual pause.

use homework_client::ClientError;
use homework_core::domain::Watermark;
use homework_core::{TranslationError, ValidationError, translate_status, validate_response};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::service::{Notifier, StatusSource};

/// Sent when the server reports no homeworks for the current window
pub const NO_NEW_STATUSES: &str = "Нет новых статусов домашних работ.";

/// Prefix of every failure report sent to the chat
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Anything that can abort a poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl CycleError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Client(ClientError::Connectivity(_)) => "connectivity",
            Self::Client(e) if e.is_server_error() => "server_error",
            Self::Client(e) if e.is_client_error() => "client_error",
            Self::Client(ClientError::UnexpectedStatus { .. }) => "unexpected_status",
            Self::Client(ClientError::MalformedPayload(_)) => "malformed_payload",
            Self::Validation(ValidationError::Schema(_)) => "schema",
            Self::Validation(ValidationError::EmptyResult) => "empty_result",
            Self::Translation(TranslationError::MissingField(_)) => "missing_field",
            Self::Translation(TranslationError::UnknownStatus(_)) => "unknown_status",
        }
    }
}

/// User-facing text for a failed cycle
pub fn diagnostic(err: &CycleError) -> String {
    format!("{FAILURE_PREFIX}: {err}")
}

/// How a single cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Every record was translated; this many messages were handed to the notifier
    Delivered(usize),
    /// The server listed no homeworks; the watermark was kept
    NoNewStatuses,
    /// The cycle was aborted and the failure reported
    Failed,
}

/// Poller that relays homework status changes, one cycle at a time
pub struct StatusPoller {
    retry_period: Duration,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        config: &Config,
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            retry_period: config.retry_period,
            source,
            notifier,
        }
    }

    /// Starts the polling loop
    ///
    /// Never returns. The first window starts one day before now.
    pub async fn run(&self) {
        info!(
            "Starting status poller (retry period: {:?})",
            self.retry_period
        );

        let mut watermark = Watermark::initial();

        loop {
            debug!("Polling homework statuses from {}", watermark);

            match self.run_cycle(&mut watermark).await {
                CycleOutcome::Delivered(count) => {
                    info!("Relayed {} status change(s), next watermark {}", count, watermark)
                }
                outcome => debug!("Cycle finished: {:?}", outcome),
            }

            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle and reports its result
    ///
    /// The watermark is only advanced once a response passed validation.
    pub async fn run_cycle(&self, watermark: &mut Watermark) -> CycleOutcome {
        match self.poll_once(watermark).await {
            Ok(delivered) => CycleOutcome::Delivered(delivered),
            Err(CycleError::Validation(ValidationError::EmptyResult)) => {
                info!("{}", NO_NEW_STATUSES);
                self.deliver(NO_NEW_STATUSES).await;
                CycleOutcome::NoNewStatuses
            }
            Err(e) => {
                let message = diagnostic(&e);
                error!(kind = e.kind(), "{}", message);
                self.deliver(&message).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll_once(&self, watermark: &mut Watermark) -> Result<usize, CycleError> {
        let payload = self.source.fetch_statuses(*watermark).await?;
        let page = validate_response(&payload)?;

        if page.current_date < *watermark {
            warn!(
                "Server current_date {} is older than watermark {}",
                page.current_date, watermark
            );
        }
        *watermark = page.current_date;

        let mut delivered = 0;
        for record in &page.homeworks {
            let message = translate_status(record)?;
            self.deliver(&message).await;
            info!("{}", message);
            delivered += 1;
        }

        Ok(delivered)
    }

    /// Best-effort delivery; failures are logged and dropped
    async fn deliver(&self, text: &str) {
        match self.notifier.notify(text).await {
            Ok(()) => debug!("Message sent: {}", text),
            Err(e) => error!("Failed to send message: {}", e),
        }
    }
}
