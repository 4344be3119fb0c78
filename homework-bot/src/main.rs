//! Homework Status Bot
//!
//! A long-running worker that watches homework review statuses and relays
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Secrets and tunables from the environment (and `.env`)
//! - Logging: Console plus an append-only log file
//! - Services: Status source (review API) and notifier (Telegram) seams
//! - Scheduler: The poll-validate-notify loop and its watermark
//!
//! The bot never exits on its own once the loop is running; every failure
//! inside a cycle is logged, reported to the chat and retried after the
//! fixed retry period.

mod config;
mod logging;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::TelegramNotifier;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Best-effort .env load; ignore if missing
    let _ = dotenvy::dotenv();

    logging::init(&config::log_file_from_env())?;

    info!("Starting homework status bot");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, "Configuration problem: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let source = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout,
    )
    .context("Failed to build review API client")?;

    let telegram = TelegramClient::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.request_timeout,
    )
    .context("Failed to build Telegram client")?;
    let notifier = TelegramNotifier::new(telegram, config.telegram_chat_id.clone());

    info!("Clients initialized");

    let poller = StatusPoller::new(&config, Arc::new(source), Arc::new(notifier));
    poller.run().await;

    Ok(())
}
