//! Scheduler layer for the bot
//!
//! Runs the poll-validate-notify cycle on a fixed period and keeps the
//! watermark between cycles.

pub mod poller;

pub use poller::StatusPoller;
