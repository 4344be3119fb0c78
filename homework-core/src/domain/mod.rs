//! Core domain types
//!
//! These types are shared between the HTTP client (which sends the watermark)
//! and the bot (which owns it and turns verdicts into messages).

pub mod homework;
pub mod watermark;

pub use homework::HomeworkStatus;
pub use watermark::Watermark;
