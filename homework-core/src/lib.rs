//! Homework Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: Watermark and review verdict codes
//! - DTOs: The validated shape of a status page
//! - Validation: Checks raw API payloads against the expected shape
//! - Translation: Turns a single status record into a chat message

pub mod domain;
pub mod dto;
pub mod error;
mod translate;
mod validate;

pub use error::{TranslationError, ValidationError};
pub use translate::translate_status;
pub use validate::validate_response;
