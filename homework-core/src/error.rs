//! Error types for payload validation and status translation
//!
//! Messages are user-facing: the bot forwards them to the chat.

use thiserror::Error;

/// Errors raised while checking the shape of a review API response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload does not match the documented response shape
    #[error("Некорректный ответ API: {0}")]
    Schema(String),

    /// The payload is well-formed but lists no homeworks
    #[error("Список homeworks пуст")]
    EmptyResult,
}

impl ValidationError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}

/// Errors raised while turning a status record into a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A required key is absent from the record
    #[error("В данных о домашней работе отсутствует ключ: {0}")]
    MissingField(String),

    /// The status code is not a known verdict
    #[error("Такого статуса домашней работы нет: {0}")]
    UnknownStatus(String),
}
