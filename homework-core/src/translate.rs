//! Status translation
//!
//! Maps one status record from the review API to the message sent to chat.

use serde_json::Value;

use crate::domain::HomeworkStatus;
use crate::error::TranslationError;

const STATUS: &str = "status";
const HOMEWORK_NAME: &str = "homework_name";

/// Builds the verdict message for a single status record
///
/// Only `status` and `homework_name` are read. The function is pure:
/// the same record always yields the same message.
pub fn translate_status(record: &Value) -> Result<String, TranslationError> {
    let status = field(record, STATUS)?;
    let name = field(record, HOMEWORK_NAME)?;

    let status = status
        .as_str()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| TranslationError::UnknownStatus(display_value(status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        display_value(name),
        status.verdict()
    ))
}

fn field<'a>(record: &'a Value, key: &str) -> Result<&'a Value, TranslationError> {
    record
        .get(key)
        .ok_or_else(|| TranslationError::MissingField(key.to_string()))
}

/// Strings are shown bare; anything else as its JSON text
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
