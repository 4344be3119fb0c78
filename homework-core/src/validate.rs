//! Response validation
//!
//! Checks a raw review API payload against the documented shape and
//! extracts the status records plus the next watermark.

use serde_json::Value;

use crate::domain::Watermark;
use crate::dto::StatusPage;
use crate::error::ValidationError;

const HOMEWORKS: &str = "homeworks";
const CURRENT_DATE: &str = "current_date";

/// Validates a raw payload returned by the homework statuses endpoint
///
/// An empty `homeworks` list is reported as [`ValidationError::EmptyResult`]
/// rather than an empty page. The caller decides how to treat it; note that
/// `current_date` is not extracted in that case.
pub fn validate_response(payload: &Value) -> Result<StatusPage, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::schema("ответ API должен быть словарем"))?;

    let (Some(homeworks), Some(current_date)) = (object.get(HOMEWORKS), object.get(CURRENT_DATE))
    else {
        return Err(ValidationError::schema(format!(
            "отсутствуют обязательные ключи {HOMEWORKS} и {CURRENT_DATE}"
        )));
    };

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| ValidationError::schema(format!("{HOMEWORKS} должны быть списком")))?;

    if homeworks.is_empty() {
        return Err(ValidationError::EmptyResult);
    }

    let current_date = current_date.as_i64().ok_or_else(|| {
        ValidationError::schema(format!("{CURRENT_DATE} должен быть целым числом"))
    })?;

    Ok(StatusPage {
        homeworks: homeworks.clone(),
        current_date: Watermark::from_timestamp(current_date),
    })
}
