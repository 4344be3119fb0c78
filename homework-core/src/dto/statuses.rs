//! Status page DTO

use serde_json::Value;

use crate::domain::Watermark;

/// A validated response from the homework statuses endpoint
///
/// Records stay untyped: each one is checked individually by
/// [`translate_status`](crate::translate_status) so that a single bad record
/// does not hide the ones delivered before it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPage {
    /// Status records, in the order the server returned them
    pub homeworks: Vec<Value>,
    /// Server time of the response, used as the next watermark
    pub current_date: Watermark,
}
