use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A media type object inside a request body's `content` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// Either the decoded JSON value or the raw body string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}
