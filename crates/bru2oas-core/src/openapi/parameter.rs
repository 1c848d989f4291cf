use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
}

/// An API parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    pub schema: Schema,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl Parameter {
    /// An optional, string-typed query parameter with the literal value as example.
    pub fn query(name: &str, example: &str) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Query,
            required: false,
            schema: Schema::string(),
            example: Some(serde_json::Value::String(example.to_string())),
        }
    }

    /// A required, string-typed path parameter.
    pub fn path(name: &str, example: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Path,
            required: true,
            schema: Schema::string(),
            example: example.map(|e| serde_json::Value::String(e.to_string())),
        }
    }
}
