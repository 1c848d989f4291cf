use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::server::Server;

pub const OPENAPI_VERSION: &str = "3.0.0";
pub const DEFAULT_TITLE: &str = "API from Bruno";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Top-level OpenAPI 3.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info::default(),
            servers: Vec::new(),
            paths: IndexMap::new(),
        }
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yaml() {
        let yaml = serde_yaml_ng::to_string(&Document::new()).unwrap();
        insta::assert_snapshot!(yaml, @r"
        openapi: 3.0.0
        info:
          title: API from Bruno
          version: 1.0.0
        paths: {}
        ");
    }

    #[test]
    fn test_servers_serialized_when_present() {
        let mut doc = Document::new();
        doc.servers.push(Server {
            url: "https://api.example.com".to_string(),
        });
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value["servers"],
            serde_json::json!([{ "url": "https://api.example.com" }])
        );
        assert_eq!(value["paths"], serde_json::json!({}));
    }
}
