use indexmap::IndexMap;

use crate::openapi::{MediaType, RequestBody, Schema};
use crate::parse::Request;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";
pub const GRAPHQL_CONTENT_TYPE: &str = "application/graphql";

/// Pick the media type for a request body.
///
/// An explicit `Content-Type` or `content-type` header wins, then the body
/// section subtype, then JSON.
pub fn resolve_content_type(request: &Request) -> String {
    let header = ["content-type", "Content-Type"]
        .iter()
        .find_map(|key| request.headers.get(*key));
    if let Some(content_type) = header {
        return content_type.clone();
    }

    let content_type = match request.body_type.as_str() {
        "text" => TEXT_CONTENT_TYPE,
        "graphql" => GRAPHQL_CONTENT_TYPE,
        _ => JSON_CONTENT_TYPE,
    };
    content_type.to_string()
}

/// Build the request body, or `None` when the request has no body text.
pub fn build_request_body(request: &Request) -> Option<RequestBody> {
    let body = request.body.trim();
    if body.is_empty() {
        return None;
    }

    let content_type = resolve_content_type(request);
    let media = if content_type.to_ascii_lowercase().contains("json") {
        MediaType {
            schema: Some(Schema::object()),
            example: Some(json_or_string(&request.body)),
        }
    } else {
        MediaType {
            schema: Some(Schema::string()),
            example: Some(serde_json::Value::String(request.body.clone())),
        }
    };

    let mut content = IndexMap::new();
    content.insert(content_type, media);
    Some(RequestBody {
        required: true,
        content,
    })
}

/// Decode `text` as JSON, falling back to the raw string.
fn json_or_string(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|err| {
        log::debug!("body is not valid JSON, using it as a string example: {err}");
        serde_json::Value::String(text.to_string())
    })
}
