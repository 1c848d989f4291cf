//! Aggregation of parsed requests into one OpenAPI document.

pub mod parameters;
pub mod path;
pub mod request_body;

use indexmap::{IndexMap, IndexSet};

use crate::openapi::{Document, Operation, Response, Server};
use crate::parse::Request;

pub use parameters::build_parameters;
pub use path::{extract_path_params, normalize_path_params, split_url};
pub use request_body::{build_request_body, resolve_content_type};

/// Fold requests, in order, into a document.
///
/// Requests sharing a normalized path and method replace each other; the
/// last one wins. Servers are collected first-seen and deduplicated.
pub fn build_document(requests: &[Request]) -> Document {
    let mut document = Document::new();
    let mut servers: IndexSet<String> = IndexSet::new();

    for request in requests {
        let (path, server) = split_url(&request.url);
        let normalized = normalize_path_params(&path);

        if let Some(server) = server {
            servers.insert(server);
        }

        let operation = build_operation(request, &normalized);
        let item = document.paths.entry(normalized.clone()).or_default();
        if let Some(previous) = item.set(request.method, operation) {
            log::debug!(
                "{} {normalized}: {:?} replaces {:?}",
                request.method,
                request.name,
                previous.summary.unwrap_or_default()
            );
        }
    }

    document.servers = servers.into_iter().map(|url| Server { url }).collect();
    document
}

/// Build the operation for a single request on its normalized path.
pub fn build_operation(request: &Request, normalized_path: &str) -> Operation {
    let mut responses = IndexMap::new();
    responses.insert("200".to_string(), Response::new("Success"));

    Operation {
        summary: Some(request.name.clone()),
        tags: request.tag.iter().cloned().collect(),
        parameters: build_parameters(request, normalized_path),
        request_body: build_request_body(request),
        responses,
    }
}
