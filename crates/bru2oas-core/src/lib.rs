pub mod build;
pub mod collection;
pub mod config;
pub mod emit;
pub mod error;
pub mod method;
pub mod openapi;
pub mod parse;

pub use build::build_document;
pub use method::HttpMethod;
pub use openapi::Document;
pub use parse::{Request, parse_request};

/// Parse a loaded collection and build its document in one step.
pub fn convert(files: &[collection::SourceFile]) -> Document {
    let requests = collection::parse_collection(files);
    build_document(&requests)
}
