//! Serializable OpenAPI 3.0 subset produced by the document builder.

pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod server;
pub mod spec;

pub use media_type::MediaType;
pub use operation::{Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation};
pub use request_body::RequestBody;
pub use response::Response;
pub use schema::{Schema, SchemaType};
pub use server::Server;
pub use spec::{Document, Info};
