use serde::{Deserialize, Serialize};

/// A server URL definition. Bruno variable tokens such as `{{baseUrl}}` are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
}
