use indexmap::IndexMap;

use crate::method::HttpMethod;

pub const DEFAULT_NAME: &str = "Unnamed";

/// One parsed Bruno request definition.
///
/// All maps keep first-seen source order, which is the order parameters
/// are later emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    /// Raw URL as written, with any literal query string removed.
    pub url: String,
    pub headers: IndexMap<String, String>,
    pub query: IndexMap<String, String>,
    pub path_params: IndexMap<String, String>,
    /// Trimmed body text, empty when there is none.
    pub body: String,
    /// Subtype of the `body:<type>` section (`json`, `text`, `graphql`, ...).
    pub body_type: String,
    pub name: String,
    /// Folder the request was loaded from, relative to the collection root.
    pub tag: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            url: String::new(),
            headers: IndexMap::new(),
            query: IndexMap::new(),
            path_params: IndexMap::new(),
            body: String::new(),
            body_type: String::new(),
            name: DEFAULT_NAME.to_string(),
            tag: None,
        }
    }
}

impl Request {
    /// Set the URL, folding any `?a=b` suffix into `query` without
    /// overwriting keys that are already present.
    pub fn set_url(&mut self, raw: &str) {
        let (path, pairs) = super::query::split_query(raw);
        self.url = path.to_string();
        for (key, value) in pairs {
            self.query.entry(key).or_insert(value);
        }
    }

    /// Attach a tag, treating an empty string as no tag.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag.filter(|t| !t.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = Request::default();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.name, "Unnamed");
        assert!(req.url.is_empty());
        assert!(req.query.is_empty());
        assert!(req.tag.is_none());
    }

    #[test]
    fn test_set_url_keeps_existing_query_keys() {
        let mut req = Request::default();
        req.query.insert("a".to_string(), "2".to_string());
        req.set_url("/x?a=1&b=3");
        assert_eq!(req.url, "/x");
        assert_eq!(req.query["a"], "2");
        assert_eq!(req.query["b"], "3");
    }

    #[test]
    fn test_empty_tag_is_dropped() {
        let req = Request::default().with_tag(Some(String::new()));
        assert!(req.tag.is_none());
        let req = Request::default().with_tag(Some("users".to_string()));
        assert_eq!(req.tag.as_deref(), Some("users"));
    }
}
