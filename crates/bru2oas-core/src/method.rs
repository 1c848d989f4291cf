use std::fmt;

/// HTTP method of a Bruno request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    /// Look up a method by name, ignoring case. Returns `None` for verbs
    /// outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Lowercase name, as used for OpenAPI path item keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(HttpMethod::from_name("POST"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_name("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::from_name("head"), Some(HttpMethod::Head));
    }

    #[test]
    fn test_from_name_rejects_unknown_verbs() {
        assert_eq!(HttpMethod::from_name("trace"), None);
        assert_eq!(HttpMethod::from_name("connect"), None);
        assert_eq!(HttpMethod::from_name(""), None);
    }

    #[test]
    fn test_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(HttpMethod::default().to_string(), "get");
    }
}
