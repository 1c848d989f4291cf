use std::sync::LazyLock;

use regex::Regex;

use crate::method::HttpMethod;

static SECTION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)(?::([A-Za-z0-9_-]+))?\s*\{$").expect("invalid section regex")
});
static INLINE_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)(?::([A-Za-z0-9_-]+))?\s*\{(.*)\}$")
        .expect("invalid inline section regex")
});

/// A `name[:subtype] {` line that opens a section. Both parts are lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub subtype: String,
}

impl SectionHeader {
    /// Match a trimmed line against the section header syntax.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = SECTION_HEADER_RE.captures(line)?;
        Some(Self::from_captures(&caps))
    }

    /// Match a whole block written on one line, `name[:subtype] { ... }`.
    /// Returns the header and the text between the outer braces.
    pub fn parse_inline(line: &str) -> Option<(Self, &str)> {
        let caps = INLINE_SECTION_RE.captures(line)?;
        let inner = caps.get(3).map_or("", |m| m.as_str());
        Some((Self::from_captures(&caps), inner))
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Self {
        Self {
            name: caps[1].to_ascii_lowercase(),
            subtype: caps
                .get(2)
                .map(|m| m.as_str().to_ascii_lowercase())
                .unwrap_or_default(),
        }
    }
}

/// Scanner state: which section the current line belongs to.
///
/// Only the body state carries data: the brace depth and the raw lines
/// captured so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section<'a> {
    #[default]
    None,
    Meta,
    Method,
    Headers,
    Query,
    Params,
    ParamsQuery,
    Body { depth: i64, lines: Vec<&'a str> },
    Ignore,
}

impl<'a> Section<'a> {
    /// The section a header opens. HTTP verbs also yield the method they set.
    pub fn open(header: &SectionHeader) -> (Self, Option<HttpMethod>) {
        if let Some(method) = HttpMethod::from_name(&header.name) {
            return (Section::Method, Some(method));
        }
        let section = match header.name.as_str() {
            "meta" => Section::Meta,
            "headers" => Section::Headers,
            "query" => Section::Query,
            "params" if header.subtype == "query" => Section::ParamsQuery,
            "params" => Section::Params,
            "body" => Section::Body {
                depth: 1,
                lines: Vec::new(),
            },
            other => {
                log::trace!("ignoring section {other:?}");
                Section::Ignore
            }
        };
        (section, None)
    }
}
