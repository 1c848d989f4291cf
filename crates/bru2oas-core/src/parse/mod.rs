//! Line-oriented parser for Bruno `.bru` request files.
//!
//! Parsing is total: any input yields a [`Request`], with defaults for
//! whatever the text does not declare.

pub mod query;
pub mod request;
pub mod section;

pub use request::Request;
pub use section::{Section, SectionHeader};

use crate::method::HttpMethod;

/// Parse the text of one request file.
pub fn parse_request(text: &str) -> Request {
    let normalized = text.replace("\r\n", "\n");
    let mut request = Request::default();
    let mut section = Section::None;

    for raw in normalized.split('\n') {
        section = step(section, raw, &mut request);
    }
    close(section, &mut request);

    request
}

/// Advance the scanner by one raw line.
fn step<'a>(section: Section<'a>, raw: &'a str, request: &mut Request) -> Section<'a> {
    if let Section::Body { depth, mut lines } = section {
        if let Some(header) = SectionHeader::parse(raw.trim()) {
            flush_body(&lines, request);
            return open_section(header, request);
        }
        let depth = depth + brace_delta(raw);
        if depth <= 0 {
            flush_body(&lines, request);
            return Section::None;
        }
        lines.push(raw);
        return Section::Body { depth, lines };
    }

    let line = raw.trim();
    if line.is_empty() {
        return section;
    }

    if matches!(section, Section::None) {
        if let Some((header, inner)) = SectionHeader::parse_inline(line) {
            let opened = open_section(header, request);
            close(step(opened, inner, request), request);
            return Section::None;
        }
    }

    if let Some(header) = SectionHeader::parse(line) {
        return open_section(header, request);
    }

    if line == "}" {
        return Section::None;
    }

    if let Some((key, value)) = split_key_value(line) {
        apply_entry(&section, key, value, request);
    }
    section
}

fn open_section<'a>(header: SectionHeader, request: &mut Request) -> Section<'a> {
    let (next, method) = Section::open(&header);
    if let Some(method) = method {
        request.method = method;
    }
    if matches!(next, Section::Body { .. }) {
        request.body_type = header.subtype;
    }
    next
}

/// Flush whatever the final section still holds once input runs out.
fn close(section: Section<'_>, request: &mut Request) {
    if let Section::Body { lines, .. } = section {
        flush_body(&lines, request);
    }
}

fn apply_entry(section: &Section<'_>, key: &str, value: &str, request: &mut Request) {
    match section {
        Section::Meta => match key {
            "name" if !value.is_empty() => request.name = value.to_string(),
            "method" => match HttpMethod::from_name(value) {
                Some(method) => request.method = method,
                None => log::debug!("unsupported method {value:?} in meta, keeping {}", request.method),
            },
            "url" => request.set_url(value),
            _ => {}
        },
        Section::Method => {
            if key == "url" {
                request.set_url(value);
            }
        }
        Section::Headers => {
            request.headers.insert(key.to_string(), value.to_string());
        }
        Section::Query | Section::ParamsQuery => {
            request.query.insert(key.to_string(), value.to_string());
        }
        Section::Params => {
            request.path_params.insert(key.to_string(), value.to_string());
        }
        Section::None | Section::Ignore | Section::Body { .. } => {}
    }
}

fn flush_body(lines: &[&str], request: &mut Request) {
    let body = lines.join("\n");
    let body = body.trim();
    if !body.is_empty() {
        request.body = body.to_string();
    }
}

/// Net change in brace depth for one line. Braces inside string literals
/// count the same as structural ones.
fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, ch| match ch {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

/// Split `key: value` on the first colon. Later colons stay in the value.
/// A line without a colon is all key. Returns `None` for an empty key.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_key_value_keeps_later_colons() {
        assert_eq!(
            split_key_value("url: https://api.example.com:8443/x"),
            Some(("url", "https://api.example.com:8443/x"))
        );
        assert_eq!(split_key_value("  Accept :  */*  "), Some(("Accept", "*/*")));
        assert_eq!(split_key_value("flag"), Some(("flag", "")));
        assert_eq!(split_key_value(": value"), None);
    }

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("{ \"a\": { \"b\": 1 } }"), 0);
        assert_eq!(brace_delta("  \"user\": {"), 1);
        assert_eq!(brace_delta("}}"), -2);
        assert_eq!(brace_delta("\"x\": \"}\""), -1);
    }

    #[test]
    fn test_empty_input() {
        let req = parse_request("");
        assert_eq!(req, Request::default());
    }

    #[test]
    fn test_crlf_line_endings() {
        let req = parse_request("post {\r\n  url: /items\r\n}\r\n");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "/items");
    }

    #[test]
    fn test_one_line_blocks() {
        let req = parse_request("get { url: /users/{id} }");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "/users/{id}");

        let req = parse_request("post { url: /a }\nbody:json { {\"a\": 1} }\n");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body_type, "json");
        assert_eq!(req.body, "{\"a\": 1}");
    }

    #[test]
    fn test_inline_syntax_inside_section_is_an_entry() {
        let req = parse_request("headers {\n  Authorization:Bearer {token}\n}\n");
        assert_eq!(req.headers["Authorization"], "Bearer {token}");
    }

    #[test]
    fn test_section_header_ends_open_body() {
        let text = "post {\n  url: /a\n}\nbody:json {\n  {\n    \"a\": 1\n  }\nheaders {\n  X-Id: 7\n}\n";
        let req = parse_request(text);
        assert_eq!(req.body, "{\n    \"a\": 1\n  }");
        assert_eq!(req.headers.get("X-Id").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_empty_meta_name_keeps_default() {
        let req = parse_request("meta {\n  name:\n}\n");
        assert_eq!(req.name, "Unnamed");
    }

    #[test]
    fn test_unknown_meta_method_keeps_prior() {
        let req = parse_request("put {\n  url: /a\n}\nmeta {\n  method: FETCH\n}\n");
        assert_eq!(req.method, HttpMethod::Put);

        let req = parse_request("meta {\n  method: DELETE\n}\n");
        assert_eq!(req.method, HttpMethod::Delete);
    }
}
