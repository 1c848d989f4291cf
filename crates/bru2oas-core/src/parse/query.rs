use url::form_urlencoded;

/// Split a raw URL on its first `?` and decode the suffix as a query string.
///
/// Returns the part before `?` and the decoded pairs. For a repeated key only
/// the first value is kept. When the suffix is not a valid query string the
/// path is still returned, with no pairs.
pub fn split_query(raw: &str) -> (&str, Vec<(String, String)>) {
    let trimmed = raw.trim();
    let Some((path, suffix)) = trimmed.split_once('?') else {
        return (raw, Vec::new());
    };

    if !is_valid_query(suffix) {
        log::debug!("ignoring malformed query string in {trimmed:?}");
        return (path, Vec::new());
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in form_urlencoded::parse(suffix.as_bytes()) {
        if pairs.iter().any(|(k, _)| *k == key) {
            continue;
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }
    (path, pairs)
}

/// `;` separators and broken percent escapes are rejected outright.
fn is_valid_query(query: &str) -> bool {
    if query.contains(';') {
        return false;
    }
    let bytes = query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_query() {
        let (path, q) = split_query("/users/{id}");
        assert_eq!(path, "/users/{id}");
        assert!(q.is_empty());
    }

    #[test]
    fn test_decodes_pairs_in_order() {
        let (path, q) = split_query("{{host}}/search?q=hello+world&page=2&flag");
        assert_eq!(path, "{{host}}/search");
        assert_eq!(
            q,
            pairs(&[("q", "hello world"), ("page", "2"), ("flag", "")])
        );
    }

    #[test]
    fn test_first_value_wins_for_repeated_key() {
        let (_, q) = split_query("/x?a=1&a=2");
        assert_eq!(q, pairs(&[("a", "1")]));
    }

    #[test]
    fn test_percent_escapes() {
        let (_, q) = split_query("/x?name=J%C3%BCrgen");
        assert_eq!(q, pairs(&[("name", "Jürgen")]));
    }

    #[test]
    fn test_malformed_query_keeps_path_only() {
        let (path, q) = split_query("/x?a=%zz");
        assert_eq!(path, "/x");
        assert!(q.is_empty());

        let (path, q) = split_query("/x?a=1;b=2");
        assert_eq!(path, "/x");
        assert!(q.is_empty());
    }

    #[test]
    fn test_only_first_question_mark_splits() {
        let (path, q) = split_query("/x?a=what?");
        assert_eq!(path, "/x");
        assert_eq!(q, pairs(&[("a", "what?")]));
    }
}
