//! Textual encoding of a built document.

use std::path::Path;

use serde::Deserialize;

use crate::error::EmitError;
use crate::openapi::Document;

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// JSON for a `.json` extension, YAML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }
}

/// Encode a document in the given format.
pub fn render(document: &Document, format: OutputFormat) -> Result<String, EmitError> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(document)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(document)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out/api.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("api.JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("openapi.yml")), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_path(Path::new("openapi")), OutputFormat::Yaml);
    }

    #[test]
    fn test_render_json_round_trips() {
        let doc = Document::new();
        let json = render(&doc, OutputFormat::Json).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_render_yaml_starts_with_version() {
        let yaml = render(&Document::new(), OutputFormat::Yaml).unwrap();
        assert!(yaml.starts_with("openapi: 3.0.0\n"));
    }
}
