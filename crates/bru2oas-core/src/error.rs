use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("collection directory not found: {0}")]
    MissingRoot(PathBuf),

    #[error("failed to walk collection: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
