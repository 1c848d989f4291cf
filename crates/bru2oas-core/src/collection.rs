//! Discovery and loading of `.bru` files under a collection root.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CollectionError;
use crate::parse::{Request, parse_request};

pub const BRU_EXTENSION: &str = "bru";

/// One request file read from disk.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Parent folder relative to the collection root, `/`-separated.
    pub tag: Option<String>,
    pub content: String,
}

/// Find every `.bru` file under `root`, in file-name order at each level.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, CollectionError> {
    if !root.is_dir() {
        return Err(CollectionError::MissingRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == BRU_EXTENSION) {
            files.push(path);
        }
    }
    log::debug!("found {} request files under {}", files.len(), root.display());
    Ok(files)
}

/// The tag for a file: its parent directory relative to `root`.
/// Files directly under `root` have no tag.
pub fn tag_for(root: &Path, file: &Path) -> Option<String> {
    let parent = file.parent()?;
    let relative = parent.strip_prefix(root).ok()?;
    let tag = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    (!tag.is_empty()).then_some(tag)
}

/// Discover and read every request file under `root`.
pub fn load(root: &Path) -> Result<Vec<SourceFile>, CollectionError> {
    discover(root)?
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path).map_err(|source| CollectionError::Read {
                path: path.clone(),
                source,
            })?;
            let tag = tag_for(root, &path);
            Ok(SourceFile { path, tag, content })
        })
        .collect()
}

/// Parse each source file, tagging the request with its folder.
pub fn parse_collection(files: &[SourceFile]) -> Vec<Request> {
    files
        .iter()
        .map(|file| {
            log::trace!("parsing {}", file.path.display());
            parse_request(&file.content).with_tag(file.tag.clone())
        })
        .collect()
}
