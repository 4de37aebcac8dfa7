//! Markdown document discovery
//!
//! Lists the markdown files sitting directly inside a watched directory.

use std::io;
use std::path::Path;
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = "md";

/// Find all top-level `.md` files in `dir`.
///
/// Paths are returned relative to `project_root`, joined with `/` so they
/// match the links written in `SUMMARY.md`, and sorted alphabetically.
/// A missing directory yields an empty list.
pub fn find_markdown_files(project_root: &Path, dir: &Path) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Directory not found, nothing to discover");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        let path = entry.path();

        // Follows symlinks so linked documents are picked up too
        if !path.is_file() {
            continue;
        }
        if path.extension().is_none_or(|ext| ext != MARKDOWN_EXTENSION) {
            continue;
        }

        let relative = path.strip_prefix(project_root).unwrap_or(path);
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(relative);
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "Discovered markdown files");
    Ok(files)
}
