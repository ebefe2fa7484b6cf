//! Input resolution: expand path arguments and read source buffers.

use crate::error::SourceError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read when no input is given, relative to the working directory.
pub const DEFAULT_INPUT: &str = "src/server/func_man/functions.rs";

/// File extension scanned for when a directory is given.
const SOURCE_EXTENSION: &str = "rs";

/// Read one source file into memory.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read source");
    Ok(content)
}

/// Expand path arguments into a sorted, deduplicated list of files.
///
/// Directories contribute their `.rs` files (non-recursive). Arguments with
/// glob metacharacters are expanded; a pattern matching nothing is skipped
/// with a warning. Any other argument is kept as-is so that a missing file
/// surfaces as [`SourceError::FileNotFound`] when read.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|source| SourceError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION) {
                    files.push(p);
                }
            }
            continue;
        }
        if !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .map_err(|source| SourceError::Pattern {
                pattern: pattern.clone(),
                source,
            })?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
