//! Content tree scanning.
//!
//! One blocking walk of the content directory, collecting every markdown
//! document in a pinned order: lexicographic by slash-separated relative
//! path. Directory-listing order is platform dependent; this one is not.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use thiserror::Error;

use crate::core::DocumentPath;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("content directory `{0}` does not exist")]
    Missing(PathBuf),

    #[error("`{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read content tree under `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),
}

/// Collect all markdown documents under `content_dir`, sorted by path.
///
/// Hidden files and directories (leading `.`) are skipped.
pub fn scan_documents(content_dir: &Path) -> Result<Vec<DocumentPath>, ScanError> {
    if !content_dir.exists() {
        return Err(ScanError::Missing(content_dir.to_path_buf()));
    }
    if !content_dir.is_dir() {
        return Err(ScanError::NotADirectory(content_dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    // Hidden entries are filtered on the relative path so a hidden
    // content root (e.g. a temp dir) is still walked.
    for entry in WalkDir::new(content_dir).skip_hidden(false) {
        let entry = entry.map_err(|e| ScanError::Walk(content_dir.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if let Ok(relative) = path.strip_prefix(content_dir)
            && !is_hidden(relative)
            && let Some(doc) = DocumentPath::from_relative(relative)
        {
            documents.push(doc);
        }
    }

    documents.sort();
    Ok(documents)
}

fn is_hidden(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}
