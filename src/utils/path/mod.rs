//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - resolve relative paths against a base directory
//! - `display_relative` - short display form for log lines

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a possibly relative path against `base`.
///
/// Absolute paths are returned unchanged.
#[inline]
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Path relative to `root` for display, falling back to the full path.
///
/// `root` itself displays as `.`.
pub fn display_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    if relative.as_os_str().is_empty() {
        return ".".to_string();
    }
    relative.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.md"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path(Path::new("/abs/content"), Path::new("/site")),
            PathBuf::from("/abs/content")
        );
        assert_eq!(
            resolve_path(Path::new("content"), Path::new("/site")),
            PathBuf::from("/site/content")
        );
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("/site/content/a.md"), Path::new("/site")),
            "content/a.md"
        );
        assert_eq!(display_relative(Path::new("/other/a.md"), Path::new("/site")), "/other/a.md");
    }

    #[test]
    fn test_display_relative_root_is_dot() {
        assert_eq!(display_relative(Path::new("/site"), Path::new("/site")), ".");
        assert_eq!(display_relative(Path::new("/site/"), Path::new("/site")), ".");
    }
}
