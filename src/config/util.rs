//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// ```text
/// /home/user/notes/content/Articles/  ← cwd
/// /home/user/notes/wikiweave.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk up from `start` until `config_name` exists.
///
/// An absolute `config_name` is only checked as-is.
pub fn find_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_upward_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("content/Articles");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("wikiweave.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("wikiweave.toml")).unwrap();
        assert_eq!(found, temp.path().join("wikiweave.toml"));
    }

    #[test]
    fn test_find_upward_ignores_directories() {
        let temp = TempDir::new().unwrap();
        let name = Path::new("wikiweave-4f1c.toml");
        fs::create_dir_all(temp.path().join(name)).unwrap();
        assert!(find_upward(temp.path(), name).is_none());
    }

    #[test]
    fn test_find_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert!(find_upward(Path::new("/"), &path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_upward(Path::new("/"), &path), Some(path));
    }
}
