//! Front matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Page metadata read from front matter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
}

/// Split front matter from the body.
///
/// Returns `(meta, body)`; documents without front matter get default
/// metadata and their full source as body.
pub fn extract_frontmatter(content: &str) -> Result<(PageMeta, &str)> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => {
            let meta = toml::from_str(fm).map_err(|e| anyhow!("invalid TOML front matter: {e}"))?;
            Ok((meta, body))
        }
        Some((fm, body, false)) => Ok((parse_yaml_like(fm), body)),
        None => Ok((PageMeta::default(), content)),
    }
}

/// Parse simple YAML-like front matter (`key: value` lines).
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut meta = PageMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':')
            && key.trim().eq_ignore_ascii_case("title")
        {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            if !value.is_empty() {
                meta.title = Some(value.to_string());
            }
        }
    }

    meta
}

/// Detect and extract front matter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let fm = rest[..end].trim();
            let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: \"Hello\"\ndate: 2024-01-01\n---\n\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ntags = [\"a\"]\n+++\n\nBody";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_invalid_toml_frontmatter() {
        assert!(extract_frontmatter("+++\ntitle = \n+++\n").is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        let (meta, body) = extract_frontmatter("# Just [[content]]").unwrap();
        assert_eq!(meta, PageMeta::default());
        assert_eq!(body, "# Just [[content]]");
    }
}
