//! Wikilink resolution against the registry.
//!
//! Three tiers, first hit wins:
//! 1. exact: trimmed, lower-cased page name
//! 2. cleaned: page name with every non-alphanumeric character removed
//! 3. fuzzy: first registry entry (insertion order) whose cleaned key equals
//!    the cleaned name, or contains it / is contained by it when both are
//!    longer than 3 characters
//!
//! The fuzzy tier is a linear scan of the registry. When two pages both
//! fuzzy-match, the earlier-inserted one wins.

use std::fmt;

use super::normalize::clean;
use super::parse::Wikilink;
use super::registry::Registry;
use crate::core::UrlPath;

/// Minimum cleaned length (exclusive) for substring matching.
const FUZZY_MIN_LEN: usize = 3;

/// Which resolution tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Cleaned,
    Fuzzy,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Cleaned => "cleaned",
            Self::Fuzzy => "fuzzy",
        })
    }
}

/// Look up a page name, reporting the tier that matched.
///
/// An empty name never matches.
pub fn lookup<'r>(page: &str, registry: &'r Registry) -> Option<(&'r UrlPath, MatchTier)> {
    let normalized = page.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some(url) = registry.get(&normalized) {
        return Some((url, MatchTier::Exact));
    }

    let cleaned = clean(&normalized);
    if let Some(url) = registry.get(&cleaned) {
        return Some((url, MatchTier::Cleaned));
    }

    registry
        .iter()
        .find(|(key, _)| fuzzy_match(&clean(key), &cleaned))
        .map(|(_, url)| (url, MatchTier::Fuzzy))
}

fn fuzzy_match(cleaned_key: &str, cleaned: &str) -> bool {
    cleaned_key == cleaned
        || (cleaned_key.len() > FUZZY_MIN_LEN
            && cleaned.len() > FUZZY_MIN_LEN
            && (cleaned_key.contains(cleaned) || cleaned.contains(cleaned_key)))
}

/// Resolve a parsed wikilink to its final URL, heading fragment included.
///
/// `None` means the page was not found; the caller renders a dead link.
pub fn resolve(link: &Wikilink, registry: &Registry) -> Option<String> {
    let (url, _) = lookup(&link.page, registry)?;
    Some(match &link.heading {
        Some(heading) => url.with_fragment(&slugify_heading(heading)),
        None => url.to_string(),
    })
}

/// Slugify heading text into an anchor.
///
/// Lower-case; drop everything but `[a-z0-9]`, whitespace and `-`;
/// collapse whitespace and hyphen runs into one `-`; trim `-` at both ends.
///
/// `"My Heading!"` -> `"my-heading"`
pub fn slugify_heading(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    let mut pending_dash = false;

    for c in heading.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    slug
}
