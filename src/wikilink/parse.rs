//! Wikilink grammar.
//!
//! ```text
//! [[page]]
//! [[page|Display Text]]
//! [[page#Heading]]
//! [[page#Heading|Display Text]]
//! ![[image-or-page]]
//! ```
//!
//! The first `|` and the first `#` are significant; later ones are literal.
//! Brackets do not nest.

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy bracket pair, optionally prefixed with `!`.
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[\[([^\]]+?)\]\]").expect("wikilink pattern is valid"));

/// Marker that must be present for a text node to contain wikilinks.
pub const WIKILINK_MARKER: &str = "[[";

/// A parsed wikilink reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wikilink {
    /// Target page name (trimmed). May be empty.
    pub page: String,
    /// Heading fragment, as written.
    pub heading: Option<String>,
    /// Display alias.
    pub alias: Option<String>,
    /// `![[...]]` form.
    pub embed: bool,
}

impl Wikilink {
    /// Parse one raw match such as `![[page#Heading|Alias]]`.
    ///
    /// Never fails: degenerate input yields an empty page name.
    pub fn parse(raw: &str) -> Self {
        let embed = raw.starts_with('!');
        let content = raw
            .strip_prefix("![[")
            .or_else(|| raw.strip_prefix("[["))
            .unwrap_or(raw);
        let content = content.strip_suffix("]]").unwrap_or(content);

        let (target, alias) = match content.split_once('|') {
            Some((target, alias)) => (target, non_empty(alias)),
            None => (content, None),
        };

        let (page, heading) = match target.split_once('#') {
            Some((page, heading)) => (page, non_empty(heading)),
            None => (target, None),
        };

        Self {
            page: page.trim().to_string(),
            heading,
            alias,
            embed,
        }
    }

    /// Text shown for the link: the alias, else the page name.
    #[inline]
    pub fn display(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.page)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// A piece of text split around wikilinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text between wikilinks
    Text(&'a str),
    /// A raw wikilink match, brackets included
    Link(&'a str),
}

/// Split text into plain-text and wikilink segments, left to right.
///
/// Empty text segments are omitted. Unterminated `[[` is plain text.
pub fn split(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in WIKILINK_RE.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Link(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(page: &str, heading: Option<&str>, alias: Option<&str>, embed: bool) -> Wikilink {
        Wikilink {
            page: page.to_string(),
            heading: heading.map(String::from),
            alias: alias.map(String::from),
            embed,
        }
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Wikilink::parse("[[Page]]"), link("Page", None, None, false));
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            Wikilink::parse("[[page|Display Text]]"),
            link("page", None, Some("Display Text"), false)
        );
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(
            Wikilink::parse("[[page#My Heading]]"),
            link("page", Some("My Heading"), None, false)
        );
    }

    #[test]
    fn test_parse_heading_and_alias() {
        assert_eq!(
            Wikilink::parse("[[ page # Heading | Text ]]"),
            link("page", Some("Heading"), Some("Text"), false)
        );
    }

    #[test]
    fn test_parse_embed_with_alias() {
        assert_eq!(
            Wikilink::parse("![[diagram.png|Figure 1]]"),
            link("diagram.png", None, Some("Figure 1"), true)
        );
    }

    #[test]
    fn test_parse_later_separators_are_literal() {
        assert_eq!(
            Wikilink::parse("[[a#b#c|d|e]]"),
            link("a", Some("b#c"), Some("d|e"), false)
        );
        // `#` inside the alias is not a heading separator
        assert_eq!(
            Wikilink::parse("[[a|issue #4]]"),
            link("a", None, Some("issue #4"), false)
        );
    }

    #[test]
    fn test_parse_degenerate() {
        assert_eq!(Wikilink::parse("[[ ]]"), link("", None, None, false));
        assert_eq!(Wikilink::parse("[[#Intro]]"), link("", Some("Intro"), None, false));
        // Empty alias and heading are absent
        assert_eq!(Wikilink::parse("[[a#|]]"), link("a", None, None, false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Wikilink::parse("[[B|Beta]]").display(), "Beta");
        assert_eq!(Wikilink::parse("[[B]]").display(), "B");
    }

    #[test]
    fn test_split_order() {
        assert_eq!(
            split("See [[A]] and [[B|Beta]] for more."),
            [
                Segment::Text("See "),
                Segment::Link("[[A]]"),
                Segment::Text(" and "),
                Segment::Link("[[B|Beta]]"),
                Segment::Text(" for more."),
            ]
        );
    }

    #[test]
    fn test_split_adjacent_and_embed() {
        assert_eq!(
            split("![[img.png]][[A]]"),
            [Segment::Link("![[img.png]]"), Segment::Link("[[A]]")]
        );
    }

    #[test]
    fn test_split_unterminated_is_text() {
        assert_eq!(split("broken [[link"), [Segment::Text("broken [[link")]);
        assert_eq!(split("[[]]"), [Segment::Text("[[]]")]);
    }

    #[test]
    fn test_split_non_greedy() {
        assert_eq!(
            split("[[a]] x ]]"),
            [Segment::Link("[[a]]"), Segment::Text(" x ]]")]
        );
        // No nesting: an extra `[` becomes part of the page name
        assert_eq!(split("[[[a]]"), [Segment::Link("[[[a]]")]);
        assert_eq!(Wikilink::parse("[[[a]]").page, "[a");
    }
}
