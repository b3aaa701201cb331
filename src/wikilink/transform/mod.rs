//! Wikilink rewriting over a markdown syntax tree.
//!
//! Text leaves containing `[[` are located first, then rewritten from the
//! last one to the first. Replacing a leaf with several nodes shifts the
//! indices of its later siblings; working backwards means no location that
//! is still pending is ever shifted.

use std::fmt;

use super::parse::{Segment, WIKILINK_MARKER, Wikilink, split};
use super::registry::Registry;
use super::resolve::resolve;
use crate::markdown::{Document, Image, Link, Node};
use crate::utils::html::{escape, escape_attr};

/// CSS class of resolved wikilinks.
pub const LINK_CLASS: &str = "wikilink";
/// CSS class of resolved embeds.
pub const EMBED_CLASS: &str = "wikilink-embed";
/// CSS class of dead-link placeholders.
pub const DEAD_CLASS: &str = "wikilink-dead";

/// Replacement for one segment of a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedNode {
    Link { url: String, text: String },
    Image { url: String, alt: String },
    DeadLink { page: String, display: String },
    PlainText(String),
}

impl ResolvedNode {
    /// Parse and resolve one raw wikilink match.
    pub fn from_raw(raw: &str, registry: &Registry) -> Self {
        let link = Wikilink::parse(raw);
        let display = link.display().to_string();

        match resolve(&link, registry) {
            Some(url) if link.embed => Self::Image { url, alt: display },
            Some(url) => Self::Link { url, text: display },
            None => Self::DeadLink {
                page: link.page,
                display,
            },
        }
    }

    fn into_node(self) -> Node {
        match self {
            Self::Link { url, text } => Node::Link(Link::new(url, text).with_class(LINK_CLASS)),
            Self::Image { url, alt } => Node::Image(Image::new(url, alt).with_class(EMBED_CLASS)),
            Self::DeadLink { page, display } => Node::Html(dead_link_html(&page, &display)),
            Self::PlainText(text) => Node::Text(text),
        }
    }
}

/// Inline markup for an unresolved wikilink.
pub fn dead_link_html(page: &str, display: &str) -> String {
    format!(
        r#"<span class="{DEAD_CLASS}" title="Page not found: {}">{}</span>"#,
        escape_attr(page),
        escape(display)
    )
}

/// A wikilink that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    /// Source document the link appears in.
    pub source: String,
    /// The raw match, brackets included.
    pub raw: String,
    /// Page name that failed to resolve.
    pub page: String,
}

impl fmt::Display for DeadLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dead wikilink: {} - page \"{}\" not found", self.raw, self.page)
    }
}

/// Split a text leaf into its replacement sequence.
///
/// Dead links found along the way are appended to `dead`.
pub fn rewrite_text(
    text: &str,
    registry: &Registry,
    source: &str,
    dead: &mut Vec<DeadLink>,
) -> Vec<ResolvedNode> {
    split(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => ResolvedNode::PlainText(text.to_string()),
            Segment::Link(raw) => {
                let node = ResolvedNode::from_raw(raw, registry);
                if let ResolvedNode::DeadLink { page, .. } = &node {
                    dead.push(DeadLink {
                        source: source.to_string(),
                        raw: raw.to_string(),
                        page: page.clone(),
                    });
                }
                node
            }
        })
        .collect()
}

/// Rewrite every wikilink in `doc`.
///
/// Returns the dead links in document order. Never fails: unresolved
/// links become dead-link placeholders.
pub fn transform(doc: &mut Document, registry: &Registry, source: &str) -> Vec<DeadLink> {
    let targets = collect_targets(doc);
    let mut per_target = Vec::with_capacity(targets.len());

    for (parent, index) in targets.into_iter().rev() {
        let Some(children) = doc.children_at_mut(&parent) else {
            continue;
        };
        let Some(Node::Text(text)) = children.get(index) else {
            continue;
        };

        let mut dead = Vec::new();
        let nodes: Vec<Node> = rewrite_text(text, registry, source, &mut dead)
            .into_iter()
            .map(ResolvedNode::into_node)
            .collect();

        children.splice(index..=index, nodes);
        per_target.push(dead);
    }

    per_target.into_iter().rev().flatten().collect()
}

/// Locations `(parent path, child index)` of text leaves that may hold
/// wikilinks, in document order.
fn collect_targets(doc: &Document) -> Vec<(Vec<usize>, usize)> {
    fn visit(nodes: &[Node], path: &mut Vec<usize>, out: &mut Vec<(Vec<usize>, usize)>) {
        for (index, node) in nodes.iter().enumerate() {
            match node {
                Node::Text(text) if text.contains(WIKILINK_MARKER) => {
                    out.push((path.clone(), index));
                }
                _ => {
                    if let Some(children) = node.children() {
                        path.push(index);
                        visit(children, path, out);
                        path.pop();
                    }
                }
            }
        }
    }

    let mut out = Vec::new();
    visit(&doc.children, &mut Vec::new(), &mut out);
    out
}
