//! Page link graph (`graph.json`).
//!
//! Nodes are built pages, keyed by URL. Edges are resolved wikilinks between
//! them. Embeds are not edges.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::markdown::{Document, Node};
use crate::wikilink::LINK_CLASS;

/// File name of the graph, written at the output root.
pub const GRAPH_FILE: &str = "graph.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Page URL
    pub id: String,
    pub title: String,
    /// Source document path relative to the content root
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Wikilink,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Incremental graph construction.
///
/// Nodes keep insertion order. Edges are collected from page trees and
/// filtered once every node is known.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    ids: FxHashSet<String>,
    edges: FxHashSet<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page and the wikilinks in its transformed tree.
    pub fn add_page(&mut self, id: &str, title: &str, path: &str, doc: &Document) {
        if self.ids.insert(id.to_string()) {
            self.nodes.push(GraphNode {
                id: id.to_string(),
                title: title.to_string(),
                path: path.to_string(),
            });
        }

        doc.walk(|node| {
            if let Node::Link(link) = node
                && link.class.as_deref() == Some(LINK_CLASS)
            {
                let target = strip_fragment(&link.url);
                if target != id {
                    self.edges.insert((id.to_string(), target.to_string()));
                }
            }
        });
    }

    /// Finish: drop edges to unknown pages and sort the rest.
    pub fn finish(self) -> Graph {
        let mut edges: Vec<GraphEdge> = self
            .edges
            .into_iter()
            .filter(|(_, target)| self.ids.contains(target))
            .map(|(source, target)| GraphEdge {
                source,
                target,
                kind: EdgeKind::Wikilink,
            })
            .collect();
        edges.sort();

        Graph {
            nodes: self.nodes,
            edges,
        }
    }
}

fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{Element, Image, Link};

    fn page(links: &[Node]) -> Document {
        let mut p = Element::new("p");
        p.children.extend(links.iter().cloned());
        Document::new(vec![Node::Element(p)])
    }

    fn wikilink(url: &str) -> Node {
        Node::Link(Link::new(url, "x").with_class(LINK_CLASS))
    }

    #[test]
    fn test_edges_from_wikilinks_only() {
        let mut builder = GraphBuilder::new();
        builder.add_page(
            "/a",
            "A",
            "a.md",
            &page(&[
                wikilink("/b#intro"),
                wikilink("/b"),
                wikilink("/a"),
                Node::Link(Link::new("/c", "plain")),
                Node::Image(Image::new("/c", "embed").with_class("wikilink-embed")),
                wikilink("/missing"),
            ]),
        );
        builder.add_page("/b", "B", "b.md", &page(&[wikilink("/a")]));
        builder.add_page("/c", "C", "c.md", &page(&[]));
        let graph = builder.finish();

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["/a", "/b", "/c"]);

        let edges: Vec<_> = graph
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(edges, [("/a", "/b"), ("/b", "/a")]);
    }

    #[test]
    fn test_serialize_shape() {
        let mut builder = GraphBuilder::new();
        builder.add_page("/a", "A", "a.md", &page(&[wikilink("/b")]));
        builder.add_page("/b", "B", "b.md", &page(&[]));

        let json = serde_json::to_value(builder.finish()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [
                    {"id": "/a", "title": "A", "path": "a.md"},
                    {"id": "/b", "title": "B", "path": "b.md"}
                ],
                "edges": [
                    {"source": "/a", "target": "/b", "type": "wikilink"}
                ]
            })
        );
    }

    #[test]
    fn test_empty() {
        let graph = GraphBuilder::new().finish();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }
}
