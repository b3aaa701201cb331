//! Heading anchors.
//!
//! Headings without an explicit `{#id}` get one derived from their text, so
//! `[[page#Heading]]` fragments land on the heading. Repeated slugs get a
//! `-1`, `-2`, ... suffix.

use rustc_hash::FxHashMap;

use super::tree::{Document, Element, Node};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Assign ids to headings that have none. Returns the number assigned.
pub fn assign_heading_ids(doc: &mut Document, slugify: impl Fn(&str) -> String) -> usize {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut assigned = 0;
    visit(&mut doc.children, &slugify, &mut seen, &mut assigned);
    assigned
}

fn visit(
    nodes: &mut [Node],
    slugify: &impl Fn(&str) -> String,
    seen: &mut FxHashMap<String, usize>,
    assigned: &mut usize,
) {
    for node in nodes {
        if let Node::Element(elem) = node
            && is_heading(elem)
        {
            let id = match elem.get_attr("id") {
                Some(id) => id.to_string(),
                None => {
                    let text: String = elem.children.iter().map(Node::text_content).collect();
                    let id = unique(slugify(&text), seen);
                    elem.attrs.push(("id".to_string(), id.clone()));
                    *assigned += 1;
                    id
                }
            };
            seen.entry(id).or_insert(0);
            continue;
        }
        if let Some(children) = node.children_mut() {
            visit(children, slugify, seen, assigned);
        }
    }
}

fn is_heading(elem: &Element) -> bool {
    HEADING_TAGS.contains(&elem.tag.as_str())
}

fn unique(slug: String, seen: &mut FxHashMap<String, usize>) -> String {
    let Some(&last) = seen.get(&slug) else {
        return slug;
    };
    let mut count = last;
    let candidate = loop {
        count += 1;
        let candidate = format!("{slug}-{count}");
        if !seen.contains_key(&candidate) {
            break candidate;
        }
    };
    seen.insert(slug, count);
    candidate
}
