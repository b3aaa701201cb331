//! Open external links in a new tab.

use crate::core::is_http;

use super::tree::Document;

/// Add `target="_blank"` and `rel="noopener noreferrer"` to every
/// `http://` / `https://` link. Returns the number of links updated.
pub fn mark_external_links(doc: &mut Document) -> usize {
    let mut count = 0;
    doc.for_each_link_mut(|link| {
        if !is_http(&link.url) {
            return;
        }
        for (key, value) in [("target", "_blank"), ("rel", "noopener noreferrer")] {
            match link.attrs.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => *v = value.to_string(),
                None => link.attrs.push((key.to_string(), value.to_string())),
            }
        }
        count += 1;
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{MarkdownOptions, from_markdown, render_document};

    #[test]
    fn test_external_links_marked() {
        let mut doc = from_markdown(
            "[a](https://example.com) [b](/about) [c](mailto:x@y.z)",
            &MarkdownOptions::all(),
        );
        assert_eq!(mark_external_links(&mut doc), 1);
        assert_eq!(
            render_document(&doc),
            "<p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">a</a> \
             <a href=\"/about\">b</a> <a href=\"mailto:x@y.z\">c</a></p>\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let mut doc = from_markdown("[a](http://example.com)", &MarkdownOptions::all());
        mark_external_links(&mut doc);
        mark_external_links(&mut doc);
        let mut attrs = Vec::new();
        doc.for_each_link_mut(|link| attrs = link.attrs.clone());
        assert_eq!(attrs.len(), 2);
    }
}
