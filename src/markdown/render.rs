//! Syntax tree to HTML rendering.

use std::fmt::Write;

use crate::core::{encode_site_url, is_site_root};
use crate::utils::html::{escape, escape_attr, is_block_element, is_void_element};

use super::tree::{Document, Element, Image, Link, Node};

/// Render a document body to an HTML fragment.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::with_capacity(1024);
    render_nodes(&doc.children, &mut out);
    out
}

/// Wrap a rendered body in a minimal HTML page.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<article>\n{}</article>\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn render_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        render_node(node, out);
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, out),
        Node::Link(link) => render_link(link, out),
        Node::Image(image) => render_image(image, out),
        Node::Text(text) | Node::Code(text) => out.push_str(&escape(text)),
        Node::Html(html) => out.push_str(html),
    }
}

fn render_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    push_attrs(elem.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())), out);
    out.push('>');

    if is_void_element(&elem.tag) {
        if is_block_element(&elem.tag) {
            out.push('\n');
        }
        return;
    }

    render_nodes(&elem.children, out);
    let _ = write!(out, "</{}>", elem.tag);
    if is_block_element(&elem.tag) {
        out.push('\n');
    }
}

fn render_link(link: &Link, out: &mut String) {
    let href = href(&link.url);
    out.push_str("<a");
    push_attrs(std::iter::once(("href", href.as_str())), out);
    if let Some(title) = &link.title {
        push_attrs(std::iter::once(("title", title.as_str())), out);
    }
    if let Some(class) = &link.class {
        push_attrs(std::iter::once(("class", class.as_str())), out);
    }
    push_attrs(link.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())), out);
    out.push('>');
    render_nodes(&link.children, out);
    out.push_str("</a>");
}

fn render_image(image: &Image, out: &mut String) {
    let src = href(&image.url);
    out.push_str("<img");
    push_attrs([("src", src.as_str()), ("alt", image.alt.as_str())], out);
    if let Some(title) = &image.title {
        push_attrs(std::iter::once(("title", title.as_str())), out);
    }
    if let Some(class) = &image.class {
        push_attrs(std::iter::once(("class", class.as_str())), out);
    }
    out.push('>');
}

/// Site-root URLs are percent-encoded; everything else is emitted as written.
fn href(url: &str) -> String {
    if is_site_root(url) {
        encode_site_url(url)
    } else {
        url.to_string()
    }
}

fn push_attrs<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>, out: &mut String) {
    for (key, value) in attrs {
        let _ = write!(out, " {}=\"{}\"", key, escape_attr(value));
    }
}
