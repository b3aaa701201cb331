//! Owned markdown syntax tree.
//!
//! The tree is an ordered forest of nodes. Transforms may splice a child
//! sequence (replace one child with zero or more children) but otherwise
//! leave the structure alone.

/// A parsed markdown document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

/// A node in the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Generic element (`p`, `h2`, `li`, `em`, ...).
    Element(Element),
    /// Hyperlink.
    Link(Link),
    /// Image.
    Image(Image),
    /// Plain text. The only text-bearing leaf wikilinks are searched in.
    Text(String),
    /// Literal code (inline code or code block contents), rendered escaped.
    Code(String),
    /// Raw HTML, rendered verbatim.
    Html(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub class: Option<String>,
    /// Extra attributes (`target`, `rel`).
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub url: String,
    pub alt: String,
    pub title: Option<String>,
    pub class: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: vec![Node::Text(text.into())],
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Image {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Node {
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Child sequence of container nodes.
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Self::Element(e) => Some(&e.children),
            Self::Link(l) => Some(&l.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Element(e) => Some(&mut e.children),
            Self::Link(l) => Some(&mut l.children),
            _ => None,
        }
    }

    /// Concatenated text content (text and code leaves).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) | Self::Code(t) => out.push_str(t),
            Self::Image(img) => out.push_str(&img.alt),
            Self::Html(_) => {}
            Self::Element(_) | Self::Link(_) => {
                for child in self.children().into_iter().flatten() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Child sequence of the container at `path` (indices from the root).
    ///
    /// An empty path addresses the document's own children.
    pub fn children_at_mut(&mut self, path: &[usize]) -> Option<&mut Vec<Node>> {
        let mut children = &mut self.children;
        for &index in path {
            children = children.get_mut(index)?.children_mut()?;
        }
        Some(children)
    }

    /// Visit every node depth-first, in document order.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        fn visit<'a>(nodes: &'a [Node], f: &mut impl FnMut(&'a Node)) {
            for node in nodes {
                f(node);
                if let Some(children) = node.children() {
                    visit(children, f);
                }
            }
        }
        visit(&self.children, &mut f);
    }

    /// Visit every link mutably, depth-first.
    pub fn for_each_link_mut(&mut self, mut f: impl FnMut(&mut Link)) {
        fn visit(nodes: &mut [Node], f: &mut impl FnMut(&mut Link)) {
            for node in nodes {
                if let Node::Link(link) = node {
                    f(link);
                }
                if let Some(children) = node.children_mut() {
                    visit(children, f);
                }
            }
        }
        visit(&mut self.children, &mut f);
    }
}
