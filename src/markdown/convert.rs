//! Markdown to syntax tree conversion using pulldown-cmark.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::tree::{Document, Element, Image, Link, Node};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Open container on the conversion stack
enum Frame {
    Element(Element),
    Link(Link),
    /// Image alt text is collected from its children on close
    Image(Image, Vec<Node>),
    /// Children are spliced into the parent on close (HTML blocks)
    Transparent(Vec<Node>),
}

impl Frame {
    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self {
            Self::Element(e) => &mut e.children,
            Self::Link(l) => &mut l.children,
            Self::Image(_, children) | Self::Transparent(children) => children,
        }
    }
}

/// Markdown to syntax tree converter
struct MarkdownConverter {
    /// Stack of open containers (for nested structures)
    stack: Vec<Frame>,
    /// Root children (collected when stack is empty)
    root_children: Vec<Node>,
    /// Inside a fenced or indented code block
    in_code_block: bool,
    /// Inside a table header row (cells render as `th`)
    in_table_head: bool,
}

impl MarkdownConverter {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root_children: Vec::new(),
            in_code_block: false,
            in_table_head: false,
        }
    }

    /// Convert markdown string to a Document
    fn convert(mut self, markdown: &str, options: &MarkdownOptions) -> Document {
        let parser = Parser::new_ext(markdown, options.to_pulldown_options());

        for event in parser {
            self.handle_event(event);
        }

        // Close anything left open by a truncated event stream
        while !self.stack.is_empty() {
            self.close_frame();
        }
        Document::new(self.root_children)
    }

    /// Handle a single pulldown-cmark event
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) if self.in_code_block => self.add_code(text.as_ref()),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => {
                let mut elem = Element::new("code");
                elem.children.push(Node::Code(code.to_string()));
                self.add_node(Node::Element(elem));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                self.add_node(Node::Html(html.to_string()));
            }
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.add_node(Node::Element(Element::new("br"))),
            Event::Rule => self.add_node(Node::Element(Element::new("hr"))),
            Event::FootnoteReference(name) => self.add_footnote_ref(name.as_ref()),
            Event::TaskListMarker(checked) => self.add_task_marker(checked),
            Event::InlineMath(math) => self.add_math(math.as_ref(), false),
            Event::DisplayMath(math) => self.add_math(math.as_ref(), true),
        }
    }

    /// Start a new tag (push onto stack)
    fn start_tag(&mut self, tag: Tag) {
        let frame = match tag {
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link(Link {
                url: dest_url.to_string(),
                title: (!title.is_empty()).then(|| title.to_string()),
                ..Link::default()
            }),
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut image = Image::new(dest_url.to_string(), "");
                image.title = (!title.is_empty()).then(|| title.to_string());
                Frame::Image(image, Vec::new())
            }
            Tag::HtmlBlock | Tag::MetadataBlock(_) => Frame::Transparent(Vec::new()),
            Tag::CodeBlock(kind) => {
                self.in_code_block = true;
                let mut code = Element::new("code");
                if let CodeBlockKind::Fenced(lang) = kind
                    && let Some(lang) = lang.split_whitespace().next()
                {
                    code = code.with_attr("class", format!("language-{lang}"));
                }
                self.stack.push(Frame::Element(Element::new("pre")));
                Frame::Element(code)
            }
            Tag::TableHead => {
                self.in_table_head = true;
                Frame::Element(Element::new("thead"))
            }
            Tag::TableCell if self.in_table_head => Frame::Element(Element::new("th")),
            other => Frame::Element(tag_to_element(&other)),
        };
        self.stack.push(frame);
    }

    /// End a tag (pop from stack)
    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                // <code> then its <pre> wrapper
                self.close_frame();
                self.close_frame();
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.close_frame();
            }
            _ => self.close_frame(),
        }
    }

    fn close_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Element(e) => self.add_node(Node::Element(e)),
            Frame::Link(l) => self.add_node(Node::Link(l)),
            Frame::Image(mut image, children) => {
                image.alt = children.iter().map(Node::text_content).collect();
                self.add_node(Node::Image(image));
            }
            Frame::Transparent(children) => {
                for child in children {
                    self.add_node(child);
                }
            }
        }
    }

    /// Add text content, merging with a preceding text leaf.
    ///
    /// pulldown-cmark splits text around unmatched brackets, so `[[A]]`
    /// arrives as several events; merging restores it as one leaf.
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(prev)) = self.current_children().last_mut() {
            prev.push_str(text);
            return;
        }
        self.add_node(Node::text(text));
    }

    fn add_code(&mut self, code: &str) {
        if let Some(Node::Code(prev)) = self.current_children().last_mut() {
            prev.push_str(code);
            return;
        }
        self.add_node(Node::Code(code.to_string()));
    }

    /// Add footnote reference
    fn add_footnote_ref(&mut self, name: &str) {
        let mut link = Link::new(format!("#fn-{name}"), format!("[{name}]"));
        link.attrs.push(("id".to_string(), format!("fnref-{name}")));

        let mut sup = Element::new("sup").with_attr("class", "footnote-ref");
        sup.children.push(Node::Link(link));
        self.add_node(Node::Element(sup));
    }

    /// Add task list marker
    fn add_task_marker(&mut self, checked: bool) {
        let mut input = Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr("disabled", "");
        if checked {
            input = input.with_attr("checked", "");
        }
        self.add_node(Node::Element(input));
    }

    /// Math is passed through as code for a client-side renderer
    fn add_math(&mut self, formula: &str, display: bool) {
        let (tag, class) = if display {
            ("div", "math math-display")
        } else {
            ("span", "math math-inline")
        };
        let mut elem = Element::new(tag).with_attr("class", class);
        elem.children.push(Node::Code(formula.to_string()));
        self.add_node(Node::Element(elem));
    }

    fn current_children(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => frame.children_mut(),
            None => &mut self.root_children,
        }
    }

    /// Add a node to current context (top of stack or root)
    fn add_node(&mut self, node: Node) {
        self.current_children().push(node);
    }
}

/// Convert pulldown-cmark Tag to an empty element
fn tag_to_element(tag: &Tag) -> Element {
    match tag {
        // Block elements
        Tag::Paragraph => Element::new("p"),
        Tag::Heading { level, id, .. } => {
            let elem = Element::new(heading_level_to_tag(*level));
            match id {
                Some(id) => elem.with_attr("id", id.to_string()),
                None => elem,
            }
        }
        Tag::BlockQuote(_) => Element::new("blockquote"),
        Tag::List(Some(start)) if *start != 1 => {
            Element::new("ol").with_attr("start", start.to_string())
        }
        Tag::List(Some(_)) => Element::new("ol"),
        Tag::List(None) => Element::new("ul"),
        Tag::Item => Element::new("li"),
        Tag::FootnoteDefinition(name) => Element::new("div")
            .with_attr("class", "footnote")
            .with_attr("id", format!("fn-{name}")),

        // Table elements
        Tag::Table(_) => Element::new("table"),
        Tag::TableHead => Element::new("thead"),
        Tag::TableRow => Element::new("tr"),
        Tag::TableCell => Element::new("td"),

        // Inline elements
        Tag::Emphasis => Element::new("em"),
        Tag::Strong => Element::new("strong"),
        Tag::Strikethrough => Element::new("del"),
        Tag::Superscript => Element::new("sup"),
        Tag::Subscript => Element::new("sub"),

        // Definition list (extended syntax)
        Tag::DefinitionList => Element::new("dl"),
        Tag::DefinitionListTitle => Element::new("dt"),
        Tag::DefinitionListDefinition => Element::new("dd"),

        // Handled by the converter before reaching here
        Tag::CodeBlock(_)
        | Tag::HtmlBlock
        | Tag::MetadataBlock(_)
        | Tag::Link { .. }
        | Tag::Image { .. } => Element::new("div"),
    }
}

/// Convert heading level to tag name
fn heading_level_to_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Convert markdown string to a Document
pub fn from_markdown(markdown: &str, options: &MarkdownOptions) -> Document {
    MarkdownConverter::new().convert(markdown, options)
}
