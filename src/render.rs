//! Pure tree renderer.
//!
//! [`render_node`] maps a [`SplitNode`] to an abstract [`RenderNode`]
//! fragment. Nothing here touches a browser: the UI crate walks the result
//! and builds live DOM from it, while tests and the CLI inspect or print it.
//!
//! A node renders as, in order:
//! - a link to the dictionary page for its word (when it has one),
//! - up to `max_definitions` definition lines,
//! - a container with one entry per present child, prefix first.

use std::fmt;

use crate::config::{ClientConfig, Layout};
use crate::lookup::dictionary_link;
use crate::tree::SplitNode;

/// Id of the element wrapping a rendered tree.
pub const TREE_ID: &str = "tree";

/// A plain-value element tree, independent of any DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Element(Element),
    Text(String),
}

/// An HTML element with its attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(RenderNode::Text(text.into()))
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

impl RenderNode {
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            RenderNode::Element(e) => Some(e.tag),
            RenderNode::Text(_) => None,
        }
    }

    /// Value of an attribute on this element.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            RenderNode::Element(e) => e
                .attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            RenderNode::Text(_) => None,
        }
    }

    pub fn child_nodes(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element(e) => &e.children,
            RenderNode::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            RenderNode::Text(t) => out.push_str(t),
            RenderNode::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// All descendant elements (including self) with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&RenderNode> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a RenderNode>) {
        if let RenderNode::Element(e) = self {
            if e.tag == tag {
                found.push(self);
            }
            e.children.iter().for_each(|c| c.collect_tag(tag, found));
        }
    }
}

fn escape_into(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

/// Serializes as escaped HTML.
impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderNode::Text(t) => escape_into(f, t),
            RenderNode::Element(e) => {
                write!(f, "<{}", e.tag)?;
                for (name, value) in &e.attrs {
                    write!(f, " {name}=\"")?;
                    escape_into(f, value)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for child in &e.children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{}>", e.tag)
            }
        }
    }
}

/// Render one node and its descendants. An absent node renders nothing.
pub fn render_node(node: Option<&SplitNode>, config: &ClientConfig) -> Vec<RenderNode> {
    let Some(node) = node else {
        return Vec::new();
    };

    let mut fragment: Vec<RenderNode> = Vec::new();

    if let Some(word) = &node.word {
        fragment.push(
            Element::new("a")
                .attr("href", dictionary_link(config, word))
                .text(word.clone())
                .into(),
        );
    }

    fragment.extend(node.defns.iter().take(config.max_definitions).map(|defn| {
        RenderNode::from(Element::new("div").attr("class", "defn").text(defn.clone()))
    }));

    if node.has_children() {
        fragment.push(render_children(node, config));
    }

    fragment
}

fn render_children(node: &SplitNode, config: &ClientConfig) -> RenderNode {
    let sides = [node.prefix.as_deref(), node.suffix.as_deref()];
    let present = sides.into_iter().flatten();

    match config.layout {
        Layout::List => Element::new("ul")
            .attr("class", "split")
            .children(present.map(|child| {
                RenderNode::from(Element::new("li").children(render_node(Some(child), config)))
            }))
            .into(),
        Layout::Table => {
            let row = Element::new("tr").children(present.map(|child| {
                RenderNode::from(Element::new("td").children(render_node(Some(child), config)))
            }));
            Element::new("table").child(row.into()).into()
        }
    }
}

/// Render a whole response, wrapped in `<div id="tree">`.
pub fn render_result(tree: &SplitNode, config: &ClientConfig) -> RenderNode {
    Element::new("div")
        .attr("id", TREE_ID)
        .children(render_node(Some(tree), config))
        .into()
}

/// Indented plain-text rendition for terminals.
///
/// ```text
/// handschuh  (glove)
///   hand  (hand)
///   schuh  (shoe; shoes)
/// ```
pub fn render_outline(tree: &SplitNode, config: &ClientConfig) -> String {
    let mut out = String::new();
    outline_into(tree, config, 0, &mut out);
    out
}

fn outline_into(node: &SplitNode, config: &ClientConfig, depth: usize, out: &mut String) {
    let defns: Vec<&str> = node
        .defns
        .iter()
        .take(config.max_definitions)
        .map(String::as_str)
        .collect();

    let label = match (&node.word, defns.is_empty()) {
        (Some(word), true) => word.clone(),
        (Some(word), false) => format!("{word}  ({})", defns.join("; ")),
        (None, false) => format!("({})", defns.join("; ")),
        (None, true) if node.has_children() => "*".to_string(),
        (None, true) => String::new(),
    };

    if !label.is_empty() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&label);
        out.push('\n');
    }

    for child in node.children() {
        outline_into(child, config, depth + 1, out);
    }
}
