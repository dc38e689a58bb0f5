//! The renderable output tree.
//!
//! Components build a fresh [`Node`] tree on every render. Hosts either walk
//! the tree themselves or serialize it with [`Node::to_markup`].

use crate::event::{Event, EventKind, Listener, Listeners};
use crate::slot::{Props, Slot};
use crate::value::{Attrs, Value};
use std::fmt::Write;
use std::rc::Rc;

/// SVG shapes serialized as self-closing tags when they have no children.
const SELF_CLOSING: &[&str] = &["circle", "ellipse", "line", "path", "polygon", "polyline", "rect"];

/// A node in the output tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    Element(Element),
    Text(String),
    /// An ordered, possibly nested, sequence of nodes.
    Fragment(Vec<Node>),
    /// A slot marker. Renders nothing; parents intercept it before rendering.
    Slot(Slot),
    #[default]
    Empty,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(nodes.into_iter().collect())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_slot(&self) -> Option<&Slot> {
        match self {
            Node::Slot(slot) => Some(slot),
            _ => None,
        }
    }

    /// Whether this node renders no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty | Node::Slot(_) => true,
            Node::Text(text) => text.is_empty(),
            Node::Fragment(nodes) => nodes.iter().all(Node::is_empty),
            Node::Element(_) => false,
        }
    }

    /// Serialize to HTML/SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// Append markup for this node to `out`.
    pub fn write_markup(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_markup(out),
            Node::Text(text) => escape_into(out, text, false),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_markup(out);
                }
            }
            Node::Slot(_) | Node::Empty => {}
        }
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
            Node::Slot(_) | Node::Empty => {}
        }
    }

    /// First element in pre-order carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        let mut found = None;
        self.visit(&mut |element| {
            if found.is_none() && element.has_class(class) {
                found = Some(element);
            }
        });
        found
    }

    /// Every element in pre-order carrying `class`.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.visit(&mut |element| {
            if element.has_class(class) {
                found.push(element);
            }
        });
        found
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        match self {
            Node::Element(element) => {
                f(element);
                for child in &element.children {
                    child.visit(f);
                }
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.visit(f);
                }
            }
            Node::Text(_) | Node::Slot(_) | Node::Empty => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Slot> for Node {
    fn from(slot: Slot) -> Self {
        Node::Slot(slot)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or(Node::Empty, Into::into)
    }
}

/// A tagged element with attributes, classes, listeners and children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    classes: Vec<String>,
    listeners: Listeners,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            classes: Vec::new(),
            listeners: Listeners::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. A `class` attribute is merged into the class list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            return self.class(value.to_string());
        }
        self.attrs.set(name, value);
        self
    }

    /// Set every attribute of `attrs`, in order.
    pub fn attrs(mut self, attrs: &Attrs) -> Self {
        for (name, value) in attrs.iter() {
            self = self.attr(name, value.clone());
        }
        self
    }

    /// Append a class. Empty strings are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let trimmed = class.trim();
        if !trimmed.is_empty() {
            self.classes.push(trimmed.to_string());
        }
        self
    }

    /// Append several classes in order.
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self = self.class(class);
        }
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Attach a listener closure for `kind`.
    pub fn on<F>(self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        self.listener(kind, Rc::new(listener))
    }

    pub fn listener(mut self, kind: EventKind, listener: Listener) -> Self {
        self.listeners.set(kind, listener);
        self
    }

    /// Merge a whole listener set onto this element.
    pub fn listeners(mut self, listeners: &Listeners) -> Self {
        self.listeners.extend(listeners);
        self
    }

    /// Spread a slot instance onto this element.
    ///
    /// The instance's classes follow the classes already set, so a
    /// structural class and a caller class both survive. Attributes and
    /// listeners are merged and the instance content becomes children.
    pub fn spread(self, props: &Props) -> Self {
        self.classes(props.classes.iter().cloned())
            .attrs(&props.attrs)
            .listeners(&props.listeners)
            .children(props.content.iter().cloned())
    }

    /// Deliver a host event of `kind` to this element.
    ///
    /// Returns whether a listener ran. Elements without a listener for
    /// `kind` ignore the event.
    pub fn dispatch(&self, kind: EventKind) -> bool {
        self.listeners.fire(&Event::new(kind))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn get_attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().flat_map(|c| c.split_whitespace())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().any(|c| c == class)
    }

    /// The space-joined `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.class_list().collect::<Vec<_>>().join(" ")
    }

    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    pub fn get_listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Element children only, skipping text and empty nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            escape_into(out, &self.class_attr(), true);
            out.push('"');
        }

        for (name, value) in self.attrs.iter() {
            if !is_attribute_name(name) {
                tracing::warn!("Skipping invalid attribute name '{}' on <{}>", name, self.tag);
                continue;
            }
            match value {
                Value::Bool(false) => {}
                Value::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                other => {
                    let _ = write!(out, " {}=\"", name);
                    escape_into(out, &other.to_string(), true);
                    out.push('"');
                }
            }
        }

        if self.children.is_empty() && SELF_CLOSING.contains(&self.tag.as_str()) {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Characters that would end the tag or start another attribute.
const NAME_BREAKERS: &[char] = &['"', '\'', '>', '<', '/', '='];

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || NAME_BREAKERS.contains(&c))
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
