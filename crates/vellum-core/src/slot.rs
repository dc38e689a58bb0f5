//! Slot markers and the composer that pulls them out of a children tree.
//!
//! A compound component (a panel with a header, a legend with items) lets
//! callers describe its auxiliary structure as marker nodes mixed into its
//! children:
//!
//! ```
//! use vellum_core::{Node, SlotComposer, SlotKind, SlotMode};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum CardSlot {
//!     Title,
//! }
//!
//! impl SlotKind for CardSlot {
//!     const OWNER: &'static str = "card";
//!     fn name(self) -> &'static str {
//!         "title"
//!     }
//! }
//!
//! let children = vec![
//!     Node::text("body"),
//!     CardSlot::Title.slot().child("Hello").into(),
//! ];
//!
//! let composed = SlotComposer::new()
//!     .slot(CardSlot::Title, SlotMode::First)
//!     .compose(&children);
//!
//! assert_eq!(composed.first(CardSlot::Title).unwrap().content_node().text_content(), "Hello");
//! assert_eq!(composed.content().len(), 1);
//! ```
//!
//! Markers are matched by their [`SlotTag`], never by shape, and a marker
//! renders nothing on its own.

use crate::event::{Event, EventKind, Listener, Listeners};
use crate::node::Node;
use crate::value::{Attrs, Value};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Nominal identity of a slot: the owning component plus the slot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTag {
    owner: &'static str,
    name: &'static str,
}

impl SlotTag {
    pub const fn new(owner: &'static str, name: &'static str) -> Self {
        Self { owner, name }
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for SlotTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// The slot vocabulary of one component, usually a fieldless enum.
pub trait SlotKind: Copy + Eq + fmt::Debug + 'static {
    /// Name of the owning component. Distinguishes equally named slots of
    /// different components.
    const OWNER: &'static str;

    fn name(self) -> &'static str;

    fn tag(self) -> SlotTag {
        SlotTag::new(Self::OWNER, self.name())
    }

    /// Start an empty marker of this kind.
    fn slot(self) -> Slot {
        Slot::from_tag(self.tag())
    }
}

/// How many instances of a slot are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotMode {
    /// Only the first instance counts; later ones are ignored.
    #[default]
    First,
    /// Every instance counts, in declaration order.
    All,
}

/// Payload carried by a slot marker.
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub attrs: Attrs,
    pub classes: Vec<String>,
    /// Nested content of the marker.
    pub content: Vec<Node>,
    pub listeners: Listeners,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Caller classes joined with spaces, `None` when there are none.
    pub fn class_attr(&self) -> Option<String> {
        let joined = self
            .classes
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ");
        (!joined.is_empty()).then_some(joined)
    }

    /// The nested content as one node.
    pub fn content_node(&self) -> Node {
        Node::Fragment(self.content.clone())
    }
}

/// A slot marker node.
#[derive(Debug, Clone)]
pub struct Slot {
    tag: SlotTag,
    props: Props,
}

impl Slot {
    pub fn from_tag(tag: SlotTag) -> Self {
        Self {
            tag,
            props: Props::new(),
        }
    }

    pub fn tag(&self) -> SlotTag {
        self.tag
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Set an attribute on the payload. `class` goes to the class list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            return self.class(value.to_string());
        }
        self.props.attrs.set(name, value);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.trim().is_empty() {
            self.props.classes.push(class.trim().to_string());
        }
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.props.content.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.props
            .content
            .extend(children.into_iter().map(Into::into));
        self
    }

    pub fn on<F>(self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        self.listener(kind, Rc::new(listener))
    }

    pub fn listener(mut self, kind: EventKind, listener: Listener) -> Self {
        self.props.listeners.set(kind, listener);
        self
    }
}

/// Flatten nested fragments into one ordered sequence.
fn flatten<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        match node {
            Node::Fragment(inner) => flatten(inner, out),
            other => out.push(other),
        }
    }
}

/// Props of every marker tagged `tag`, in order of occurrence.
///
/// Fragments are flattened at any depth first. Zero matches give an empty
/// vector.
pub fn extract_slots(children: &[Node], tag: SlotTag) -> Vec<&Props> {
    let mut flat = Vec::new();
    flatten(children, &mut flat);
    flat.into_iter()
        .filter_map(Node::as_slot)
        .filter(|slot| slot.tag == tag)
        .map(Slot::props)
        .collect()
}

/// Props of the first marker tagged `tag`.
pub fn first_slot(children: &[Node], tag: SlotTag) -> Option<&Props> {
    let mut flat = Vec::new();
    flatten(children, &mut flat);
    flat.into_iter()
        .filter_map(Node::as_slot)
        .find(|slot| slot.tag == tag)
        .map(Slot::props)
}

/// Every flattened child except markers tagged with one of `tags`, in order.
pub fn remainder<'a>(children: &'a [Node], tags: &[SlotTag]) -> Vec<&'a Node> {
    let mut flat = Vec::new();
    flatten(children, &mut flat);
    flat.retain(|node| !matches!(node, Node::Slot(slot) if tags.contains(&slot.tag)));
    flat
}

/// A slot a component registers with its composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub tag: SlotTag,
    pub mode: SlotMode,
}

/// Partitions children into registered slot instances and everything else.
#[derive(Debug, Clone, Default)]
pub struct SlotComposer {
    descriptors: Vec<SlotDescriptor>,
}

impl SlotComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot kind with its extraction mode.
    pub fn slot(self, kind: impl SlotKind, mode: SlotMode) -> Self {
        self.slot_tag(kind.tag(), mode)
    }

    pub fn slot_tag(mut self, tag: SlotTag, mode: SlotMode) -> Self {
        match self.descriptors.iter_mut().find(|d| d.tag == tag) {
            Some(existing) => existing.mode = mode,
            None => self.descriptors.push(SlotDescriptor { tag, mode }),
        }
        self
    }

    pub fn descriptors(&self) -> &[SlotDescriptor] {
        &self.descriptors
    }

    /// Split `children` in one pass.
    ///
    /// Registered markers are grouped per tag. `First` slots keep only their
    /// first instance. Every other node, including markers of tags this
    /// composer does not know, stays in the content list in order.
    pub fn compose<'a>(&self, children: &'a [Node]) -> Composed<'a> {
        let mut flat = Vec::new();
        flatten(children, &mut flat);

        let mut slots: IndexMap<SlotTag, Vec<&'a Props>> = self
            .descriptors
            .iter()
            .map(|d| (d.tag, Vec::new()))
            .collect();
        let mut content = Vec::with_capacity(flat.len());

        for node in flat {
            let registered = node.as_slot().and_then(|slot| {
                self.descriptors
                    .iter()
                    .find(|d| d.tag == slot.tag)
                    .map(|d| (slot, d.mode))
            });

            match registered {
                Some((slot, mode)) => {
                    let instances = slots.entry(slot.tag).or_default();
                    if mode == SlotMode::First && !instances.is_empty() {
                        tracing::debug!("Ignoring duplicate '{}' slot", slot.tag);
                        continue;
                    }
                    instances.push(&slot.props);
                }
                None => content.push(node),
            }
        }

        tracing::trace!(
            slots = slots.values().map(Vec::len).sum::<usize>(),
            content = content.len(),
            "Composed children"
        );

        Composed { slots, content }
    }
}

/// Output of [`SlotComposer::compose`].
#[derive(Debug, Clone)]
pub struct Composed<'a> {
    slots: IndexMap<SlotTag, Vec<&'a Props>>,
    content: Vec<&'a Node>,
}

impl<'a> Composed<'a> {
    /// First instance of `kind`, if one was supplied.
    pub fn first(&self, kind: impl SlotKind) -> Option<&'a Props> {
        self.first_tag(kind.tag())
    }

    pub fn first_tag(&self, tag: SlotTag) -> Option<&'a Props> {
        self.slots.get(&tag).and_then(|v| v.first().copied())
    }

    /// All kept instances of `kind` in declaration order.
    pub fn all(&self, kind: impl SlotKind) -> &[&'a Props] {
        self.all_tag(kind.tag())
    }

    pub fn all_tag(&self, tag: SlotTag) -> &[&'a Props] {
        self.slots.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-slot children in original order.
    pub fn content(&self) -> &[&'a Node] {
        &self.content
    }

    /// Owned copies of the non-slot children, ready to become children of
    /// a rendered region.
    pub fn content_nodes(&self) -> Vec<Node> {
        self.content.iter().map(|node| (*node).clone()).collect()
    }
}
