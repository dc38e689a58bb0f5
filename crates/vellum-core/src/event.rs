//! Interaction events and listener storage.
//!
//! The host environment owns real input handling. It calls
//! [`crate::Element::dispatch`] on the element that was interacted with, and
//! the element forwards an [`Event`] to its listener for that kind.

use crate::slot::Props;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Kinds of interaction a component can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Close,
    PointerEnter,
    PointerLeave,
}

impl EventKind {
    /// The host-facing event name (`"click"`, `"close"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Close => "close",
            EventKind::PointerEnter => "pointerenter",
            EventKind::PointerLeave => "pointerleave",
        }
    }
}

/// An interaction delivered to a listener.
///
/// Components that render one row per slot instance fill in `index` with
/// the instance's position in declaration order and `props` with the
/// instance's own props before calling the instance's listener.
#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    pub index: Option<usize>,
    pub props: Option<Props>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            index: None,
            props: None,
        }
    }

    /// Bind this event to a slot instance.
    pub fn for_instance(&self, index: usize, props: &Props) -> Self {
        Self {
            kind: self.kind,
            index: Some(index),
            props: Some(props.clone()),
        }
    }
}

/// Callback invoked when an event fires.
pub type Listener = Rc<dyn Fn(&Event)>;

/// Listeners keyed by event kind, at most one per kind.
#[derive(Clone, Default)]
pub struct Listeners(IndexMap<EventKind, Listener>);

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, replacing any previous one for `kind`.
    pub fn set(&mut self, kind: EventKind, listener: Listener) {
        self.0.insert(kind, listener);
    }

    pub fn get(&self, kind: EventKind) -> Option<&Listener> {
        self.0.get(&kind)
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.0.contains_key(&kind)
    }

    /// Copy every listener of `other` into `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: &Listeners) {
        for (kind, listener) in &other.0 {
            self.0.insert(*kind, Rc::clone(listener));
        }
    }

    /// Invoke the listener for `event.kind`, if any.
    ///
    /// Returns whether a listener ran.
    pub fn fire(&self, event: &Event) -> bool {
        match self.0.get(&event.kind) {
            Some(listener) => {
                listener(event);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}
