//! Vellum Core
//!
//! Building blocks shared by every Vellum component:
//! - [`Node`] / [`Element`] - the immutable output tree and its markup serializer
//! - [`Value`] / [`Attrs`] - attribute values in insertion order
//! - [`slot`] - typed slot markers and the [`SlotComposer`] that pulls them out of children
//! - [`Reserved`] - pass-through filtering of attributes a component does not own
//! - [`ClassNames`] - BEM-style class composition
//!
//! ```
//! use vellum_core::{Element, Node, Theme};
//!
//! let theme = Theme::default();
//! let root = Element::new("div").class(theme.block("panel")).child("Hello");
//! assert_eq!(Node::from(root).to_markup(), r#"<div class="vl-panel">Hello</div>"#);
//! ```

pub mod class_names;
pub mod color;
pub mod error;
pub mod event;
pub mod logging;
pub mod node;
pub mod pass_through;
pub mod profiling;
pub mod slot;
pub mod theme;
pub mod value;

pub use class_names::{ClassNames, class_names};
pub use color::{Color, Palette};
pub use error::{Error, Result};
pub use event::{Event, EventKind, Listener, Listeners};
pub use node::{Element, Node};
pub use pass_through::Reserved;
pub use slot::{Composed, Props, Slot, SlotComposer, SlotKind, SlotMode, SlotTag};
pub use theme::Theme;
pub use value::{Attrs, Value};
