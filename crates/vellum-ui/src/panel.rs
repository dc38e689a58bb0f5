//! Panel: a content region with optional header and footer regions.
//!
//! ```
//! use vellum_core::SlotKind;
//! use vellum_ui::panel::{Panel, PanelSlot};
//!
//! let panel = Panel::new()
//!     .child(PanelSlot::Header.slot().class("title").child("Usage"))
//!     .child("Body text")
//!     .attr("aria-label", "Usage panel");
//!
//! let node = panel.render();
//! let header = node.find_by_class("vl-panel__header").unwrap();
//! assert!(header.has_class("title"));
//! ```

use vellum_core::{
    Attrs, ClassNames, Element, Node, Props, Reserved, SlotComposer, SlotKind, SlotMode, Theme,
    Value,
};

/// Options the panel interprets itself.
pub const RESERVED: &[&str] = &["isBordered", "isShadowed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    Header,
    Footer,
}

impl SlotKind for PanelSlot {
    const OWNER: &'static str = "panel";

    fn name(self) -> &'static str {
        match self {
            PanelSlot::Header => "header",
            PanelSlot::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub is_bordered: bool,
    pub is_shadowed: bool,
    pub theme: Theme,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            is_bordered: true,
            is_shadowed: false,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Panel {
    config: PanelConfig,
    attrs: Attrs,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a panel from a generic prop bag; unreserved names are forwarded.
    pub fn from_props(props: &Props) -> Self {
        let mut config = PanelConfig::default();
        if let Some(is_bordered) = props.flag("isBordered") {
            config.is_bordered = is_bordered;
        }
        if let Some(is_shadowed) = props.flag("isShadowed") {
            config.is_shadowed = is_shadowed;
        }

        Self {
            config,
            attrs: props.attrs.clone(),
            classes: props.classes.clone(),
            children: props.content.clone(),
        }
    }

    pub fn bordered(mut self, is_bordered: bool) -> Self {
        self.config.is_bordered = is_bordered;
        self
    }

    pub fn shadowed(mut self, is_shadowed: bool) -> Self {
        self.config.is_shadowed = is_shadowed;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            return self.class(value.to_string());
        }
        self.attrs.set(name, value);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
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

    pub fn render(&self) -> Node {
        vellum_core::profiling::profile_function!();

        let theme = &self.config.theme;
        let composed = SlotComposer::new()
            .slot(PanelSlot::Header, SlotMode::First)
            .slot(PanelSlot::Footer, SlotMode::First)
            .compose(&self.children);

        let class = ClassNames::new(theme.block("panel"))
            .modifier("bordered", self.config.is_bordered)
            .modifier("shadowed", self.config.is_shadowed)
            .extra(Some(self.classes.join(" ").as_str()))
            .build();

        let mut root = Element::new("div")
            .class(class)
            .attrs(&Reserved::new(RESERVED).forward(&self.attrs));

        if let Some(header) = composed.first(PanelSlot::Header) {
            root = root.child(
                Element::new("div")
                    .class(theme.element("panel", "header"))
                    .spread(header),
            );
        }

        root = root.child(
            Element::new("div")
                .class(theme.element("panel", "content"))
                .children(composed.content_nodes()),
        );

        if let Some(footer) = composed.first(PanelSlot::Footer) {
            root = root.child(
                Element::new("div")
                    .class(theme.element("panel", "footer"))
                    .spread(footer),
            );
        }

        root.into()
    }
}
