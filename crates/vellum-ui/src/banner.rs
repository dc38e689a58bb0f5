//! Banner: a dismissible notice with an optional title.
//!
//! Visibility transitions belong to the host. [`Banner::render`] always
//! renders the banner and reports whether it should currently be shown.

use crate::graphics;
use std::fmt;
use std::rc::Rc;
use vellum_core::error::{Error, Result};
use vellum_core::{
    Attrs, ClassNames, Element, Event, EventKind, Listener, Node, Props, Reserved, SlotComposer,
    SlotKind, SlotMode, Theme, Value,
};

/// Options the banner interprets itself.
pub const RESERVED: &[&str] = &["variant", "isVisible", "isClosable", "closeLabel"];

const CLOSE_ICON_SIZE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSlot {
    Title,
}

impl SlotKind for BannerSlot {
    const OWNER: &'static str = "banner";

    fn name(self) -> &'static str {
        match self {
            BannerSlot::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerVariant {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl BannerVariant {
    pub fn token(&self) -> &'static str {
        match self {
            BannerVariant::Info => "info",
            BannerVariant::Success => "success",
            BannerVariant::Warning => "warning",
            BannerVariant::Danger => "danger",
        }
    }

    pub fn parse_token(token: &str) -> Result<Self> {
        match token.trim() {
            "info" => Ok(BannerVariant::Info),
            "success" => Ok(BannerVariant::Success),
            "warning" => Ok(BannerVariant::Warning),
            "danger" => Ok(BannerVariant::Danger),
            other => Err(Error::UnknownToken {
                option: "variant",
                token: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BannerConfig {
    /// `None` when a prop bag carried an unrecognized token.
    pub variant: Option<BannerVariant>,
    pub is_visible: bool,
    pub is_closable: bool,
    /// Accessible label of the close button.
    pub close_label: String,
    pub theme: Theme,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            variant: Some(BannerVariant::Info),
            is_visible: true,
            is_closable: false,
            close_label: "Close".to_string(),
            theme: Theme::default(),
        }
    }
}

/// A rendered tree plus the visibility the host transition should apply.
#[derive(Debug, Clone)]
pub struct Presence {
    pub is_visible: bool,
    pub node: Node,
}

impl Presence {
    pub fn into_node(self) -> Node {
        self.node
    }
}

#[derive(Clone, Default)]
pub struct Banner {
    config: BannerConfig,
    attrs: Attrs,
    classes: Vec<String>,
    children: Vec<Node>,
    on_close: Option<Listener>,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("config", &self.config)
            .field("attrs", &self.attrs)
            .field("classes", &self.classes)
            .field("children", &self.children)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BannerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a banner from a generic prop bag.
    ///
    /// A `Close` listener on the bag becomes the close callback.
    pub fn from_props(props: &Props) -> Self {
        let mut config = BannerConfig::default();

        if let Some(value) = props.get("variant") {
            config.variant = BannerVariant::parse_token(&value.to_string())
                .inspect_err(|err| tracing::warn!("{}", err))
                .ok();
        }
        if let Some(is_visible) = props.flag("isVisible") {
            config.is_visible = is_visible;
        }
        if let Some(is_closable) = props.flag("isClosable") {
            config.is_closable = is_closable;
        }
        if let Some(label) = props.string("closeLabel") {
            config.close_label = label.to_string();
        }

        Self {
            config,
            attrs: props.attrs.clone(),
            classes: props.classes.clone(),
            children: props.content.clone(),
            on_close: props.listeners.get(EventKind::Close).cloned(),
        }
    }

    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.config.variant = Some(variant);
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.config.is_visible = is_visible;
        self
    }

    pub fn closable(mut self, is_closable: bool) -> Self {
        self.config.is_closable = is_closable;
        self
    }

    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        self.on_close = Some(Rc::new(callback));
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

    pub fn render(&self) -> Presence {
        vellum_core::profiling::profile_function!();

        let theme = &self.config.theme;
        let composed = SlotComposer::new()
            .slot(BannerSlot::Title, SlotMode::First)
            .compose(&self.children);

        let class = ClassNames::new(theme.block("banner"))
            .modifier_opt(self.config.variant.as_ref().map(BannerVariant::token))
            .modifier("closable", self.config.is_closable)
            .extra(Some(self.classes.join(" ").as_str()))
            .build();

        let mut root = Element::new("div")
            .class(class)
            .attr("role", "status")
            .attrs(&Reserved::new(RESERVED).forward(&self.attrs));

        if let Some(title) = composed.first(BannerSlot::Title) {
            root = root.child(
                Element::new("div")
                    .class(theme.element("banner", "title"))
                    .spread(title),
            );
        }

        root = root.child(
            Element::new("div")
                .class(theme.element("banner", "content"))
                .children(composed.content_nodes()),
        );

        if self.config.is_closable {
            let mut close = Element::new("button")
                .class(theme.element("banner", "close"))
                .attr("type", "button")
                .attr("aria-label", self.config.close_label.as_str())
                .child(graphics::close_icon(CLOSE_ICON_SIZE));

            if let Some(on_close) = &self.on_close {
                let on_close = Rc::clone(on_close);
                close = close.on(EventKind::Click, move |_| {
                    on_close(&Event::new(EventKind::Close));
                });
            }
            root = root.child(close);
        }

        Presence {
            is_visible: self.config.is_visible,
            node: root.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_variant_tokens() {
        assert_eq!(BannerVariant::parse_token("danger").unwrap(), BannerVariant::Danger);
        assert!(BannerVariant::parse_token("critical").is_err());
    }

    #[test]
    fn test_hidden_banner_still_renders() {
        let presence = Banner::new().visible(false).child("Saved").render();
        assert!(!presence.is_visible);
        assert_eq!(presence.node.text_content(), "Saved");
    }

    #[test]
    fn test_close_button_fires_on_close() {
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        let node = Banner::new()
            .closable(true)
            .on_close(move |event| {
                assert_eq!(event.kind, EventKind::Close);
                flag.set(true);
            })
            .render()
            .into_node();

        let close = node.find_by_class("vl-banner__close").unwrap();
        assert_eq!(close.get_attr("aria-label"), Some(&Value::from("Close")));
        assert!(close.dispatch(EventKind::Click));
        assert!(closed.get());
    }

    #[test]
    fn test_unknown_variant_drops_modifier() {
        let props = Props {
            attrs: Attrs::new().with("variant", "loud").with("id", "notice"),
            ..Props::default()
        };
        let node = Banner::from_props(&props).render().into_node();
        let root = node.as_element().unwrap();

        assert_eq!(root.class_attr(), "vl-banner");
        assert_eq!(root.get_attr("id"), Some(&Value::from("notice")));
        assert!(root.get_attr("variant").is_none());
    }
}
