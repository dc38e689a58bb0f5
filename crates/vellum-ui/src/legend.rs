//! Legend: one row per declared item, each with an indicator and a label.
//!
//! Items are declared as [`LegendItem`] markers among the legend's children:
//!
//! ```
//! use vellum_ui::legend::{Legend, LegendItem, Orientation};
//!
//! let legend = Legend::new()
//!     .orientation(Orientation::Vertical)
//!     .item(LegendItem::new("Revenue"))
//!     .item(LegendItem::new("Forecast").line(true).point(false));
//!
//! let node = legend.render();
//! assert_eq!(node.find_all_by_class("vl-legend__item").len(), 2);
//! ```

use crate::graphics::{self, PointVariant};
use bitflags::bitflags;
use glam::Vec2;
use std::rc::Rc;
use vellum_core::error::{Error, Result};
use vellum_core::value::format_number;
use vellum_core::{
    Attrs, ClassNames, Color, Element, Event, EventKind, Node, Palette, Props, Reserved, Slot,
    SlotComposer, SlotKind, SlotMode, Theme, Value,
};

/// Options the legend interprets itself.
pub const RESERVED: &[&str] = &[
    "orientation",
    "isReversed",
    "pointSize",
    "lineWidth",
    "indicatorHeight",
];

/// Item attributes the legend interprets; the rest are forwarded to the row.
pub const ITEM_RESERVED: &[&str] = &["hasPoint", "hasLine", "pointVariant", "color", "isDisabled"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSlot {
    Item,
}

impl SlotKind for LegendSlot {
    const OWNER: &'static str = "legend";

    fn name(self) -> &'static str {
        match self {
            LegendSlot::Item => "item",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn token(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn parse_token(token: &str) -> Result<Self> {
        match token.trim() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(Error::UnknownToken {
                option: "orientation",
                token: other.to_string(),
            }),
        }
    }
}

bitflags! {
    /// What a legend row draws in its indicator area.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IndicatorKind: u8 {
        const POINT = 1 << 0;
        const LINE  = 1 << 1;
    }
}

impl IndicatorKind {
    /// Read the kind from item props. Points default on, lines default off.
    pub fn from_props(props: &Props) -> Self {
        let mut kind = IndicatorKind::empty();
        kind.set(IndicatorKind::POINT, props.flag("hasPoint").unwrap_or(true));
        kind.set(IndicatorKind::LINE, props.flag("hasLine").unwrap_or(false));
        kind
    }
}

/// Pixel sizes of the indicator area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendMetrics {
    /// Point diameter, also the indicator width of point-only rows.
    pub point_size: f32,
    /// Indicator width of rows that draw a line.
    pub line_width: f32,
    pub indicator_height: f32,
    pub line_thickness: f32,
}

impl Default for LegendMetrics {
    fn default() -> Self {
        Self {
            point_size: 8.0,
            line_width: 16.0,
            indicator_height: 12.0,
            line_thickness: 2.0,
        }
    }
}

/// Indicator width of every row.
///
/// In a vertical legend a single line row widens every row to the line
/// width so indicators align in one column. Otherwise each row is sized on
/// its own. An unknown orientation (`None`) uses the per-row rule.
pub fn indicator_widths(
    kinds: &[IndicatorKind],
    orientation: Option<Orientation>,
    metrics: &LegendMetrics,
) -> Vec<f32> {
    let align_to_line = orientation == Some(Orientation::Vertical)
        && kinds.iter().any(|k| k.contains(IndicatorKind::LINE));

    kinds
        .iter()
        .map(|kind| {
            if align_to_line || kind.contains(IndicatorKind::LINE) {
                metrics.line_width
            } else {
                metrics.point_size
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct LegendConfig {
    /// `None` when a prop bag carried an unrecognized token.
    pub orientation: Option<Orientation>,
    /// Reverse the visual order only; item indices keep declaration order.
    pub is_reversed: bool,
    pub metrics: LegendMetrics,
    pub theme: Theme,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            orientation: Some(Orientation::Horizontal),
            is_reversed: false,
            metrics: LegendMetrics::default(),
            theme: Theme::default(),
        }
    }
}

/// An item `color` value: a palette token or a hex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemColor {
    Palette(Palette),
    Exact(Color),
}

impl ItemColor {
    /// Values starting with `#` are hex colors, anything else is a palette token.
    pub fn parse(token: &str) -> Result<Self> {
        if token.trim_start().starts_with('#') {
            Color::parse(token).map(ItemColor::Exact)
        } else {
            Palette::parse_token(token).map(ItemColor::Palette)
        }
    }
}

/// Arguments passed to an item's event callbacks.
pub struct ItemClick<'a> {
    pub event: &'a Event,
    pub props: &'a Props,
}

/// Builder for one legend item marker.
#[derive(Debug, Clone)]
pub struct LegendItem {
    slot: Slot,
}

impl LegendItem {
    pub fn new(label: impl Into<Node>) -> Self {
        Self {
            slot: LegendSlot::Item.slot().child(label),
        }
    }

    pub fn point(mut self, has_point: bool) -> Self {
        self.slot = self.slot.attr("hasPoint", has_point);
        self
    }

    pub fn line(mut self, has_line: bool) -> Self {
        self.slot = self.slot.attr("hasLine", has_line);
        self
    }

    pub fn variant(mut self, variant: PointVariant) -> Self {
        self.slot = self.slot.attr("pointVariant", variant.token());
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.slot = self.slot.attr("color", color.token());
        self
    }

    /// Use an exact color instead of a palette token.
    pub fn custom_color(mut self, color: Color) -> Self {
        self.slot = self.slot.attr("color", color.to_css());
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.slot = self.slot.attr("isDisabled", is_disabled);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slot = self.slot.attr(name, value);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.slot = self.slot.class(class);
        self
    }

    /// Called with the item's declaration index when its row is clicked.
    pub fn on_click<F>(self, callback: F) -> Self
    where
        F: Fn(usize, &ItemClick) + 'static,
    {
        self.on(EventKind::Click, callback)
    }

    /// Called with the item's declaration index when its row receives `kind`.
    pub fn on<F>(mut self, kind: EventKind, callback: F) -> Self
    where
        F: Fn(usize, &ItemClick) + 'static,
    {
        self.slot = self.slot.on(kind, move |event| {
            if let (Some(index), Some(props)) = (event.index, event.props.as_ref()) {
                callback(index, &ItemClick { event, props });
            }
        });
        self
    }
}

impl From<LegendItem> for Node {
    fn from(item: LegendItem) -> Self {
        Node::Slot(item.slot)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Legend {
    config: LegendConfig,
    attrs: Attrs,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LegendConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a legend from a generic prop bag.
    ///
    /// Reserved names are read as options, unrecognized option values fall
    /// back with a warning, everything else is forwarded to the root.
    pub fn from_props(props: &Props) -> Self {
        let mut config = LegendConfig::default();

        if let Some(value) = props.get("orientation") {
            config.orientation = match Orientation::parse_token(&value.to_string()) {
                Ok(orientation) => Some(orientation),
                Err(err) => {
                    tracing::warn!("{}", err);
                    None
                }
            };
        }
        if let Some(is_reversed) = props.flag("isReversed") {
            config.is_reversed = is_reversed;
        }
        if let Some(size) = props.number("pointSize") {
            config.metrics.point_size = size as f32;
        }
        if let Some(width) = props.number("lineWidth") {
            config.metrics.line_width = width as f32;
        }
        if let Some(height) = props.number("indicatorHeight") {
            config.metrics.indicator_height = height as f32;
        }

        Self {
            config,
            attrs: props.attrs.clone(),
            classes: props.classes.clone(),
            children: props.content.clone(),
        }
    }

    pub fn config(&self) -> &LegendConfig {
        &self.config
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = Some(orientation);
        self
    }

    pub fn reversed(mut self, is_reversed: bool) -> Self {
        self.config.is_reversed = is_reversed;
        self
    }

    pub fn metrics(mut self, metrics: LegendMetrics) -> Self {
        self.config.metrics = metrics;
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

    pub fn item(self, item: LegendItem) -> Self {
        self.child(item)
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
        let block = theme.block("legend");
        let composed = SlotComposer::new()
            .slot(LegendSlot::Item, SlotMode::All)
            .compose(&self.children);
        let items = composed.all(LegendSlot::Item);

        let kinds: Vec<_> = items.iter().map(|p| IndicatorKind::from_props(p)).collect();
        let widths = indicator_widths(&kinds, self.config.orientation, &self.config.metrics);

        let class = ClassNames::new(&block)
            .modifier_opt(self.config.orientation.as_ref().map(Orientation::token))
            .modifier("reversed", self.config.is_reversed)
            .extra(Some(self.classes.join(" ").as_str()))
            .build();

        let mut root = Element::new("div").class(class).attr("role", "list");
        if self.config.is_reversed {
            root = root.attr("data-direction", "reverse");
        }
        root = root.attrs(&Reserved::new(RESERVED).forward(&self.attrs));

        let item_reserved = Reserved::new(ITEM_RESERVED);
        for (index, props) in items.iter().enumerate() {
            let item = self.render_item(index, props, kinds[index], widths[index], &item_reserved);
            root = root.child(item);
        }

        root.children(composed.content_nodes()).into()
    }

    fn render_item(
        &self,
        index: usize,
        props: &Props,
        kind: IndicatorKind,
        width: f32,
        reserved: &Reserved,
    ) -> Element {
        let theme = &self.config.theme;
        let item_class = theme.element("legend", "item");

        let color = props.string("color").and_then(|token| {
            ItemColor::parse(token)
                .inspect_err(|err| tracing::warn!("Legend item {}: {}", index, err))
                .ok()
        });
        let palette = match color {
            Some(ItemColor::Palette(palette)) => Some(palette),
            _ => None,
        };
        let variant = props.string("pointVariant").and_then(|token| {
            PointVariant::parse_token(token)
                .inspect_err(|err| tracing::warn!("Legend item {}: {}", index, err))
                .ok()
        });
        let is_disabled = props.flag("isDisabled").unwrap_or(false);

        let class = ClassNames::new(&item_class)
            .modifier("disabled", is_disabled)
            .modifier_opt(palette.as_ref().map(Palette::token))
            .extra(props.class_attr().as_deref())
            .build();

        let mut row = Element::new("div")
            .class(class)
            .attr("role", "listitem")
            .attr("data-index", index)
            .attrs(&reserved.forward(&props.attrs));

        if is_disabled {
            row = row.attr("aria-disabled", "true");
        }

        // Every item listener is rebound to the row with the item's index.
        // Disabled rows keep pointer listeners but drop clicks.
        for kind in props.listeners.kinds() {
            if is_disabled && kind == EventKind::Click {
                continue;
            }
            if let Some(listener) = props.listeners.get(kind) {
                let listener = Rc::clone(listener);
                let item_props = props.clone();
                row = row.on(kind, move |event| {
                    listener(&event.for_instance(index, &item_props));
                });
            }
        }

        let color = match color {
            Some(ItemColor::Palette(palette)) => palette.color(),
            Some(ItemColor::Exact(color)) => color,
            None => Palette::series(index).color(),
        };
        if let Some(indicator) = self.render_indicator(kind, width, color, variant) {
            row = row.child(indicator);
        }

        row.child(
            Element::new("span")
                .class(theme.element("legend", "label"))
                .children(props.content.iter().cloned()),
        )
    }

    fn render_indicator(
        &self,
        kind: IndicatorKind,
        width: f32,
        color: Color,
        variant: Option<PointVariant>,
    ) -> Option<Element> {
        // Empty rows still occupy the column when their width was widened for alignment.
        if kind.is_empty() && width <= self.config.metrics.point_size {
            return None;
        }

        let theme = &self.config.theme;
        let metrics = &self.config.metrics;
        let height = metrics.indicator_height;
        let middle = height / 2.0;

        let mut svg = Element::new("svg")
            .class(theme.element("legend", "indicator"))
            .attr("width", width)
            .attr("height", height)
            .attr(
                "viewBox",
                format!("0 0 {} {}", format_number(width as f64), format_number(height as f64)),
            )
            .attr("aria-hidden", "true");

        if kind.contains(IndicatorKind::LINE) {
            svg = svg.child(
                graphics::line(
                    Vec2::new(0.0, middle),
                    Vec2::new(width, middle),
                    color,
                    metrics.line_thickness,
                )
                .class(theme.element("legend", "line")),
            );
        }

        if kind.contains(IndicatorKind::POINT) {
            let point_class = theme.element("legend", "point");
            let class = ClassNames::new(&point_class)
                .modifier_opt(variant.as_ref().map(PointVariant::token))
                .build();
            svg = svg.child(
                graphics::point(
                    Vec2::new(width / 2.0, middle),
                    metrics.point_size,
                    color,
                    variant.unwrap_or_default(),
                )
                .class(class),
            );
        }

        Some(svg)
    }
}
