//! Vellum - declarative, slot-composed UI components
//!
//! Components are plain builders. Each `render` call produces a fresh
//! [`Node`](vellum_core::Node) tree that a host can walk or serialize to
//! HTML/SVG markup:
//!
//! - **Slots**: typed child markers pulled out of an opaque children list
//! - **Panel**: single header and footer slots around free content
//! - **Legend**: one row per item slot, index-bound click callbacks
//! - **Banner**: a notice with a title slot and a close button
//! - **Points**: grouped or stacked series drawn as point marks
//!
//! # Quick Start
//!
//! ```
//! use vellum::prelude::*;
//!
//! let legend = Legend::new()
//!     .orientation(Orientation::Vertical)
//!     .item(LegendItem::new("Revenue"))
//!     .item(LegendItem::new("Target").line(true).point(false));
//!
//! let panel = Panel::new()
//!     .child(PanelSlot::Header.slot().child("Quarterly"))
//!     .child(legend.render());
//!
//! let markup = panel.render().to_markup();
//! assert!(markup.starts_with(r#"<div class="vl-panel vl-panel--bordered">"#));
//! ```

pub use vellum_core as core;
pub use vellum_core::{logging, profiling};

#[cfg(feature = "ui")]
pub use vellum_ui as ui;

#[cfg(feature = "chart")]
pub use vellum_chart as chart;

pub use vellum_core::{
    Attrs, ClassNames, Color, Element, Event, EventKind, Node, Palette, Props, Slot,
    SlotComposer, SlotKind, SlotMode, Theme, Value,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use vellum_core::{
        Attrs, Color, Element, Event, EventKind, Node, Palette, Props, SlotComposer, SlotKind,
        SlotMode, Theme, Value,
    };

    #[cfg(feature = "ui")]
    pub use vellum_ui::{
        Banner, BannerSlot, BannerVariant, IndicatorKind, Legend, LegendItem, LegendMetrics,
        Orientation, Panel, PanelSlot, PointVariant, Presence,
    };

    #[cfg(feature = "chart")]
    pub use vellum_chart::{DataError, Points, PointsConfig, Row, data::row};
}
