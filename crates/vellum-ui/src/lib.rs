//! Components built on the Vellum slot system.
//!
//! - [`panel::Panel`] consumes single `header` and `footer` slots.
//! - [`legend::Legend`] consumes every `item` slot and renders one row each.
//! - [`banner::Banner`] consumes a single `title` slot.
//!
//! Each component's `render` builds a fresh [`vellum_core::Node`] tree.

pub mod banner;
pub mod graphics;
pub mod legend;
pub mod panel;

pub use banner::{Banner, BannerConfig, BannerSlot, BannerVariant, Presence};
pub use graphics::PointVariant;
pub use legend::{
    IndicatorKind, ItemClick, ItemColor, Legend, LegendConfig, LegendItem, LegendMetrics,
    LegendSlot, Orientation, indicator_widths,
};
pub use panel::{Panel, PanelConfig, PanelSlot};
