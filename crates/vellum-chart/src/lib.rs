//! Vellum Chart
//!
//! Series data support for Vellum:
//! - [`data`] - grouping and stacking transforms over loosely typed rows
//! - [`scale`] - linear and band scales
//! - [`points::Points`] - the point series component

pub mod data;
pub mod error;
pub mod points;
pub mod scale;

pub use data::{Row, Span, group_series, stack_series, value_domain_max};
pub use error::{DataError, Result};
pub use points::{Points, PointsConfig};
pub use scale::{BandScale, LinearScale};
