//! Points: one point mark per series value, grouped or stacked.
//!
//! ```
//! use vellum_chart::data::row;
//! use vellum_chart::points::Points;
//! use vellum_core::Value;
//!
//! let rows = vec![
//!     row([("x", Value::from("a")), ("y0", 1.into()), ("y1", 2.into())]),
//!     row([("x", Value::from("b")), ("y0", 3.into()), ("y1", 1.into())]),
//! ];
//! let points = Points::new(rows).x_field("x").y_fields(["y0", "y1"]).stacked(true);
//!
//! assert_eq!(points.value_max(), 4.0);
//! assert_eq!(points.render().find_all_by_class("vl-points__point").len(), 4);
//! ```

use crate::data::{self, Row};
use crate::error::{DataError, Result};
use crate::scale::{BandScale, LinearScale};
use glam::Vec2;
use vellum_core::{Attrs, ClassNames, Element, Node, Palette, Props, Reserved, Theme, Value};
use vellum_ui::graphics::{self, PointVariant};

/// Options the component interprets itself.
pub const RESERVED: &[&str] = &[
    "xField",
    "yFields",
    "isStacked",
    "yMax",
    "width",
    "height",
    "pointSize",
    "pointVariant",
    "bandPadding",
];

#[derive(Debug, Clone)]
pub struct PointsConfig {
    pub x_field: String,
    pub y_fields: Vec<String>,
    pub is_stacked: bool,
    /// Fixed upper bound of the value axis.
    pub y_max: Option<f64>,
    pub width: f32,
    pub height: f32,
    pub point_size: f32,
    pub point_variant: PointVariant,
    pub band_padding: f32,
    /// Series colors, cycled. Empty uses [`Palette::SERIES`].
    pub colors: Vec<Palette>,
    pub theme: Theme,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            x_field: "x".to_string(),
            y_fields: vec!["y".to_string()],
            is_stacked: false,
            y_max: None,
            width: 400.0,
            height: 200.0,
            point_size: 8.0,
            point_variant: PointVariant::Circle,
            band_padding: 0.2,
            colors: Vec::new(),
            theme: Theme::default(),
        }
    }
}

/// A readable row, ready to place.
struct PlacedRow<'a> {
    index: usize,
    x: &'a Value,
    /// `(position value, own value)` per series. They differ when stacked.
    values: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Default)]
pub struct Points {
    config: PointsConfig,
    rows: Vec<Row>,
    attrs: Attrs,
    classes: Vec<String>,
}

impl Points {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_config(rows: Vec<Row>, config: PointsConfig) -> Self {
        Self {
            config,
            rows,
            ..Self::default()
        }
    }

    /// Build from a generic prop bag.
    ///
    /// `yFields` is a comma-separated list. Unreadable options keep their
    /// default with a warning; unreserved names are forwarded.
    pub fn from_props(props: &Props, rows: Vec<Row>) -> Self {
        let mut config = PointsConfig::default();

        if let Some(field) = props.string("xField") {
            config.x_field = field.trim().to_string();
        }
        if let Some(fields) = props.string("yFields") {
            config.y_fields = fields
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(is_stacked) = props.flag("isStacked") {
            config.is_stacked = is_stacked;
        }
        config.y_max = props.number("yMax");
        if let Some(width) = props.number("width") {
            config.width = width as f32;
        }
        if let Some(height) = props.number("height") {
            config.height = height as f32;
        }
        if let Some(size) = props.number("pointSize") {
            config.point_size = size as f32;
        }
        if let Some(padding) = props.number("bandPadding") {
            config.band_padding = padding as f32;
        }
        if let Some(token) = props.string("pointVariant") {
            match PointVariant::parse_token(token) {
                Ok(variant) => config.point_variant = variant,
                Err(err) => tracing::warn!("{}", err),
            }
        }

        Self {
            config,
            rows,
            attrs: props.attrs.clone(),
            classes: props.classes.clone(),
        }
    }

    pub fn config(&self) -> &PointsConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn x_field(mut self, field: impl Into<String>) -> Self {
        self.config.x_field = field.into();
        self
    }

    pub fn y_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.y_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn stacked(mut self, is_stacked: bool) -> Self {
        self.config.is_stacked = is_stacked;
        self
    }

    pub fn y_max(mut self, y_max: Option<f64>) -> Self {
        self.config.y_max = y_max;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn point_size(mut self, size: f32) -> Self {
        self.config.point_size = size;
        self
    }

    pub fn variant(mut self, variant: PointVariant) -> Self {
        self.config.point_variant = variant;
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = Palette>) -> Self {
        self.config.colors = colors.into_iter().collect();
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

    /// Upper bound of the value axis.
    ///
    /// Without an override this is taken over the rows [`Points::render`]
    /// draws, so a skipped row never stretches the axis.
    pub fn value_max(&self) -> f64 {
        if let Some(y_max) = self.config.y_max {
            return y_max;
        }
        self.placed_rows()
            .into_iter()
            .flatten()
            .flat_map(|placed| placed.values.into_iter().map(|(position, _)| position))
            .fold(0.0, f64::max)
    }

    /// Value axis scale, larger values higher up.
    pub fn value_scale(&self) -> LinearScale {
        LinearScale::new((0.0, self.value_max()), (self.config.height, 0.0))
    }

    /// Category axis scale, one band per row.
    pub fn band_scale(&self) -> BandScale {
        BandScale::new(self.rows.len(), (0.0, self.config.width))
            .with_padding(self.config.band_padding)
    }

    fn series_color(&self, series: usize) -> Palette {
        if self.config.colors.is_empty() {
            Palette::series(series)
        } else {
            self.config.colors[series % self.config.colors.len()]
        }
    }

    fn placed_rows(&self) -> Vec<Result<PlacedRow<'_>>> {
        let fields = self.config.y_fields.as_slice();
        let values: Vec<Result<Vec<(f64, f64)>>> = if self.config.is_stacked {
            data::stack_series(&self.rows, fields)
                .into_iter()
                .map(|row| row.map(|spans| spans.iter().map(|s| (s.end, s.extent())).collect()))
                .collect()
        } else {
            data::group_series(&self.rows, fields)
                .into_iter()
                .map(|row| row.map(|values| values.into_iter().map(|v| (v, v)).collect()))
                .collect()
        };

        self.rows
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (row, values))| -> Result<PlacedRow<'_>> {
                let x = row
                    .get(&self.config.x_field)
                    .ok_or_else(|| DataError::MissingField {
                        row: index,
                        field: self.config.x_field.clone(),
                    })?;
                Ok(PlacedRow {
                    index,
                    x,
                    values: values?,
                })
            })
            .collect()
    }

    pub fn render(&self) -> Node {
        vellum_core::profiling::profile_function!();

        let theme = &self.config.theme;
        let point_class = theme.element("points", "point");
        let value_scale = self.value_scale();
        let bands = self.band_scale();
        let series_count = self.config.y_fields.len();

        let class = ClassNames::new(theme.block("points"))
            .modifier("stacked", self.config.is_stacked)
            .extra(Some(self.classes.join(" ").as_str()))
            .build();

        let mut root = Element::new("g")
            .class(class)
            .attrs(&Reserved::new(RESERVED).forward(&self.attrs));

        let mut skipped = 0;
        for placed in self.placed_rows() {
            let placed = match placed {
                Ok(placed) => placed,
                Err(err) => {
                    tracing::warn!("Skipping row: {}", err);
                    skipped += 1;
                    continue;
                }
            };

            for (series, &(position, value)) in placed.values.iter().enumerate() {
                let x = if self.config.is_stacked {
                    bands.center(placed.index)
                } else {
                    bands.sub_center(placed.index, series, series_count)
                };
                let center = Vec2::new(x, value_scale.map(position));

                let class = ClassNames::new(&point_class)
                    .modifier(format!("series-{}", series), true)
                    .build();
                let mark = graphics::point(
                    center,
                    self.config.point_size,
                    self.series_color(series).color(),
                    self.config.point_variant,
                )
                .class(class)
                .attr("data-index", placed.index)
                .attr("data-series", self.config.y_fields[series].as_str())
                .attr("data-x", placed.x.clone())
                .attr("data-value", value);

                root = root.child(mark);
            }
        }

        tracing::trace!(rows = self.rows.len(), skipped, "Rendered points");
        root.into()
    }
}
