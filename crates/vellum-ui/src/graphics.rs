//! Graphics primitives: pure functions from geometry to an SVG mark.
//!
//! Marks carry no classes; callers add their own structural classes.

use glam::Vec2;
use vellum_core::error::{Error, Result};
use vellum_core::value::format_number;
use vellum_core::{Color, Element};

/// Glyph drawn for a point mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointVariant {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

impl PointVariant {
    pub fn token(&self) -> &'static str {
        match self {
            PointVariant::Circle => "circle",
            PointVariant::Square => "square",
            PointVariant::Triangle => "triangle",
            PointVariant::Diamond => "diamond",
            PointVariant::Cross => "cross",
        }
    }

    pub fn parse_token(token: &str) -> Result<Self> {
        match token.trim() {
            "circle" => Ok(PointVariant::Circle),
            "square" => Ok(PointVariant::Square),
            "triangle" => Ok(PointVariant::Triangle),
            "diamond" => Ok(PointVariant::Diamond),
            "cross" => Ok(PointVariant::Cross),
            other => Err(Error::UnknownToken {
                option: "pointVariant",
                token: other.to_string(),
            }),
        }
    }
}

fn polygon_points(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x as f64), format_number(p.y as f64)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A point glyph of diameter `size` centered on `center`.
pub fn point(center: Vec2, size: f32, color: Color, variant: PointVariant) -> Element {
    let half = size / 2.0;
    let fill = color.to_css();

    match variant {
        PointVariant::Circle => Element::new("circle")
            .attr("cx", center.x)
            .attr("cy", center.y)
            .attr("r", half)
            .attr("fill", fill),
        PointVariant::Square => Element::new("rect")
            .attr("x", center.x - half)
            .attr("y", center.y - half)
            .attr("width", size)
            .attr("height", size)
            .attr("fill", fill),
        PointVariant::Triangle => Element::new("polygon")
            .attr(
                "points",
                polygon_points(&[
                    center + Vec2::new(0.0, -half),
                    center + Vec2::new(half, half),
                    center + Vec2::new(-half, half),
                ]),
            )
            .attr("fill", fill),
        PointVariant::Diamond => Element::new("polygon")
            .attr(
                "points",
                polygon_points(&[
                    center + Vec2::new(0.0, -half),
                    center + Vec2::new(half, 0.0),
                    center + Vec2::new(0.0, half),
                    center + Vec2::new(-half, 0.0),
                ]),
            )
            .attr("fill", fill),
        PointVariant::Cross => {
            let a = center - Vec2::splat(half);
            let b = center + Vec2::splat(half);
            let d = format!(
                "M{} {}L{} {}M{} {}L{} {}",
                format_number(a.x as f64),
                format_number(a.y as f64),
                format_number(b.x as f64),
                format_number(b.y as f64),
                format_number(a.x as f64),
                format_number(b.y as f64),
                format_number(b.x as f64),
                format_number(a.y as f64),
            );
            Element::new("path")
                .attr("d", d)
                .attr("stroke", fill)
                .attr("stroke-width", (size / 4.0).max(1.0))
                .attr("fill", "none")
        }
    }
}

/// A straight stroke from `from` to `to`.
pub fn line(from: Vec2, to: Vec2, color: Color, width: f32) -> Element {
    Element::new("line")
        .attr("x1", from.x)
        .attr("y1", from.y)
        .attr("x2", to.x)
        .attr("y2", to.y)
        .attr("stroke", color.to_css())
        .attr("stroke-width", width)
        .attr("stroke-linecap", "round")
}

/// A square cross icon of side `size`, drawn with `currentColor`.
pub fn close_icon(size: f32) -> Element {
    let inset = size * 0.25;
    let far = size - inset;
    let d = format!(
        "M{inset} {inset}L{far} {far}M{far} {inset}L{inset} {far}",
        inset = format_number(inset as f64),
        far = format_number(far as f64),
    );

    Element::new("svg")
        .attr("width", size)
        .attr("height", size)
        .attr(
            "viewBox",
            format!("0 0 {} {}", format_number(size as f64), format_number(size as f64)),
        )
        .attr("aria-hidden", "true")
        .child(
            Element::new("path")
                .attr("d", d)
                .attr("stroke", "currentColor")
                .attr("stroke-width", 1.5)
                .attr("stroke-linecap", "round"),
        )
}
