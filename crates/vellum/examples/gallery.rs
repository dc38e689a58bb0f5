//! Renders one of each component and prints the markup.
//!
//! Run with: cargo run -p vellum --example gallery
//! Set `RUST_LOG=debug` to see slot composition and skipped rows.

use std::cell::Cell;
use std::rc::Rc;
use vellum::prelude::*;

fn main() {
    vellum::logging::init();

    let clicks = Rc::new(Cell::new(0));

    let legend = ["North", "South", "East"]
        .into_iter()
        .enumerate()
        .fold(
            Legend::new().orientation(Orientation::Vertical).reversed(true),
            |legend, (i, label)| {
                let clicks = Rc::clone(&clicks);
                legend.item(
                    LegendItem::new(label)
                        .line(i == 2)
                        .on_click(move |index, _| {
                            tracing::info!("Legend item {} clicked", index);
                            clicks.set(clicks.get() + 1);
                        }),
                )
            },
        )
        .render();

    let rows = vec![
        row([("x", Value::from("Q1")), ("north", 4.into()), ("south", 2.into())]),
        row([("x", Value::from("Q2")), ("north", 3.into()), ("south", "n/a".into())]),
        row([("x", Value::from("Q3")), ("north", 5.into()), ("south", 1.into())]),
    ];
    let points = Points::new(rows)
        .y_fields(["north", "south"])
        .stacked(true)
        .size(240.0, 120.0);
    tracing::info!("Value axis upper bound: {}", points.value_max());

    let chart = Element::new("svg")
        .attr("width", 240)
        .attr("height", 120)
        .child(points.render());

    let panel = Panel::new()
        .shadowed(true)
        .child(PanelSlot::Header.slot().child("Regional sales"))
        .child(chart)
        .child(legend.clone())
        .child(PanelSlot::Footer.slot().child("Q2 south figures pending"))
        .render();

    let banner = Banner::new()
        .variant(BannerVariant::Warning)
        .closable(true)
        .on_close(|_| tracing::info!("Banner closed"))
        .child(BannerSlot::Title.slot().child("Heads up"))
        .child("Some rows could not be plotted.")
        .render();

    println!("{}", banner.node.to_markup());
    println!("{}", panel.to_markup());

    // Simulate a host click on the first visual row.
    if let Some(row) = legend.find_by_class("vl-legend__item") {
        row.dispatch(EventKind::Click);
    }
    println!("Legend clicks: {}", clicks.get());
}
