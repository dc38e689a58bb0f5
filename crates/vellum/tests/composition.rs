//! Components nested inside each other through the facade.

use std::cell::Cell;
use std::rc::Rc;
use vellum::prelude::*;

#[test]
fn test_legend_inside_panel_keeps_callbacks() {
    let clicked = Rc::new(Cell::new(None));
    let sink = Rc::clone(&clicked);

    let legend = Legend::new()
        .item(LegendItem::new("A"))
        .item(LegendItem::new("B").on_click(move |index, _| sink.set(Some(index))))
        .render();
    let panel = Panel::new()
        .child(PanelSlot::Footer.slot().child(legend))
        .render();

    let footer = panel.find_by_class("vl-panel__footer").unwrap();
    let rows = Node::from(footer.clone());
    let rows = rows.find_all_by_class("vl-legend__item");
    assert_eq!(rows.len(), 2);

    rows[1].dispatch(EventKind::Click);
    assert_eq!(clicked.get(), Some(1));
}

#[test]
fn test_points_inside_panel() {
    let rows = vec![
        row([("x", Value::from("a")), ("y0", 1.into()), ("y1", 2.into())]),
        row([("x", Value::from("b")), ("y0", 3.into()), ("y1", 1.into())]),
    ];
    let points = Points::new(rows).y_fields(["y0", "y1"]).stacked(true);
    let panel = Panel::new()
        .child(Element::new("svg").child(points.render()))
        .render();

    let content = panel.find_by_class("vl-panel__content").unwrap();
    assert_eq!(Node::from(content.clone()).find_all_by_class("vl-points__point").len(), 4);
}

#[test]
fn test_slot_markers_of_other_components_stay_put() {
    let panel = Panel::new()
        .child(BannerSlot::Title.slot().child("Not a panel slot"))
        .child("Body")
        .render();

    let content = panel.find_by_class("vl-panel__content").unwrap();
    assert_eq!(content.get_children().len(), 2);
    assert!(content.get_children()[0].as_slot().is_some());
    assert_eq!(panel.to_markup().matches("Not a panel slot").count(), 0);
}
