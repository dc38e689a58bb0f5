//! Legend rendering and interaction tests.

use std::cell::RefCell;
use std::rc::Rc;
use vellum_core::{Attrs, Color, Element, EventKind, Node, Palette, Props, Value};
use vellum_ui::graphics::PointVariant;
use vellum_ui::legend::{Legend, LegendItem, Orientation};

fn rows(node: &Node) -> Vec<&Element> {
    node.find_all_by_class("vl-legend__item")
}

fn indicator_widths(node: &Node) -> Vec<Value> {
    node.find_all_by_class("vl-legend__indicator")
        .into_iter()
        .map(|svg| svg.get_attr("width").cloned().unwrap())
        .collect()
}

/// A legend with three clickable items that record the reported index.
fn recording_legend(is_reversed: bool) -> (Legend, Rc<RefCell<Vec<(usize, String)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut legend = Legend::new().reversed(is_reversed);
    for label in ["North", "South", "East"] {
        let log = Rc::clone(&log);
        legend = legend.item(LegendItem::new(label).on_click(move |index, click| {
            let label = click.props.content_node().text_content();
            log.borrow_mut().push((index, label));
        }));
    }
    (legend, log)
}

#[test]
fn test_one_row_per_item_in_declaration_order() {
    let node = Legend::new()
        .item(LegendItem::new("A"))
        .child(Element::new("p").child("note"))
        .item(LegendItem::new("B"))
        .render();

    let labels: Vec<_> = node
        .find_all_by_class("vl-legend__label")
        .into_iter()
        .map(|label| Node::from(label.clone()).text_content())
        .collect();
    assert_eq!(labels, vec!["A", "B"]);

    let root = node.as_element().unwrap();
    let last = root.child_elements().last().unwrap();
    assert_eq!(last.tag(), "p");
}

#[test]
fn test_vertical_line_item_widens_point_item() {
    let node = Legend::new()
        .orientation(Orientation::Vertical)
        .item(LegendItem::new("Points"))
        .item(LegendItem::new("Trend").point(false).line(true))
        .render();

    assert_eq!(indicator_widths(&node), vec![Value::from(16.0_f64), Value::from(16.0_f64)]);
}

#[test]
fn test_horizontal_items_size_independently() {
    let node = Legend::new()
        .orientation(Orientation::Horizontal)
        .item(LegendItem::new("Points"))
        .item(LegendItem::new("Trend").point(false).line(true))
        .render();

    assert_eq!(indicator_widths(&node), vec![Value::from(8.0_f64), Value::from(16.0_f64)]);
}

#[test]
fn test_click_reports_declaration_index() {
    let (legend, log) = recording_legend(false);
    let node = legend.render();

    assert!(rows(&node)[1].dispatch(EventKind::Click));
    assert_eq!(*log.borrow(), vec![(1, "South".to_string())]);
}

#[test]
fn test_reversal_keeps_indices() {
    let (legend, log) = recording_legend(true);
    let node = legend.render();
    let root = node.as_element().unwrap();

    assert!(root.has_class("vl-legend--reversed"));
    assert_eq!(root.get_attr("data-direction"), Some(&Value::from("reverse")));

    let rows = rows(&node);
    rows[2].dispatch(EventKind::Click);
    rows[0].dispatch(EventKind::Click);
    assert_eq!(
        *log.borrow(),
        vec![(2, "East".to_string()), (0, "North".to_string())]
    );
}

#[test]
fn test_item_without_callback_ignores_clicks() {
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicked);
    let node = Legend::new()
        .item(LegendItem::new("Quiet"))
        .item(LegendItem::new("Loud").on_click(move |index, _| sink.borrow_mut().push(index)))
        .render();

    assert!(!rows(&node)[0].dispatch(EventKind::Click));
    assert!(clicked.borrow().is_empty());
}

#[test]
fn test_disabled_item_does_not_fire() {
    let clicked = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&clicked);
    let node = Legend::new()
        .item(
            LegendItem::new("Off")
                .disabled(true)
                .on_click(move |_, _| *sink.borrow_mut() += 1),
        )
        .render();
    let row = rows(&node)[0];

    assert!(row.has_class("vl-legend__item--disabled"));
    assert_eq!(row.get_attr("aria-disabled"), Some(&Value::from("true")));
    assert!(!row.dispatch(EventKind::Click));
    assert_eq!(*clicked.borrow(), 0);
}

#[test]
fn test_pointer_listeners_report_declaration_index() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut legend = Legend::new();
    for (label, is_disabled) in [("On", false), ("Off", true)] {
        let enter = Rc::clone(&log);
        let click = Rc::clone(&log);
        legend = legend.item(
            LegendItem::new(label)
                .disabled(is_disabled)
                .on(EventKind::PointerEnter, move |index, _| {
                    enter.borrow_mut().push(("enter", index))
                })
                .on_click(move |index, _| click.borrow_mut().push(("click", index))),
        );
    }
    let node = legend.render();
    let rows = rows(&node);

    assert!(rows[0].dispatch(EventKind::PointerEnter));
    assert!(rows[0].dispatch(EventKind::Click));
    assert!(rows[1].dispatch(EventKind::PointerEnter));
    assert!(!rows[1].dispatch(EventKind::Click));
    assert!(!rows[0].dispatch(EventKind::PointerLeave));
    assert_eq!(
        *log.borrow(),
        vec![("enter", 0), ("click", 0), ("enter", 1)]
    );
}

#[test]
fn test_hex_item_color() {
    let node = Legend::new()
        .item(LegendItem::new("A").custom_color(Color::from_hex(0x123456)))
        .item(LegendItem::new("B").attr("color", "#abc"))
        .item(LegendItem::new("C").attr("color", "#nothex"))
        .render();

    let rows = rows(&node);
    assert_eq!(rows[0].class_attr(), "vl-legend__item");
    assert!(rows[0].get_attr("color").is_none());

    let points = node.find_all_by_class("vl-legend__point");
    assert_eq!(points[0].get_attr("fill"), Some(&Value::from("#123456")));
    assert_eq!(points[1].get_attr("fill"), Some(&Value::from("#aabbcc")));
    assert_eq!(
        points[2].get_attr("fill"),
        Some(&Value::from(Palette::series(2).color().to_css()))
    );
}

#[test]
fn test_item_pass_through() {
    let node = Legend::new()
        .attr("aria-label", "Series")
        .item(
            LegendItem::new("A")
                .color(Palette::Red)
                .variant(PointVariant::Square)
                .attr("data-series", "a")
                .class("highlight"),
        )
        .render();

    let root = node.as_element().unwrap();
    assert_eq!(root.get_attr("aria-label"), Some(&Value::from("Series")));

    let row = rows(&node)[0];
    assert_eq!(
        row.class_attr(),
        "vl-legend__item vl-legend__item--red highlight"
    );
    assert_eq!(row.get_attr("data-series"), Some(&Value::from("a")));
    assert!(row.get_attr("color").is_none());
    assert!(row.get_attr("pointVariant").is_none());

    let point = node.find_by_class("vl-legend__point").unwrap();
    assert_eq!(point.tag(), "rect");
    assert!(point.has_class("vl-legend__point--square"));
    assert_eq!(
        point.get_attr("fill"),
        Some(&Value::from(Palette::Red.color().to_css()))
    );
}

#[test]
fn test_uncolored_items_follow_series_palette() {
    let node = Legend::new()
        .item(LegendItem::new("A"))
        .item(LegendItem::new("B"))
        .render();

    let points = node.find_all_by_class("vl-legend__point");
    assert_eq!(
        points[1].get_attr("fill"),
        Some(&Value::from(Palette::series(1).color().to_css()))
    );
}

#[test]
fn test_from_props_with_unknown_orientation() {
    let props = Props {
        attrs: Attrs::new()
            .with("orientation", "diagonal")
            .with("data-testid", "legend"),
        content: vec![
            LegendItem::new("Points").into(),
            LegendItem::new("Trend").point(false).line(true).into(),
        ],
        ..Props::default()
    };
    let node = Legend::from_props(&props).render();
    let root = node.as_element().unwrap();

    assert_eq!(root.class_attr(), "vl-legend");
    assert!(root.get_attr("orientation").is_none());
    assert_eq!(root.get_attr("data-testid"), Some(&Value::from("legend")));
    assert_eq!(indicator_widths(&node), vec![Value::from(8.0_f64), Value::from(16.0_f64)]);
}

#[test]
fn test_from_props_vertical() {
    let props = Props {
        attrs: Attrs::new().with("orientation", "vertical").with("isReversed", true),
        content: vec![LegendItem::new("Only").into()],
        ..Props::default()
    };
    let legend = Legend::from_props(&props);

    assert_eq!(legend.config().orientation, Some(Orientation::Vertical));
    assert!(legend.config().is_reversed);
    let node = legend.render();
    assert_eq!(
        node.as_element().unwrap().class_attr(),
        "vl-legend vl-legend--vertical vl-legend--reversed"
    );
}

#[test]
fn test_empty_legend() {
    let node = Legend::new().render();
    assert!(rows(&node).is_empty());
    assert_eq!(
        node.to_markup(),
        r#"<div class="vl-legend vl-legend--horizontal" role="list"></div>"#
    );
}
