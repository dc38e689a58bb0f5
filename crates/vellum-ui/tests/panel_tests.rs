//! Panel composition tests against the rendered tree.

use vellum_core::{Attrs, Element, Node, Props, SlotKind, Value};
use vellum_ui::panel::{Panel, PanelSlot};

fn region_classes(node: &Node) -> Vec<String> {
    node.as_element()
        .unwrap()
        .child_elements()
        .map(Element::class_attr)
        .collect()
}

#[test]
fn test_panel_without_slots_has_only_content() {
    let node = Panel::new()
        .child("first")
        .child(Element::new("p").child("second"))
        .child("third")
        .render();

    assert_eq!(region_classes(&node), vec!["vl-panel__content"]);
    assert!(node.find_by_class("vl-panel__header").is_none());
    assert!(node.find_by_class("vl-panel__footer").is_none());

    let content = node.find_by_class("vl-panel__content").unwrap();
    assert_eq!(content.get_children().len(), 3);
    assert_eq!(Node::from(content.clone()).text_content(), "firstsecondthird");
}

#[test]
fn test_panel_region_order() {
    let node = Panel::new()
        .child(PanelSlot::Footer.slot().child("Footer"))
        .child("Body")
        .child(PanelSlot::Header.slot().child("Header"))
        .render();

    assert_eq!(
        region_classes(&node),
        vec!["vl-panel__header", "vl-panel__content", "vl-panel__footer"]
    );
    assert_eq!(node.text_content(), "HeaderBodyFooter");
}

#[test]
fn test_duplicate_header_renders_like_single_header() {
    let single = Panel::new()
        .child(PanelSlot::Header.slot().child("A"))
        .child("Body")
        .render();
    let duplicate = Panel::new()
        .child(PanelSlot::Header.slot().child("A"))
        .child("Body")
        .child(PanelSlot::Header.slot().child("B"))
        .render();

    assert_eq!(single.to_markup(), duplicate.to_markup());
    let header = duplicate.find_by_class("vl-panel__header").unwrap();
    assert_eq!(Node::from(header.clone()).text_content(), "A");
}

#[test]
fn test_header_markers_inside_fragments_are_found() {
    let node = Panel::new()
        .child(Node::fragment(vec![
            Node::text("Body"),
            PanelSlot::Header.slot().child("Nested").into(),
        ]))
        .render();

    let header = node.find_by_class("vl-panel__header").unwrap();
    assert_eq!(Node::from(header.clone()).text_content(), "Nested");
    let content = node.find_by_class("vl-panel__content").unwrap();
    assert_eq!(Node::from(content.clone()).text_content(), "Body");
}

#[test]
fn test_pass_through_attributes_reach_root() {
    let node = Panel::new()
        .attr("aria-label", "Usage")
        .attr("data-testid", "usage-panel")
        .attr("class", "wide")
        .render();
    let root = node.as_element().unwrap();

    assert_eq!(root.get_attr("aria-label"), Some(&Value::from("Usage")));
    assert_eq!(root.get_attr("data-testid"), Some(&Value::from("usage-panel")));
    assert_eq!(root.class_attr(), "vl-panel vl-panel--bordered wide");
}

#[test]
fn test_from_props_reads_options_and_forwards_the_rest() {
    let props = Props {
        attrs: Attrs::new()
            .with("isBordered", false)
            .with("isShadowed", "true")
            .with("id", "summary"),
        content: vec![Node::text("Body")],
        ..Props::default()
    };
    let node = Panel::from_props(&props).render();
    let root = node.as_element().unwrap();

    assert_eq!(root.class_attr(), "vl-panel vl-panel--shadowed");
    assert_eq!(root.get_attr("id"), Some(&Value::from("summary")));
    assert!(root.get_attr("isBordered").is_none());
    assert!(root.get_attr("isShadowed").is_none());
    assert_eq!(node.text_content(), "Body");
}

#[test]
fn test_markup() {
    let node = Panel::new()
        .bordered(false)
        .child(PanelSlot::Header.slot().child("Title"))
        .child("Body")
        .render();

    assert_eq!(
        node.to_markup(),
        r#"<div class="vl-panel"><div class="vl-panel__header">Title</div><div class="vl-panel__content">Body</div></div>"#
    );
}
