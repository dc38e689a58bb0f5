//! Behavioral tests for slot extraction over generated children trees.
//!
//! The trees mix text, elements, foreign markers and nested fragments so the
//! ordering guarantees are checked against a naive flattening.

use vellum_core::slot::{extract_slots, remainder};
use vellum_core::{Element, Node, SlotComposer, SlotKind, SlotMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListSlot {
    Item,
    Caption,
}

impl SlotKind for ListSlot {
    const OWNER: &'static str = "list";

    fn name(self) -> &'static str {
        match self {
            ListSlot::Item => "item",
            ListSlot::Caption => "caption",
        }
    }
}

/// Deterministic pseudo-random children tree built from `seed`.
fn build_children(seed: u32, len: usize, depth: u32) -> Vec<Node> {
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    let mut nodes = Vec::with_capacity(len);
    for i in 0..len {
        let node = match next() % 5 {
            0 => ListSlot::Item.slot().attr("n", format!("{}-{}", seed, i)).into(),
            1 => ListSlot::Caption.slot().attr("n", format!("{}-{}", seed, i)).into(),
            2 => Element::new("p").attr("n", format!("{}-{}", seed, i)).into(),
            3 if depth > 0 => Node::Fragment(build_children(next(), 4, depth - 1)),
            _ => Node::text(format!("{}-{}", seed, i)),
        };
        nodes.push(node);
    }
    nodes
}

fn flatten(nodes: &[Node]) -> Vec<&Node> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            Node::Fragment(inner) => out.extend(flatten(inner)),
            other => out.push(other),
        }
    }
    out
}

fn identity(node: &Node) -> String {
    match node {
        Node::Slot(slot) => {
            let n = slot.props().string("n").unwrap_or("");
            format!("slot:{}:{}", slot.tag(), n)
        }
        other => other.to_markup(),
    }
}

#[test]
fn test_extraction_matches_tagged_subsequence() {
    for seed in 0..64 {
        let children = build_children(seed, 12, 3);
        let flat = flatten(&children);

        let expected: Vec<_> = flat
            .iter()
            .filter_map(|node| node.as_slot())
            .filter(|slot| slot.tag() == ListSlot::Item.tag())
            .map(|slot| slot.props().string("n").unwrap().to_string())
            .collect();

        let extracted: Vec<_> = extract_slots(&children, ListSlot::Item.tag())
            .iter()
            .map(|props| props.string("n").unwrap().to_string())
            .collect();

        assert_eq!(extracted, expected, "seed {}", seed);
    }
}

#[test]
fn test_extraction_is_idempotent_and_read_only() {
    let children = build_children(7, 20, 3);
    let before: Vec<_> = flatten(&children).into_iter().map(identity).collect();

    let first: Vec<_> = extract_slots(&children, ListSlot::Caption.tag())
        .iter()
        .map(|p| p.string("n").map(str::to_string))
        .collect();
    let second: Vec<_> = extract_slots(&children, ListSlot::Caption.tag())
        .iter()
        .map(|p| p.string("n").map(str::to_string))
        .collect();

    let after: Vec<_> = flatten(&children).into_iter().map(identity).collect();
    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_reinserting_slots_reconstructs_order() {
    for seed in 0..32 {
        let children = build_children(seed, 10, 2);
        let flat = flatten(&children);
        let item = ListSlot::Item.tag();

        let rest = remainder(&children, &[item]);
        let mut items = extract_slots(&children, item).into_iter();
        let mut rest_iter = rest.into_iter();

        let rebuilt: Vec<String> = flat
            .iter()
            .map(|node| match node.as_slot() {
                Some(slot) if slot.tag() == item => {
                    let props = items.next().unwrap();
                    format!("slot:{}:{}", item, props.string("n").unwrap())
                }
                _ => identity(rest_iter.next().unwrap()),
            })
            .collect();

        let original: Vec<_> = flat.iter().map(|node| identity(node)).collect();
        assert_eq!(rebuilt, original, "seed {}", seed);
        assert!(items.next().is_none());
        assert!(rest_iter.next().is_none());
    }
}

#[test]
fn test_composer_agrees_with_free_functions() {
    for seed in 0..32 {
        let children = build_children(seed, 10, 2);
        let composed = SlotComposer::new()
            .slot(ListSlot::Item, SlotMode::All)
            .slot(ListSlot::Caption, SlotMode::First)
            .compose(&children);

        let items = extract_slots(&children, ListSlot::Item.tag());
        assert_eq!(composed.all(ListSlot::Item).len(), items.len());

        let captions = extract_slots(&children, ListSlot::Caption.tag());
        assert_eq!(composed.all(ListSlot::Caption).len(), captions.len().min(1));

        let rest = remainder(&children, &[ListSlot::Item.tag(), ListSlot::Caption.tag()]);
        assert_eq!(composed.content().len(), rest.len());
    }
}
