//! Tests for the node-tree model and counting utilities.

use quokka_dom::{NodeCounts, NodeType, comment, count_nodes, elem, text};

#[test]
fn test_constructors_build_leaves_and_children_in_order() {
    let node = elem("div", vec![text("a"), comment("b"), elem("p", Vec::new())]);

    assert_eq!(node.as_element().map(|data| data.tag_name.as_str()), Some("div"));
    assert_eq!(node.children.len(), 3);
    assert_eq!(node.children[0].as_text(), Some("a"));
    assert_eq!(node.children[1].as_comment(), Some("b"));
    assert!(matches!(&node.children[2].node_type, NodeType::Element(data) if data.tag_name == "p"));

    // Leaves own no children.
    assert!(node.children[0].children.is_empty());
    assert!(node.children[1].children.is_empty());
}

#[test]
fn test_accessors_return_none_for_other_kinds() {
    let node = text("a");
    assert!(node.as_element().is_none());
    assert!(node.as_comment().is_none());
    assert_eq!(node.as_text(), Some("a"));
}

#[test]
fn test_count_includes_all_descendants() {
    let forest = vec![
        elem(
            "div",
            vec![
                elem("p", vec![text("one")]),
                comment("note"),
                elem("span", vec![text("two"), text("three")]),
            ],
        ),
        text("tail"),
    ];

    assert_eq!(
        count_nodes(&forest),
        NodeCounts {
            elements: 3,
            text: 4,
            comments: 1,
        }
    );
}

#[test]
fn test_count_of_empty_forest_is_zero() {
    assert_eq!(count_nodes(&[]), NodeCounts::default());
}

#[test]
fn test_counts_display() {
    let counts = NodeCounts {
        elements: 3,
        text: 2,
        comments: 0,
    };
    assert_eq!(counts.to_string(), "3 elements, 2 text nodes, 0 comments");
}

#[test]
fn test_nodes_serialize_to_json() {
    let node = elem("div", vec![text("hi")]);
    let value = serde_json::to_value(&node).expect("node serializes");

    assert_eq!(value["node_type"]["Element"]["tag_name"], "div");
    assert_eq!(value["children"][0]["node_type"]["Text"], "hi");
}
