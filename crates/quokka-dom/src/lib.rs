//! Node-tree model for the Quokka HTML parser.
//!
//! This crate provides the owned tree the tree builder produces: a parent
//! owns its children exclusively, there are no parent or sibling
//! back-references, and a parsed document is an ordered sequence of
//! top-level nodes (a *forest*, not a single root) since scanned input need
//! not have one enclosing tag.
//!
//! # Design
//!
//! Ownership is strictly hierarchical, so the tree is plain data: it can be
//! cloned, compared, serialized, and traversed with ordinary recursion,
//! with no arena or interior mutability involved.

use core::fmt;

use serde::Serialize;

/// A node in the parsed tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "The DOM represents a document as a tree."
///
/// Children are stored in document order and owned exclusively by their
/// parent. Text and comment nodes are leaves; their `children` vector is
/// always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,
    /// "A node has an associated list of children"
    pub children: Vec<Node>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeType {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: Only the local name is stored. The tokenizer scans attribute text
/// and discards it, so elements carry no attribute map anywhere in the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
}

/// Build an element node with the given tag name and children.
#[must_use]
pub fn elem(tag_name: impl Into<String>, children: Vec<Node>) -> Node {
    Node {
        node_type: NodeType::Element(ElementData {
            tag_name: tag_name.into(),
        }),
        children,
    }
}

/// Build a text leaf node.
#[must_use]
pub fn text(data: impl Into<String>) -> Node {
    Node {
        node_type: NodeType::Text(data.into()),
        children: Vec::new(),
    }
}

/// Build a comment leaf node.
#[must_use]
pub fn comment(data: impl Into<String>) -> Node {
    Node {
        node_type: NodeType::Comment(data.into()),
        children: Vec::new(),
    }
}

impl Node {
    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Text(data) => Some(data.as_str()),
            _ => None,
        }
    }

    /// Get comment content if this node is a comment node.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Comment(data) => Some(data.as_str()),
            _ => None,
        }
    }
}

/// Per-kind node totals for a forest, including all descendants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    /// Number of element nodes.
    pub elements: usize,
    /// Number of text nodes.
    pub text: usize,
    /// Number of comment nodes.
    pub comments: usize,
}

impl fmt::Display for NodeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} elements, {} text nodes, {} comments",
            self.elements, self.text, self.comments
        )
    }
}

/// Tally nodes of each kind over an entire forest, descendants included.
///
/// Traversal is depth-first; the result does not depend on order, only on
/// the multiset of nodes reachable from the forest roots.
#[must_use]
pub fn count_nodes(nodes: &[Node]) -> NodeCounts {
    let mut counts = NodeCounts::default();
    for node in nodes {
        match &node.node_type {
            NodeType::Element(_) => counts.elements += 1,
            NodeType::Text(_) => counts.text += 1,
            NodeType::Comment(_) => counts.comments += 1,
        }
        let nested = count_nodes(&node.children);
        counts.elements += nested.elements;
        counts.text += nested.text;
        counts.comments += nested.comments;
    }
    counts
}
