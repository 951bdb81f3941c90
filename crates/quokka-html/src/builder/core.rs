//! Recursive-descent construction of a node forest from a token stream.
//!
//! The builder walks the token sequence left to right exactly once through
//! an index cursor. Cursors are threaded immutably: each parsing function
//! takes a cursor and returns the nodes it produced alongside the cursor
//! position it stopped at, so the same sequence can be inspected from
//! nested calls without copying or popping.
//!
//! Nesting is resolved by tag-name matching alone: a start tag opens an
//! element whose children are everything up to the first end tag with a
//! textually equal name (case-sensitive, no normalization). There is no
//! stack of open elements and no insertion modes.
//!
//! Construction is total over any token sequence, including ones no
//! conforming tokenizer would produce (consecutive end tags, degenerate
//! text values). Recursion depth equals the markup nesting depth; no
//! explicit bound is enforced.

use quokka_common::warning::warn_once;
use quokka_dom::{Node, NodeType, comment, elem, text};

use crate::tokenizer::Token;

/// Text values that are dropped during tree construction.
///
/// The match is literal string equality against these four values, NOT an
/// "all characters are whitespace" predicate: `"  "` and `" \n"` survive
/// and become text nodes.
fn is_degenerate_whitespace(data: &str) -> bool {
    matches!(data, "" | " " | "\n" | "\t")
}

/// Folds a token sequence into an ordered forest of nodes.
pub struct TreeBuilder {
    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,
}

impl TreeBuilder {
    /// Create a new builder over a token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Build the forest of top-level nodes.
    ///
    /// Delegates to the node-list parse at cursor 0 and discards the final
    /// cursor. At the top level an end tag terminates the list: any tokens
    /// after a stray top-level end tag are unreachable by construction.
    #[must_use]
    pub fn run(&self) -> Vec<Node> {
        let (nodes, _) = self.parse_node_list(0);
        nodes
    }

    /// Parse sibling nodes until an end tag or the end of the stream.
    ///
    /// Used at the top level, where an end tag is a list boundary rather
    /// than something to skip: the loop stops WITHOUT advancing past it.
    fn parse_node_list(&self, mut cursor: usize) -> (Vec<Node>, usize) {
        let mut nodes = Vec::new();
        while let Some(token) = self.tokens.get(cursor) {
            match token {
                Token::StartTag { name } => {
                    let (children, next) = self.parse_children(cursor + 1, name);
                    nodes.push(elem(name.clone(), children));
                    cursor = next;
                }
                Token::SelfClosingTag { name } => {
                    nodes.push(elem(name.clone(), Vec::new()));
                    cursor += 1;
                }
                Token::Text { data } => {
                    if !is_degenerate_whitespace(data) {
                        nodes.push(text(data.clone()));
                    }
                    cursor += 1;
                }
                Token::Comment { data } => {
                    nodes.push(comment(data.clone()));
                    cursor += 1;
                }
                Token::EndTag { .. } => break,
            }
        }
        (nodes, cursor)
    }

    /// Parse the children of an open element named `parent_tag`.
    ///
    /// Identical to [`Self::parse_node_list`] except for end tags: a
    /// matching end tag is consumed and closes the element; a non-matching
    /// one is consumed and discarded, and scanning resumes for more
    /// siblings. If the stream ends with no matching end tag the element is
    /// legitimately "unclosed" and absorbs everything that remained.
    fn parse_children(&self, mut cursor: usize, parent_tag: &str) -> (Vec<Node>, usize) {
        let mut nodes = Vec::new();
        while let Some(token) = self.tokens.get(cursor) {
            match token {
                Token::StartTag { name } => {
                    let (children, next) = self.parse_children(cursor + 1, name);
                    nodes.push(elem(name.clone(), children));
                    cursor = next;
                }
                Token::SelfClosingTag { name } => {
                    nodes.push(elem(name.clone(), Vec::new()));
                    cursor += 1;
                }
                Token::Text { data } => {
                    if !is_degenerate_whitespace(data) {
                        nodes.push(text(data.clone()));
                    }
                    cursor += 1;
                }
                Token::Comment { data } => {
                    nodes.push(comment(data.clone()));
                    cursor += 1;
                }
                Token::EndTag { name } => {
                    cursor += 1;
                    if name == parent_tag {
                        break;
                    }
                    warn_once(
                        "Tree Builder",
                        &format!("discarding stray end tag </{name}> inside <{parent_tag}>"),
                    );
                }
            }
        }
        (nodes, cursor)
    }
}

/// Build an ordered forest of nodes from a token sequence.
///
/// Total over any token sequence: stray and unmatched end tags degrade per
/// the module docs, never fail.
#[must_use]
pub fn build_forest(tokens: Vec<Token>) -> Vec<Node> {
    TreeBuilder::new(tokens).run()
}

/// Print a forest for debugging: depth-first, pre-order, two spaces of
/// indentation per level. Text is quoted with newlines escaped and spaces
/// made visible.
pub fn print_forest(nodes: &[Node], indent: usize) {
    let prefix = "  ".repeat(indent);
    for node in nodes {
        match &node.node_type {
            NodeType::Element(data) => {
                println!("{prefix}<{}>", data.tag_name);
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                println!("{prefix}\"{display}\"");
            }
            NodeType::Comment(data) => {
                println!("{prefix}<!-- {data} -->");
            }
        }
        print_forest(&node.children, indent + 1);
    }
}
