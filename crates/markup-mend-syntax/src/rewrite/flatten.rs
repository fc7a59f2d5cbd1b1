//! The element flattener: structural inverse of the element builder.
//!
//! Every ELEMENT is replaced by its own child sequence — start tag, body,
//! end tag, whichever are present — spliced in place, recursively, until no
//! ELEMENT remains. Tokens and tag blocks pass through untouched.

use rowan::{GreenNode, NodeOrToken};

use super::GreenElement;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// Unwrap every ELEMENT node back into its flat tag-block sequence.
///
/// Total and lossless; applying it to a tree with no elements is a no-op.
pub fn flatten(tree: &SyntaxNode) -> SyntaxNode {
    SyntaxNode::new_root(flatten_node(tree))
}

fn flatten_node(node: &SyntaxNode) -> GreenNode {
    match node.kind() {
        SyntaxKind::TAG_BLOCK | SyntaxKind::TEXT_LITERAL => node.green().into_owned(),
        _ => GreenNode::new(node.kind().into(), flatten_children(node)),
    }
}

/// Flatten one node's child list, splicing element children inline.
///
/// The splice recurses through the replacement children, so elements nested
/// inside element bodies unwrap in the same traversal.
fn flatten_children(node: &SyntaxNode) -> Vec<GreenElement> {
    let mut out = Vec::new();

    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Token(t) => out.push(NodeOrToken::Token(t.green().to_owned())),
            NodeOrToken::Node(n) if n.kind() == SyntaxKind::ELEMENT => {
                out.extend(flatten_children(&n));
            }
            NodeOrToken::Node(n) => out.push(NodeOrToken::Node(flatten_node(&n))),
        }
    }

    out
}
