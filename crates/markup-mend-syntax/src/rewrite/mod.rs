//! Structural rewriting passes over the markup tree.
//!
//! Two inverse passes, both purely functional: they take a tree value and
//! return a new tree value, sharing untouched green subtrees with the input.
//! No node is ever mutated, no pass ever fails, and the leaf tokens of the
//! tree are exactly preserved by both.
//!
//! - [`rewrite`] groups flat sibling tag blocks into ELEMENT nodes, applying
//!   permissive HTML5-style recovery for mismatched, unclosed, and orphaned
//!   tags.
//! - [`flatten`] unwraps every ELEMENT back into its flat tag-block sequence.

mod build;
mod flatten;

pub use build::{rewrite, rewrite_with};
pub use flatten::flatten;

use rowan::{GreenNode, GreenToken, NodeOrToken};

use crate::syntax_kind::SyntaxElement;

/// A green-tree child: the unit the rewriters splice.
pub(crate) type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Detach an element from its red tree as an owned green value.
pub(crate) fn green_of(element: &SyntaxElement) -> GreenElement {
    match element {
        NodeOrToken::Node(n) => NodeOrToken::Node(n.green().into_owned()),
        NodeOrToken::Token(t) => NodeOrToken::Token(t.green().to_owned()),
    }
}
