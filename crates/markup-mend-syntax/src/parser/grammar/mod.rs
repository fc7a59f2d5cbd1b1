//! Grammar rules.
//!
//! Each function takes a `&mut Parser` and uses its methods to inspect tokens
//! (`p.current()`, `p.at()`), consume them (`p.bump()`, `p.eat()`), and build
//! structure (`p.start()` → marker → `complete()`/`abandon()`).
//!
//! The grammar is deliberately shallow: it recognizes individual `<...>` tag
//! blocks and text runs, and never attempts to pair start and end tags. The
//! element rewriter owns pairing and recovery, so the grammar stays total and
//! trivially lossless. Grammar rules never panic and never reject input; an
//! unterminated tag block simply ends at the next `<` or at end of input.

mod markup;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root document.
///
/// This is the entry point for parsing. It creates a ROOT node containing a
/// flat sequence of tag blocks and text literals.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() {
        markup::node(p);
    }

    m.complete(p, SyntaxKind::ROOT);
}
