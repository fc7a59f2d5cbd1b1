//! Tag-block and text-run grammar rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse one top-level markup node: a tag block or a text run.
pub(super) fn node(p: &mut Parser<'_, '_>) {
    if p.at(SyntaxKind::LT) {
        tag_block(p);
    } else {
        text_run(p);
    }
}

/// Parse one complete `<...>` delimiter.
///
/// Layout invariant relied on by tag classification:
///
/// - first child: TEXT_LITERAL with the open delimiter tokens
///   (`<`, optional `/`, optional name)
/// - optional middle child: TEXT_LITERAL with attribute text, verbatim
/// - last child: TEXT_LITERAL with the `>` or `/>` closer, when present
///
/// A tag block missing its closer ends early at the next `<` or at end of
/// input; recovery for that shape happens in the element rewriter, not here.
fn tag_block(p: &mut Parser<'_, '_>) {
    let m = p.start();

    let open = p.start();
    p.bump(); // `<`
    p.eat(SyntaxKind::SLASH);
    p.eat(SyntaxKind::TEXT);
    open.complete(p, SyntaxKind::TEXT_LITERAL);

    attr_text(p);

    if p.at(SyntaxKind::GT) || p.at(SyntaxKind::SLASH_GT) {
        let close = p.start();
        p.bump();
        close.complete(p, SyntaxKind::TEXT_LITERAL);
    }

    m.complete(p, SyntaxKind::TAG_BLOCK);
}

/// Consume attribute text up to the tag closer, if any.
fn attr_text(p: &mut Parser<'_, '_>) {
    let m = p.start();
    let mut consumed = false;

    while !p.at_end()
        && !p.at(SyntaxKind::GT)
        && !p.at(SyntaxKind::SLASH_GT)
        && !p.at(SyntaxKind::LT)
    {
        p.bump();
        consumed = true;
    }

    if consumed {
        m.complete(p, SyntaxKind::TEXT_LITERAL);
    } else {
        m.abandon(p);
    }
}

/// Parse a run of consecutive non-tag tokens into one TEXT_LITERAL.
fn text_run(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() && !p.at(SyntaxKind::LT) {
        p.bump();
    }

    m.complete(p, SyntaxKind::TEXT_LITERAL);
}
