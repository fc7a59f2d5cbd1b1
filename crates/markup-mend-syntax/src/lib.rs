//! # markup-mend-syntax
//!
//! A lossless markup syntax tree using [Rowan] + [Logos], following the
//! [rust-analyzer] architecture model, plus the two structural passes that
//! give the tree its shape:
//!
//! - the **element builder** ([`rewrite`]) folds the parser's flat sequence
//!   of `<...>` tag blocks into properly nested elements, recovering
//!   permissively from mismatched, unclosed, and orphaned tags the way HTML5
//!   parsers do;
//! - the **element flattener** ([`flatten`]) is its exact structural inverse,
//!   unwrapping every element back into the flat tag-block sequence.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Losslessness
//!
//! Every byte of the source appears in exactly one token of the tree, and
//! both passes preserve the leaf-token sequence exactly — they change tree
//! *shape* only, never text, and they never fail, however malformed the
//! input. That makes `flatten(rewrite(t))` a true round trip.
//!
//! ## Pipeline
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → flat Rowan tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//!                                                         │ rewrite
//!                                                         ▼
//!                                                  nested element tree
//! ```
//!
//! The parser deliberately stops at a flat tree: pairing start and end tags
//! needs global knowledge and error recovery, so it lives in its own pass
//! ([`rewrite`] module) where it can be tested — and inverted — in isolation.
//!
//! ## Quick Start
//!
//! ```
//! use markup_mend_syntax::{Document, Element};
//!
//! let document = Document::parse("<div><img>text</div>").build_elements();
//!
//! // The tree preserves all text
//! assert_eq!(document.text(), "<div><img>text</div>");
//!
//! let div = document
//!     .root()
//!     .children()
//!     .find_map(Element::cast)
//!     .unwrap();
//! assert_eq!(div.start_tag().map(|t| t.name()), Some("div".to_string()));
//! assert_eq!(div.end_tag().map(|t| t.name()), Some("div".to_string()));
//! ```

pub mod document;
pub mod dump;
pub mod lexer;
pub mod parser;
pub mod rewrite;
pub mod syntax_kind;
pub mod tags;

pub use document::{Diagnostic, Document, ParseOptions};
pub use dump::dump_tree;
pub use parser::parse;
pub use rewrite::{flatten, rewrite, rewrite_with};
pub use syntax_kind::{MarkupLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use tags::{Element, TagBlock};

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    /// The ordered leaf-token sequence of a tree.
    fn token_sequence(node: &SyntaxNode) -> Vec<(SyntaxKind, String)> {
        node.descendants_with_tokens()
            .filter_map(|el| el.into_token())
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    /// Property harness for the generated fixture tests: parsing is lossless,
    /// both passes preserve the token sequence, both are idempotent, and the
    /// builder leaves no tag block outside an element.
    fn fixture_roundtrip(source: &str) {
        let flat = parse(source);
        assert_eq!(flat.text().to_string(), source);

        let built = rewrite(&flat);
        assert_eq!(built.text().to_string(), source);
        assert_eq!(token_sequence(&flat), token_sequence(&built));
        assert_eq!(
            dump_tree(&built),
            dump_tree(&rewrite(&built)),
            "rewrite must be idempotent"
        );
        for tag in built
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::TAG_BLOCK)
        {
            assert_eq!(
                tag.parent().map(|p| p.kind()),
                Some(SyntaxKind::ELEMENT),
                "every tag block must end up inside an element"
            );
        }

        let unwrapped = flatten(&built);
        assert_eq!(dump_tree(&unwrapped), dump_tree(&flat));
        assert_eq!(
            dump_tree(&flatten(&unwrapped)),
            dump_tree(&unwrapped),
            "flatten must be idempotent"
        );
    }

    include!(concat!(env!("OUT_DIR"), "/fixture_tests.rs"));

    #[test]
    fn snapshot_void_element() {
        let tree = rewrite(&parse("<img>"));
        assert_snapshot!(dump_tree(&tree), @r#"
ROOT
  ELEMENT
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        TEXT "img"
      TEXT_LITERAL
        GT ">"
"#);
    }

    #[test]
    fn snapshot_matched_element() {
        let tree = rewrite(&parse("<div>hi</div>"));
        assert_snapshot!(dump_tree(&tree), @r#"
ROOT
  ELEMENT
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        TEXT "div"
      TEXT_LITERAL
        GT ">"
    TEXT_LITERAL
      TEXT "hi"
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        SLASH "/"
        TEXT "div"
      TEXT_LITERAL
        GT ">"
"#);
    }

    #[test]
    fn snapshot_overlap_recovery() {
        let tree = rewrite(&parse("<b><i></b></i>"));
        assert_snapshot!(dump_tree(&tree), @r#"
ROOT
  ELEMENT
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        TEXT "b"
      TEXT_LITERAL
        GT ">"
    ELEMENT
      TAG_BLOCK
        TEXT_LITERAL
          LT "<"
          TEXT "i"
        TEXT_LITERAL
          GT ">"
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        SLASH "/"
        TEXT "b"
      TEXT_LITERAL
        GT ">"
  ELEMENT
    TAG_BLOCK
      TEXT_LITERAL
        LT "<"
        SLASH "/"
        TEXT "i"
      TEXT_LITERAL
        GT ">"
"#);
    }

    #[test]
    fn roundtrip_preserves_text() {
        let inputs = [
            "<div></div>",
            "<div>text</div>",
            "<b><i></b></i>",
            "</orphan>",
            "<unclosed>rest",
            "<img><br/><input type='text'>",
            "<>",
            "plain text, no tags at all",
            "5 < 6 but 7 > 6",
            "",
        ];

        for input in inputs {
            let tree = parse(input);
            assert_eq!(
                tree.text().to_string(),
                input,
                "Roundtrip failed for: {:?}",
                input
            );
            assert_eq!(
                flatten(&rewrite(&tree)).text().to_string(),
                input,
                "Rewrite/flatten roundtrip failed for: {:?}",
                input
            );
        }
    }

    #[test]
    fn token_multiset_invariant_under_both_passes() {
        let source = "<ul><li>one<li>two</ul></li> <hr> tail";
        let flat = parse(source);
        let built = rewrite(&flat);
        let unwrapped = flatten(&built);

        let mut original = token_sequence(&flat);
        let mut after_build = token_sequence(&built);
        let mut after_flatten = token_sequence(&unwrapped);

        // In-order equality is the stronger claim; sort to also state the
        // multiset form explicitly.
        assert_eq!(original, after_build);
        assert_eq!(original, after_flatten);
        original.sort();
        after_build.sort();
        after_flatten.sort();
        assert_eq!(original, after_build);
        assert_eq!(original, after_flatten);
    }
}
