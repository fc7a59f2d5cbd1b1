//! Document container: a parsed tree plus diagnostics and parse options.
//!
//! The rewriting passes operate on whole documents: they replace the tree and
//! pass diagnostics and options through untouched, so a document's source
//! text and reported problems are identical before and after either pass.

use std::ops::Range;

use crate::rewrite::{flatten, rewrite_with};
use crate::syntax_kind::SyntaxNode;

/// A problem reported against a byte range of the source.
///
/// Malformed markup is not an error — the rewriters absorb it structurally —
/// so parsing itself never produces diagnostics. The slot exists for
/// embedders layering their own analyses on the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range<usize>,
    pub message: String,
}

/// Options for parsing and element building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Additional tag names treated like HTML void elements when building
    /// elements (compared case-insensitively).
    pub extra_void_tags: Vec<String>,
}

/// A parsed markup document.
#[derive(Debug, Clone)]
pub struct Document {
    root: SyntaxNode,
    diagnostics: Vec<Diagnostic>,
    options: ParseOptions,
}

impl Document {
    /// Parse source text with default options.
    pub fn parse(source: &str) -> Self {
        Self::parse_with_options(source, ParseOptions::default())
    }

    /// Parse source text with explicit options.
    pub fn parse_with_options(source: &str, options: ParseOptions) -> Self {
        Self {
            root: crate::parser::parse(source),
            diagnostics: Vec::new(),
            options,
        }
    }

    /// The document's syntax tree.
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Diagnostics attached to this document.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Attach a diagnostic.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// The options this document was parsed with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The full source text, reconstructed from the tree.
    pub fn text(&self) -> String {
        self.root.text().to_string()
    }

    /// A new document with tag blocks grouped into elements.
    pub fn build_elements(&self) -> Self {
        Self {
            root: rewrite_with(&self.root, &self.options),
            diagnostics: self.diagnostics.clone(),
            options: self.options.clone(),
        }
    }

    /// A new document with every element unwrapped back to flat tag blocks.
    pub fn flatten_elements(&self) -> Self {
        Self {
            root: flatten(&self.root),
            diagnostics: self.diagnostics.clone(),
            options: self.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn passes_carry_diagnostics_and_options_through() {
        let options = ParseOptions {
            extra_void_tags: vec!["icon".into()],
        };
        let mut document = Document::parse_with_options("<div><icon></div>", options.clone());
        document.push_diagnostic(Diagnostic {
            range: 0..5,
            message: "unrelated".into(),
        });

        let built = document.build_elements();
        assert_eq!(built.diagnostics(), document.diagnostics());
        assert_eq!(built.options(), &options);

        let flat = built.flatten_elements();
        assert_eq!(flat.diagnostics(), document.diagnostics());
        assert_eq!(flat.options(), &options);
    }

    #[test]
    fn passes_preserve_source_text() {
        let source = "<b><i>overlap</b></i> <img> tail";
        let document = Document::parse(source);
        assert_eq!(document.text(), source);
        assert_eq!(document.build_elements().text(), source);
        assert_eq!(document.build_elements().flatten_elements().text(), source);
    }

    #[test]
    fn parsing_never_reports_malformed_markup() {
        let document = Document::parse("</orphan> <unclosed <>");
        assert!(document.diagnostics().is_empty());
        assert!(document.build_elements().diagnostics().is_empty());
    }
}
