//! Typed wrappers and classification for tag blocks and elements.
//!
//! These are thin views over [`SyntaxNode`]s in the rust-analyzer AST style:
//! `cast` checks the kind, `syntax` gets the raw node back. Classification
//! never inspects attributes and never allocates new tree nodes.

use rowan::NodeOrToken;

use crate::syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// HTML tag names that never have an end tag or body.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// One complete `<...>` delimiter: a start, end, void, or self-closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock(SyntaxNode);

impl TagBlock {
    /// Wrap a node if it is a TAG_BLOCK.
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::TAG_BLOCK).then(|| Self(node))
    }

    /// The underlying syntax node.
    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// The TEXT_LITERAL segments making up this tag.
    pub fn literals(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }

    /// The extracted tag name. May be empty for malformed input like `<>`
    /// or `< div>`.
    pub fn name(&self) -> String {
        self.0
            .children()
            .next()
            .into_iter()
            .flat_map(|lit| lit.children_with_tokens())
            .filter_map(|el| el.into_token())
            .find(|t| t.kind() == SyntaxKind::TEXT)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// True when no usable tag name could be extracted.
    pub fn has_blank_name(&self) -> bool {
        self.name().trim().is_empty()
    }

    /// True when the tag name is one of the fixed HTML void element names.
    pub fn is_void(&self) -> bool {
        let name = self.name();
        VOID_TAGS.iter().any(|v| v.eq_ignore_ascii_case(&name))
    }

    /// True when the tag's own text ends in `/>`.
    pub fn is_self_closing(&self) -> bool {
        match self.0.children_with_tokens().last() {
            Some(NodeOrToken::Node(n)) => n.text().to_string().ends_with("/>"),
            Some(NodeOrToken::Token(t)) => t.text().ends_with("/>"),
            None => false,
        }
    }

    /// True when this tag block is an end tag (`</name>`).
    ///
    /// The first literal holds the open delimiter tokens. When it has exactly
    /// one token we test that token, otherwise we test the second one: a
    /// start tag reads `<` then name, an end tag reads `<` then `/`. The
    /// token position is part of the tag-block layout contract with the
    /// grammar; do not replace this with a scan for a slash anywhere.
    pub fn is_end_tag(&self) -> bool {
        let Some(first) = self.0.children().next() else {
            return false;
        };
        let tokens: Vec<SyntaxToken> = first
            .children_with_tokens()
            .filter_map(|el| el.into_token())
            .collect();
        let probe = if tokens.len() == 1 {
            tokens.first()
        } else {
            tokens.get(1)
        };
        probe.is_some_and(|t| t.kind() == SyntaxKind::SLASH)
    }
}

/// A nested element: start tag, body, end tag.
///
/// At least one of the tags is present. When both are, their names matched
/// case-insensitively at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element(SyntaxNode);

impl Element {
    /// Wrap a node if it is an ELEMENT.
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::ELEMENT).then(|| Self(node))
    }

    /// The underlying syntax node.
    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// The start tag, absent for an orphaned end tag.
    pub fn start_tag(&self) -> Option<TagBlock> {
        let first = self.0.first_child()?;
        let tag = TagBlock::cast(first)?;
        (!tag.is_end_tag()).then_some(tag)
    }

    /// The end tag, absent for void, self-closing, and unclosed elements.
    pub fn end_tag(&self) -> Option<TagBlock> {
        let last = self.0.last_child()?;
        let tag = TagBlock::cast(last)?;
        tag.is_end_tag().then_some(tag)
    }

    /// The children between the tags, in source order.
    pub fn body(&self) -> Vec<SyntaxElement> {
        let children: Vec<_> = self.0.children_with_tokens().collect();
        let skip_front = usize::from(self.start_tag().is_some());
        let skip_back = usize::from(self.end_tag().is_some());
        children[skip_front..children.len() - skip_back].to_vec()
    }
}
