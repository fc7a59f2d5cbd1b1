//! Tokenizing markup source with the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! The most important property of this lexer is that **every byte in the input
//! appears in exactly one token**. We never skip or discard characters, which
//! is what makes round-tripping possible:
//!
//! ```
//! use markup_mend_syntax::lexer::lex;
//!
//! let input = "<div class=\"x\">hi</div>";
//! let tokens = lex(input);
//!
//! // Concatenating all token texts gives back the original
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! Tokens are minimal and context-free: the lexer doesn't know whether a `<`
//! opens a start tag, an end tag, or is a stray comparison sign in prose.
//! That's the parser's job. Characters with delimiter meaning get their own
//! kinds (`<`, `>`, `/`, `/>`, `=`, quotes); everything else becomes `TEXT`
//! runs. `/>` is lexed as a single token so a self-closing tag's closer stays
//! in one piece (Logos picks the longest match, so a lone `/` still lexes as
//! `SLASH`).
//!
//! There are two token enums because Logos requires its own derive target
//! ([`TokenKind`]) while rowan stores [`SyntaxKind`]; the
//! [`TokenKind::to_syntax_kind`] method bridges them.
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Each variant maps to a corresponding `SyntaxKind` token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// `<` opening a tag
    #[token("<")]
    Lt,

    /// `>` closing a tag
    #[token(">")]
    Gt,

    /// `/>` closing a self-closing tag
    #[token("/>")]
    SlashGt,

    /// `/` marking an end tag
    #[token("/")]
    Slash,

    /// `=` in attributes
    #[token("=")]
    Eq,

    /// `"` or `'` in attributes
    #[token("\"")]
    #[token("'")]
    Quote,

    /// Plain text - anything not matched by other rules
    #[regex(r#"[^ \t\r\n<>/='"]+"#)]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Lt => SyntaxKind::LT,
            TokenKind::Gt => SyntaxKind::GT,
            TokenKind::SlashGt => SyntaxKind::SLASH_GT,
            TokenKind::Slash => SyntaxKind::SLASH,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Quote => SyntaxKind::QUOTE,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(()) => {
                // Logos error means unrecognized character - treat as TEXT
                SyntaxKind::TEXT
            }
        };
        tokens.push(Token { kind, text });
    }

    tokens
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
