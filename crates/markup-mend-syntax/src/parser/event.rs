//! Parser events.
//!
//! Events are the intermediate representation between parsing and tree
//! building. Instead of building the tree directly, the parser emits a flat
//! sequence of events describing the tree structure, and the
//! [`Sink`](super::sink::Sink) replays them into a rowan green tree:
//!
//! ```text
//! Start(TAG_BLOCK)
//!   Start(TEXT_LITERAL)
//!     Token(LT)
//!     Token(TEXT)
//!   Finish
//!   ...
//! Finish
//! ```
//!
//! The indirection keeps grammar code free of rowan details and makes the
//! marker system (speculative starts that can be abandoned) cheap.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node of the given kind.
    Start { kind: SyntaxKind },

    /// Add the next lexer token to the current node, recorded as `kind`.
    Token { kind: SyntaxKind },

    /// Finish the current node. Must be paired with a preceding `Start`.
    Finish,

    /// A placeholder that will be replaced.
    ///
    /// When `parser.start()` is called, a `Placeholder` is pushed. Later,
    /// `marker.complete()` replaces it with a real `Start`, or
    /// `marker.abandon()` leaves it (the Sink ignores placeholders).
    Placeholder,
}

impl Event {
    /// Create a start event.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    /// Create a token event.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}
