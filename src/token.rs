//! Classified lexemes.

use serde::{Deserialize, Serialize};

use crate::syntax::Span;

/// The kind of a token. The expression language has two terminal kinds and
/// two binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Integer,
    Identifier,
    Plus,
    Star,
}

impl TokenKind {
    /// Human description used in diagnostics ("expected an integer literal or
    /// an identifier, found '+'").
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Integer => "an integer literal",
            TokenKind::Identifier => "an identifier",
            TokenKind::Plus => "'+'",
            TokenKind::Star => "'*'",
        }
    }

}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// A classified lexeme with its source span. Immutable once produced by the
/// lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The numeric value of an integer token. `None` for any other kind.
    /// The lexer rejects out-of-range literals, so a well-formed integer
    /// token always converts.
    pub fn integer_value(&self) -> Option<i64> {
        if self.kind != TokenKind::Integer {
            return None;
        }
        self.lexeme.parse().ok()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.lexeme, self.span)
    }
}
