//! Error handling for lexing and parsing.
//!
//! Every failure in the crate is an [`InfixError`]: a typed kind, an error
//! code, and an optional help message. Errors are returned to the caller
//! immediately — there is no retry or partial recovery in pure parsing — and
//! render as full miette diagnostics once source text is attached via
//! [`SourceContext`].

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource};
use thiserror::Error;

use crate::syntax::{to_source_span, Span};
use crate::token::TokenKind;

/// Source text for error reporting, attached at the boundary that owns it
/// (the CLI, the REPL, a test). The parser itself only sees tokens.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to the named source miette renders snippets from.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

/// What went wrong, with the data the caller needs to act on it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The lexer met a character no rule (and no external scanner) claims.
    #[error("unrecognized character '{ch}'")]
    UnknownCharacter { ch: char, span: Span },

    /// An integer literal that does not fit an `i64`.
    #[error("integer literal `{value}` is out of range")]
    InvalidLiteral { value: String, span: Span },

    /// The parser needed one of a specific set of token kinds and found
    /// something else.
    #[error("expected {}, found {}", describe_kinds(.expected), .found.describe())]
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
        span: Span,
    },

    /// Input was exhausted while a production was still incomplete.
    #[error("unexpected end of input, expected {}", describe_kinds(.expected))]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },

    /// A complete expression was parsed but input remains.
    #[error("unexpected input after a complete expression")]
    TrailingTokens { span: Span },
}

fn describe_kinds(kinds: &[TokenKind]) -> String {
    let parts: Vec<&str> = kinds.iter().map(TokenKind::describe).collect();
    parts.join(" or ")
}

impl ErrorKind {
    /// Error category, for test assertions and code generation.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCharacter { .. } | Self::InvalidLiteral { .. } => ErrorCategory::Lex,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::TrailingTokens { .. } => ErrorCategory::Parse,
        }
    }

    /// Suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnknownCharacter { .. } => "unknown_character",
            Self::InvalidLiteral { .. } => "invalid_literal",
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::UnexpectedEndOfInput { .. } => "unexpected_end_of_input",
            Self::TrailingTokens { .. } => "trailing_tokens",
        }
    }

    /// The span the diagnostic label points at, where the kind carries one.
    pub fn primary_span(&self) -> Option<Span> {
        match self {
            Self::UnknownCharacter { span, .. }
            | Self::InvalidLiteral { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::TrailingTokens { span } => Some(*span),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::UnknownCharacter { .. } => "no lexical rule matches here",
            Self::InvalidLiteral { .. } => "does not fit a 64-bit integer",
            Self::UnexpectedToken { .. } => "unexpected token",
            Self::UnexpectedEndOfInput { .. } => "input ends here",
            Self::TrailingTokens { .. } => "expression already complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Parse,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lex => "lex",
            Self::Parse => "parse",
        }
    }
}

/// The single error type for the crate.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct InfixError {
    pub kind: ErrorKind,
    source_code: Option<Arc<NamedSource<String>>>,
    help: Option<String>,
    code: String,
}

impl InfixError {
    pub fn new(kind: ErrorKind) -> Self {
        let code = format!("infix::{}::{}", kind.category().as_str(), kind.code_suffix());
        Self {
            kind,
            source_code: None,
            help: None,
            code,
        }
    }

    /// Attach source text so the diagnostic renders a snippet.
    pub fn with_source(mut self, ctx: &SourceContext) -> Self {
        self.source_code = Some(ctx.to_named_source());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl Diagnostic for InfixError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = match self.kind.primary_span() {
            Some(span) => to_source_span(span),
            // End-of-input errors carry no span; point at the end of the
            // attached source when there is one.
            None => {
                let source = self.source_code.as_ref()?;
                let len = source.inner().len();
                miette::SourceSpan::from(len..len)
            }
        };
        let label = LabeledSpan::new_with_span(Some(self.kind.primary_label().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_code
            .as_ref()
            .map(|s| &**s as &dyn miette::SourceCode)
    }
}

// Constructors used by the lexer and parser.

pub fn unknown_character(ch: char, span: Span) -> InfixError {
    InfixError::new(ErrorKind::UnknownCharacter { ch, span })
}

pub fn invalid_literal(value: impl Into<String>, span: Span) -> InfixError {
    InfixError::new(ErrorKind::InvalidLiteral {
        value: value.into(),
        span,
    })
}

pub fn unexpected_token(found: TokenKind, expected: Vec<TokenKind>, span: Span) -> InfixError {
    InfixError::new(ErrorKind::UnexpectedToken {
        found,
        expected,
        span,
    })
}

pub fn unexpected_end_of_input(expected: Vec<TokenKind>) -> InfixError {
    InfixError::new(ErrorKind::UnexpectedEndOfInput { expected })
        .with_help("the expression is incomplete; add the missing operand")
}

pub fn trailing_tokens(span: Span) -> InfixError {
    InfixError::new(ErrorKind::TrailingTokens { span })
        .with_help("a single expression is accepted; join the parts with an operator")
}

/// Prints an error with full miette diagnostics to stderr.
///
/// Use this for user-facing display in CLI and REPL contexts.
pub fn print_error(error: InfixError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
