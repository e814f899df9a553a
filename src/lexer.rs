//! The lexer: source text to a token sequence.
//!
//! Whitespace separates tokens and is otherwise dropped. Digit runs become
//! integer literals, `[A-Za-z_][A-Za-z0-9_]*` becomes an identifier, and `+`
//! and `*` become operator tokens. When no built-in rule matches, an
//! installed [`ExternalScanner`] gets one attempt before the character is
//! reported as unrecognized.

use std::iter::Peekable;
use std::str::Chars;

use crate::errors::{invalid_literal, unknown_character, InfixError};
use crate::syntax::{assert_valid_span, Position, Span};
use crate::token::{Token, TokenKind};

/// A pluggable lexing capability, consulted where the built-in rules are
/// insufficient.
pub trait ExternalScanner {
    /// Attempt a custom match at the current position. `rest` is the
    /// unconsumed source and `at` its starting position. On a match, the
    /// returned token's lexeme must be exactly the prefix of `rest` that was
    /// consumed, and its span must start at `at`.
    fn scan(&mut self, rest: &str, at: Position) -> Option<Token>;
}

pub struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<Chars<'src>>,
    pos: Position,
    scanner: Option<Box<dyn ExternalScanner + 'src>>,
}

/// Tokenizes a source string with the built-in rules only.
pub fn tokenize(source: &str) -> Result<Vec<Token>, InfixError> {
    Lexer::new(source).tokenize()
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            chars: source.chars().peekable(),
            pos: Position::start(),
            scanner: None,
        }
    }

    /// Installs an external scanner.
    pub fn with_scanner(mut self, scanner: Box<dyn ExternalScanner + 'src>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Consumes the lexer, producing the full token sequence.
    pub fn tokenize(mut self) -> Result<Vec<Token>, InfixError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };

            if c.is_ascii_digit() {
                tokens.push(self.lex_integer()?);
            } else if c.is_ascii_alphabetic() || c == '_' {
                tokens.push(self.lex_identifier());
            } else if c == '+' {
                tokens.push(self.lex_operator(TokenKind::Plus, c));
            } else if c == '*' {
                tokens.push(self.lex_operator(TokenKind::Star, c));
            } else if let Some(token) = self.try_external_scan() {
                tokens.push(token);
            } else {
                let start = self.pos;
                self.bump();
                return Err(unknown_character(c, Span::new(start, self.pos)));
            }
        }
        Ok(tokens)
    }

    fn lex_integer(&mut self) -> Result<Token, InfixError> {
        let start = self.pos;
        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            self.bump();
        }
        let span = Span::new(start, self.pos);
        if lexeme.parse::<i64>().is_err() {
            return Err(invalid_literal(lexeme, span));
        }
        Ok(Token::new(TokenKind::Integer, lexeme, span))
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.pos;
        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            lexeme.push(c);
            self.bump();
        }
        Token::new(TokenKind::Identifier, lexeme, Span::new(start, self.pos))
    }

    fn lex_operator(&mut self, kind: TokenKind, c: char) -> Token {
        let start = self.pos;
        self.bump();
        Token::new(kind, c.to_string(), Span::new(start, self.pos))
    }

    fn try_external_scan(&mut self) -> Option<Token> {
        let rest = &self.source[self.pos.offset..];
        let at = self.pos;
        let token = self.scanner.as_mut()?.scan(rest, at)?;
        debug_assert!(
            rest.starts_with(&token.lexeme),
            "external scanner returned a lexeme that is not a prefix of the input"
        );
        assert_valid_span(token.span, self.source);
        for _ in token.lexeme.chars() {
            self.bump();
        }
        Some(token)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos.offset += c.len_utf8();
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }
}
