// tests/lexer_tests.rs

use infix::errors::{ErrorCategory, ErrorKind};
use infix::lexer::{tokenize, ExternalScanner, Lexer};
use infix::parser::parse;
use infix::syntax::{Position, Span};
use infix::token::{Token, TokenKind};

#[test]
fn classifies_the_four_token_kinds() {
    let tokens = tokenize("12 + count * 3").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::Integer,
        ]
    );
    assert_eq!(tokens[2].lexeme, "count");
}

#[test]
fn spans_are_end_exclusive_byte_ranges() {
    let tokens = tokenize("1 + 22").unwrap();
    assert_eq!(tokens[0].span.start.offset, 0);
    assert_eq!(tokens[0].span.end.offset, 1);
    assert_eq!(tokens[1].span.start.offset, 2);
    assert_eq!(tokens[1].span.end.offset, 3);
    assert_eq!(tokens[2].span.start.offset, 4);
    assert_eq!(tokens[2].span.end.offset, 6);
}

#[test]
fn newlines_advance_the_line_and_reset_the_column() {
    let tokens = tokenize("1 +\n  two").unwrap();

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.line, 1);
    assert_eq!(tokens[1].span.start.column, 3);
    assert_eq!(tokens[2].span.start.line, 2);
    assert_eq!(tokens[2].span.start.column, 3);
    assert_eq!(tokens[2].span.end.column, 6);
}

#[test]
fn identifiers_may_start_with_an_underscore() {
    let tokens = tokenize("_foo1").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_foo1");
}

#[test]
fn whitespace_only_input_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t ").unwrap().is_empty());
}

#[test]
fn integer_values_convert_and_other_kinds_do_not() {
    let tokens = tokenize("7 + x").unwrap();
    assert_eq!(tokens[0].integer_value(), Some(7));
    assert_eq!(tokens[1].integer_value(), None);
    assert_eq!(tokens[2].integer_value(), None);
}

#[test]
fn unknown_characters_are_lexing_errors() {
    let err = tokenize("1 $ 2").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Lex);
    match err.kind {
        ErrorKind::UnknownCharacter { ch, span } => {
            assert_eq!(ch, '$');
            assert_eq!(span.start.offset, 2);
            assert_eq!(span.end.offset, 3);
        }
        other => panic!("expected UnknownCharacter, got {other:?}"),
    }
}

#[test]
fn oversized_integer_literals_are_rejected() {
    let err = tokenize("99999999999999999999").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidLiteral { .. }));
    assert_eq!(err.category(), ErrorCategory::Lex);
}

/// Recognizes `#` followed by digits as an identifier token, the way a
/// grammar-external rule would claim syntax the built-in rules cannot.
struct TagScanner;

impl ExternalScanner for TagScanner {
    fn scan(&mut self, rest: &str, at: Position) -> Option<Token> {
        let digits: String = rest
            .strip_prefix('#')?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }
        let lexeme = format!("#{digits}");
        let end = Position {
            offset: at.offset + lexeme.len(),
            line: at.line,
            column: at.column + lexeme.len() as u32,
        };
        Some(Token::new(
            TokenKind::Identifier,
            lexeme,
            Span::new(at, end),
        ))
    }
}

#[test]
fn external_scanner_claims_syntax_the_rules_cannot() {
    let tokens = Lexer::new("#1 + #22")
        .with_scanner(Box::new(TagScanner))
        .tokenize()
        .unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Identifier]
    );
    assert_eq!(tokens[0].lexeme, "#1");
    assert_eq!(tokens[2].span.start.offset, 5);
    assert_eq!(tokens[2].span.end.offset, 8);

    // The scanned tokens feed straight into the parser.
    let node = parse(&tokens).unwrap();
    assert_eq!(node.pretty(), "(+ #1 #22)");
}

#[test]
fn scanner_rejection_falls_through_to_the_error() {
    let err = Lexer::new("1 + #x")
        .with_scanner(Box::new(TagScanner))
        .tokenize()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCharacter { ch: '#', .. }));
}

#[test]
fn without_a_scanner_the_custom_syntax_is_unknown() {
    let err = tokenize("#1").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCharacter { ch: '#', .. }));
}
