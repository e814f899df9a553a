//! The precedence-climbing parser.
//!
//! [`parse`] consumes a token sequence and produces a single [`ParseNode`]
//! tree whose shape is uniquely determined by the grammar's precedence
//! table: `*` binds tighter than `+`, and operators of equal precedence
//! group left-to-right. Each token is consumed exactly once on the success
//! path; the input is never mutated.

use crate::errors::{trailing_tokens, unexpected_end_of_input, unexpected_token, InfixError};
use crate::grammar::{infix_rule, terminal_rule};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};
use crate::tree::ParseNode;

/// Parses a full expression. The whole input must be consumed: a valid
/// expression followed by more tokens is a [`TrailingTokens`] error.
///
/// [`TrailingTokens`]: crate::errors::ErrorKind::TrailingTokens
pub fn parse(tokens: &[Token]) -> Result<ParseNode, InfixError> {
    let mut parser = Parser { tokens, pos: 0 };
    let node = parser.parse_expr(0)?;
    if let Some(extra) = parser.peek() {
        return Err(trailing_tokens(extra.span));
    }
    Ok(node)
}

/// Convenience entry point: tokenize and parse in one step.
pub fn parse_source(source: &str) -> Result<ParseNode, InfixError> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    /// Parses an expression whose operators all have precedence >= `min_prec`.
    fn parse_expr(&mut self, min_prec: u8) -> Result<ParseNode, InfixError> {
        let mut lhs = self.parse_primary()?;
        loop {
            let Some(kind) = self.peek().map(|t| t.kind) else {
                break;
            };
            let Some(rule) = infix_rule(kind) else {
                break;
            };
            if rule.precedence < min_prec {
                break;
            }
            self.pos += 1; // consume the operator
            let rhs = self.parse_expr(rule.right_precedence())?;
            let span = lhs.span().join(rhs.span());
            lhs = ParseNode::Binary {
                rule: rule.name,
                op: kind,
                left: Box::new(lhs),
                right: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    /// Parses a primary term: a single integer literal or identifier.
    fn parse_primary(&mut self) -> Result<ParseNode, InfixError> {
        let Some(token) = self.peek() else {
            return Err(unexpected_end_of_input(term_kinds()));
        };
        match terminal_rule(token.kind) {
            Some(rule) => {
                let token = token.clone();
                self.pos += 1;
                Ok(ParseNode::Leaf {
                    rule: rule.name,
                    token,
                })
            }
            None => Err(unexpected_token(token.kind, term_kinds(), token.span)),
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }
}

fn term_kinds() -> Vec<TokenKind> {
    vec![TokenKind::Integer, TokenKind::Identifier]
}
