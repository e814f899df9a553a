//! Statically declared grammar rules.
//!
//! Each production is a [`Rule`] with a name, an integer precedence
//! (default 0) and an associativity tag. The set is fixed before parsing
//! begins and never mutated at run time; the parser evaluates it with a
//! fixed-function precedence climber instead of interpreting a grammar DSL.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::token::TokenKind;

/// How operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Assoc {
    Left,
    Right,
    None,
}

impl std::fmt::Display for Assoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Assoc::Left => "left",
            Assoc::Right => "right",
            Assoc::None => "none",
        })
    }
}

/// A named production.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub precedence: u8,
    pub assoc: Assoc,
}

impl Rule {
    /// A terminal production: precedence 0, no associativity.
    pub const fn terminal(name: &'static str) -> Self {
        Rule {
            name,
            precedence: 0,
            assoc: Assoc::None,
        }
    }

    /// A left-associative infix production.
    pub const fn infix_left(name: &'static str, precedence: u8) -> Self {
        Rule {
            name,
            precedence,
            assoc: Assoc::Left,
        }
    }

    /// The minimum precedence for this rule's right operand. Left-associative
    /// (and non-associative) operators climb past themselves; a
    /// right-associative row would recurse at its own precedence.
    pub fn right_precedence(&self) -> u8 {
        match self.assoc {
            Assoc::Left | Assoc::None => self.precedence + 1,
            Assoc::Right => self.precedence,
        }
    }
}

pub const INTEGER: Rule = Rule::terminal("integer");
pub const IDENTIFIER: Rule = Rule::terminal("identifier");
pub const SUM: Rule = Rule::infix_left("sum", 1);
pub const PRODUCT: Rule = Rule::infix_left("product", 2);

/// All rules in declaration order. Backs the CLI `rules` listing.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![INTEGER, IDENTIFIER, SUM, PRODUCT]);

/// The infix rule an operator token selects, if any.
pub fn infix_rule(kind: TokenKind) -> Option<&'static Rule> {
    match kind {
        TokenKind::Plus => Some(&SUM),
        TokenKind::Star => Some(&PRODUCT),
        TokenKind::Integer | TokenKind::Identifier => None,
    }
}

/// The terminal rule a term token selects, if any.
pub fn terminal_rule(kind: TokenKind) -> Option<&'static Rule> {
    match kind {
        TokenKind::Integer => Some(&INTEGER),
        TokenKind::Identifier => Some(&IDENTIFIER),
        TokenKind::Plus | TokenKind::Star => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_binds_tighter_than_sum() {
        assert!(PRODUCT.precedence > SUM.precedence);
    }

    #[test]
    fn operators_map_to_their_rules() {
        assert_eq!(infix_rule(TokenKind::Plus), Some(&SUM));
        assert_eq!(infix_rule(TokenKind::Star), Some(&PRODUCT));
        assert_eq!(infix_rule(TokenKind::Integer), None);
    }

    #[test]
    fn left_associative_rules_climb_past_themselves() {
        assert_eq!(SUM.right_precedence(), SUM.precedence + 1);
        assert_eq!(PRODUCT.right_precedence(), PRODUCT.precedence + 1);
    }

    #[test]
    fn terminals_use_the_defaults() {
        assert_eq!(INTEGER.precedence, 0);
        assert_eq!(INTEGER.assoc, Assoc::None);
    }
}
