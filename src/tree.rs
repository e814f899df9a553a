//! The typed parse tree.
//!
//! Nodes are created once during parsing and immutable thereafter. A node
//! exclusively owns its children; its span is the contiguous union of its
//! children's spans.

use serde::Serialize;

use crate::syntax::Span;
use crate::token::{Token, TokenKind};

/// A node tagged with the grammar rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum ParseNode {
    /// A terminal node: carries no children, only the token it subsumes.
    Leaf { rule: &'static str, token: Token },
    /// A binary operator application, with named `left` and `right` slots.
    Binary {
        rule: &'static str,
        op: TokenKind,
        left: Box<ParseNode>,
        right: Box<ParseNode>,
        span: Span,
    },
}

impl ParseNode {
    /// The name of the rule that produced this node.
    pub fn rule(&self) -> &'static str {
        match self {
            ParseNode::Leaf { rule, .. } | ParseNode::Binary { rule, .. } => rule,
        }
    }

    /// The source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            ParseNode::Leaf { token, .. } => token.span,
            ParseNode::Binary { span, .. } => *span,
        }
    }

    /// Looks up a named child slot. Binary nodes have `left` and `right`;
    /// terminal nodes have none.
    pub fn field(&self, name: &str) -> Option<&ParseNode> {
        match self {
            ParseNode::Leaf { .. } => None,
            ParseNode::Binary { left, right, .. } => match name {
                "left" => Some(left),
                "right" => Some(right),
                _ => None,
            },
        }
    }

    /// The token of a terminal node.
    pub fn leaf_token(&self) -> Option<&Token> {
        match self {
            ParseNode::Leaf { token, .. } => Some(token),
            ParseNode::Binary { .. } => None,
        }
    }

    /// The value of an integer terminal.
    pub fn integer_value(&self) -> Option<i64> {
        self.leaf_token().and_then(Token::integer_value)
    }

    /// All leaf tokens in source order.
    pub fn leaf_tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            ParseNode::Leaf { token, .. } => out.push(token),
            ParseNode::Binary { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Pretty-prints the tree as a parenthesized s-expression, e.g.
    /// `(+ 1 (* 2 3))`.
    pub fn pretty(&self) -> String {
        match self {
            ParseNode::Leaf { token, .. } => token.lexeme.clone(),
            ParseNode::Binary {
                op, left, right, ..
            } => {
                format!("({} {} {})", op_symbol(*op), left.pretty(), right.pretty())
            }
        }
    }
}

fn op_symbol(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Star => "*",
        // Terminal kinds never tag a binary node.
        TokenKind::Integer | TokenKind::Identifier => "?",
    }
}

impl std::fmt::Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
