pub use crate::errors::{ErrorCategory, ErrorKind, InfixError, SourceContext};
pub use crate::lexer::{tokenize, ExternalScanner, Lexer};
pub use crate::parser::{parse, parse_source};
pub use crate::syntax::{Position, Span};
pub use crate::token::{Token, TokenKind};
pub use crate::tree::ParseNode;

pub mod cli;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod syntax;
pub mod token;
pub mod tree;
