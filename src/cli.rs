//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::{Parser, Subcommand};

use crate::{
    errors::{print_error, SourceContext},
    grammar::RULES,
    lexer::tokenize,
    parser::parse_source,
    repl,
    tree::ParseNode,
};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "infix",
    version,
    about = "A precedence-climbing parser for a small infix expression language."
)]
pub struct InfixArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Parse an expression and print its tree.
    Parse {
        /// The expression to parse, e.g. "1 + 2 * 3".
        #[arg(required = true)]
        expr: String,
        /// Print the tree as JSON instead of an s-expression.
        #[arg(long)]
        json: bool,
    },
    /// Print the token stream for an expression.
    Tokens {
        /// The expression to tokenize.
        #[arg(required = true)]
        expr: String,
        /// Print the tokens as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the grammar rules with their precedence and associativity.
    Rules,
    /// Start an interactive session.
    Repl,
}

/// The main entry point for the CLI.
pub fn run() {
    let args = InfixArgs::parse();

    match args.command {
        ArgsCommand::Parse { expr, json } => {
            let node = parse_or_exit(&expr);
            if json {
                print_json(&node);
            } else {
                println!("{}", node.pretty());
            }
        }

        ArgsCommand::Tokens { expr, json } => {
            let ctx = SourceContext::new("<arg>", &expr);
            let tokens = tokenize(&expr).unwrap_or_else(|e| {
                print_error(e.with_source(&ctx));
                process::exit(1);
            });
            if json {
                print_json(&tokens);
            } else {
                for token in &tokens {
                    println!("{token}");
                }
            }
        }

        ArgsCommand::Rules => {
            for rule in RULES.iter() {
                println!(
                    "{:<12} precedence {}  assoc {}",
                    rule.name, rule.precedence, rule.assoc
                );
            }
        }

        ArgsCommand::Repl => repl::run_repl(),
    }
}

fn parse_or_exit(expr: &str) -> ParseNode {
    let ctx = SourceContext::new("<arg>", expr);
    parse_source(expr).unwrap_or_else(|e| {
        print_error(e.with_source(&ctx));
        process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            process::exit(1);
        }
    }
}
