//! Interactive read-parse-print loop.
//!
//! Each line is parsed as one expression and the resulting tree is printed;
//! errors render as miette diagnostics against a per-line source name.

use std::io::{self, Write};

use crate::errors::{print_error, SourceContext};
use crate::parser::parse_source;

/// REPL state that persists across lines.
pub struct ReplState {
    line_number: usize,
}

impl ReplState {
    pub fn new() -> Self {
        Self { line_number: 1 }
    }

    /// Parse one line of input and print the resulting tree.
    pub fn parse_line(&mut self, input: &str) -> Result<(), ()> {
        let source_name = format!("<repl:{}>", self.line_number);
        self.line_number += 1;

        match parse_source(input) {
            Ok(node) => {
                println!("{}", node.pretty());
                Ok(())
            }
            Err(e) => {
                let ctx = SourceContext::new(source_name, input);
                print_error(e.with_source(&ctx));
                Err(())
            }
        }
    }
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main REPL entry point.
pub fn run_repl() {
    println!("infix repl v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut state = ReplState::new();

    loop {
        print!("infix> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Some(command) = line.strip_prefix(':') {
                    match command {
                        "quit" | "q" => break,
                        "help" | "h" => print_help(),
                        other => println!("Unknown command :{other}; type :help"),
                    }
                    continue;
                }
                let _ = state.parse_line(line);
            }
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        }
    }
}

fn print_help() {
    println!("Enter an expression over integers, identifiers, '+' and '*'.");
    println!("Commands:");
    println!("  :help  show this message");
    println!("  :quit  exit the repl");
}
