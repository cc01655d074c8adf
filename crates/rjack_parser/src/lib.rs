//! rjack_parser: Recursive descent parser for Jack.
//!
//! Parses one compilation unit (one class) from the token stream into a
//! parse tree whose shape mirrors the grammar, one parsing routine per
//! nonterminal. The first unexpected token aborts the unit; there is no
//! error recovery.

mod parser;

pub use parser::Parser;
