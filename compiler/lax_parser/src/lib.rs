//! Looseness-aware operator parser for Lax.
//!
//! Turns a flat sequence of [`Token`](lax_lexer::Token)s into a
//! [`Node`](lax_ast::Node) tree in one left-to-right pass. See
//! [`parser::parse`].

pub mod parser;

pub use parser::{parse, Diagnostic, Looseness, ParseError, ParseResult, Parser, ParserConfig};

// Integration tests are in the tests/ directory
