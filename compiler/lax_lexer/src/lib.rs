//! Lax lexical analyzer
//!
//! Turns whitespace-separated text into the separator, operator and value
//! tokens consumed by `lax_parser`, using a [`KeywordTable`] to decide what
//! each word means.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod keywords;
pub mod lexer;
pub mod token;

// Re-export the main types for convenience
pub use keywords::{Keyword, KeywordTable};
pub use lexer::{tokenize, Lexer};
pub use token::Token;
