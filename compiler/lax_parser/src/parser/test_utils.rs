//! Test utilities for the parser

// Helpers are shared with integration tests; not every one is used everywhere.
#![allow(dead_code)]

use lax_ast::Operator;
use lax_lexer::{tokenize, KeywordTable, Token};

/// Creates a value token
pub fn val(value: &str) -> Token<String> {
    Token::Value(value.to_string())
}

/// Creates a separator token
pub fn sep() -> Token<String> {
    Token::Separator
}

/// Creates an operator token from the standard keyword table
pub fn op(word: &str) -> Token<String> {
    Token::Operator(standard_operator(word))
}

/// Looks up an operator in the standard keyword table
pub fn standard_operator(word: &str) -> Operator {
    match KeywordTable::standard().lookup(word) {
        Some(lax_lexer::Keyword::Operator(operator)) => operator.clone(),
        _ => panic!("Unknown operator: {}", word),
    }
}

/// The operator the standard keyword table inserts between adjacent operands
pub fn default_operator() -> Operator {
    KeywordTable::standard().default_operator().clone()
}

/// Tokenizes a string with the standard keyword table
pub fn lex(input: &str) -> Vec<Token<String>> {
    tokenize(input, &KeywordTable::standard())
}

/// Parses a string with the standard keyword table and renders the tree
pub fn parse_to_string(input: &str) -> Result<String, super::ParseError> {
    let table = KeywordTable::standard();
    super::parse(lex(input), table.default_operator()).map(|tree| tree.to_string())
}
