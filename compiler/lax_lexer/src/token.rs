use std::fmt;

use lax_ast::Operator;

/// A pre-classified token as consumed by the parser.
///
/// `V` is the payload of value tokens; the parser never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<V> {
    /// A grouping marker. Each one preceding a token raises that token's
    /// looseness by one.
    Separator,
    /// A reference to an operator from the keyword table.
    Operator(Operator),
    /// An opaque operand.
    Value(V),
}

impl<V> Token<V> {
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Separator)
    }

    /// Tokens that become tree nodes (everything but separators).
    pub fn is_node(&self) -> bool {
        !self.is_separator()
    }

    /// Maps the payload of a value token, leaving the other kinds untouched.
    pub fn map_value<U>(self, f: impl FnOnce(V) -> U) -> Token<U> {
        match self {
            Token::Separator => Token::Separator,
            Token::Operator(op) => Token::Operator(op),
            Token::Value(value) => Token::Value(f(value)),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Token<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Separator => f.write_str("-"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Value(value) => write!(f, "{value}"),
        }
    }
}
