use lax_ast::Operator;
use thiserror::Error;

/// Errors that end a parse. There is no recovery; the partial tree is dropped.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// A binary or postfix operator arrived while an operand was still
    /// missing: at the start of input, or right after a binary or prefix
    /// operator.
    #[error("Unexpected {} operator {}, expected value", .operator.fixity(), .operator)]
    UnexpectedOperator {
        operator: Operator,
        /// Zero-based index of the offending token.
        position: usize,
    },

    /// The input ended while an operand was still missing.
    #[error("Unexpected end of input, expected value")]
    UnexpectedEndOfInput {
        /// Number of tokens consumed, i.e. the index just past the end.
        position: usize,
    },
}

impl ParseError {
    /// Token index the error refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedOperator { position, .. }
            | ParseError::UnexpectedEndOfInput { position } => *position,
        }
    }

    /// The offending operator, if the error is about one.
    pub fn operator(&self) -> Option<&Operator> {
        match self {
            ParseError::UnexpectedOperator { operator, .. } => Some(operator),
            ParseError::UnexpectedEndOfInput { .. } => None,
        }
    }
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
