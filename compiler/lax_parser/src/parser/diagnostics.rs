use std::fmt;

use lax_ast::Fixity;
use lax_lexer::Token;

use super::error::ParseError;

/// A user-facing description of a parse error, anchored at a token index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Zero-based token index; equal to the token count for end-of-input.
    pub position: usize,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a token index with a custom message
    pub fn at_position<S: Into<String>>(position: usize, message: S) -> Self {
        Self {
            message: message.into(),
            position,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic::at_position(err.position(), err.to_string()).with_help(help_for_error(err))
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic::from(&err)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} (token {})", self.message, self.position + 1)?;
        if let Some(help) = &self.help {
            write!(f, "\n  help: {help}")?;
        }
        Ok(())
    }
}

fn help_for_error(err: &ParseError) -> String {
    match err {
        ParseError::UnexpectedOperator { operator, .. } => match operator.fixity() {
            Fixity::Binary => format!("'{operator}' needs a value on each side; add one before it"),
            Fixity::UnaryPostfix => {
                format!("'{operator}' applies to the value before it; add one first")
            }
            // Prefix operators never trigger this error
            Fixity::UnaryPrefix => format!("'{operator}' must be followed by a value"),
        },
        ParseError::UnexpectedEndOfInput { .. } => {
            "The input ended after an operator that still needs a value".to_string()
        }
    }
}

/// Render the token line with a caret under the token a diagnostic points at.
///
/// End-of-input diagnostics put the caret one column past the last token.
pub fn render_snippet<V: fmt::Display>(tokens: &[Token<V>], diagnostic: &Diagnostic) -> String {
    let words: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    let line = words.join(" ");

    let column: usize = words
        .iter()
        .take(diagnostic.position)
        .map(|word| word.chars().count() + 1)
        .sum();
    let width = words
        .get(diagnostic.position)
        .map_or(1, |word| word.chars().count().max(1));

    let mut out = format!("{diagnostic}\n  {line}\n  ");
    out.push_str(&" ".repeat(column));
    out.push_str(&"^".repeat(width));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lax_ast::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnostic_from_unexpected_operator() {
        let err = ParseError::UnexpectedOperator {
            operator: Operator::binary("plus", 1),
            position: 0,
        };
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.position, 0);
        assert_eq!(diag.message, "Unexpected binary operator plus, expected value");
        assert_eq!(
            diag.help.as_deref(),
            Some("'plus' needs a value on each side; add one before it")
        );
    }

    #[test]
    fn test_diagnostics_always_render_as_errors() {
        let diag = Diagnostic::at_position(0, "Custom problem");
        assert_eq!(diag.to_string(), "error: Custom problem (token 1)");

        let diag = diag.with_help("Try again");
        assert_eq!(diag.to_string(), "error: Custom problem (token 1)\n  help: Try again");
    }

    #[test]
    fn test_render_snippet_points_at_token() {
        let tokens = vec![
            Token::Value("a"),
            Token::Operator(Operator::binary("plus", 1)),
            Token::Operator(Operator::binary("times", 2)),
        ];
        let err = ParseError::UnexpectedOperator {
            operator: Operator::binary("times", 2),
            position: 2,
        };
        let rendered = render_snippet(&tokens, &Diagnostic::from(err));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error: Unexpected binary operator times, expected value (token 3)");
        assert_eq!(lines[2], "  a plus times");
        assert_eq!(lines[3], "         ^^^^^");
    }

    #[test]
    fn test_render_snippet_end_of_input() {
        let tokens = vec![Token::Value("a"), Token::Operator(Operator::binary("plus", 1))];
        let diag = Diagnostic::from(ParseError::UnexpectedEndOfInput { position: 2 });
        let rendered = render_snippet(&tokens, &diag);
        assert!(rendered.ends_with("  a plus\n         ^"));
    }
}
