//! Lax: operator expressions whose grouping is controlled by separators.
//!
//! Words are classified with a [`KeywordTable`], then parsed in a single
//! pass. A separator (`_` in the standard table) loosens the token after it,
//! so `a plus b _ times c` groups as `((a plus b) times c)`.
//!
//! ```
//! use lax::{parse_str, KeywordTable};
//!
//! let table = KeywordTable::standard();
//! let tree = parse_str("2 x squared plus 1", &table).unwrap();
//! assert_eq!(tree.to_string(), "((2 times (x squared)) plus 1)");
//! ```

pub use lax_ast::{Fixity, InteriorNode, Node, Operator};
pub use lax_lexer::{tokenize, Keyword, KeywordTable, Token};
pub use lax_parser::parser::render_snippet;
pub use lax_parser::{parse, Diagnostic, Looseness, ParseError, ParseResult, Parser, ParserConfig};

use log::debug;
use serde::Serialize;

/// Tokenizes `text` with `keywords` and parses it, using the table's
/// default operator for adjacent operands.
pub fn parse_str(text: &str, keywords: &KeywordTable) -> ParseResult<Node<String>> {
    let tokens = tokenize(text, keywords);
    debug!("parsing {} tokens", tokens.len());
    parse(tokens, keywords.default_operator())
}

/// Outcome of [`analyze_source`], ready to be serialized for tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Fully parenthesized rendering of the tree, when parsing succeeded.
    pub tree: Option<String>,
    pub node_count: usize,
    pub depth: usize,
    pub errors: Vec<String>,
}

/// Parse a source string and summarize the result. Failures are reported
/// as rendered diagnostics instead of an `Err`.
pub fn analyze_source(text: &str, keywords: &KeywordTable) -> ParseReport {
    let tokens = tokenize(text, keywords);
    match parse(tokens.iter().cloned(), keywords.default_operator()) {
        Ok(tree) => ParseReport {
            tree: Some(tree.to_string()),
            node_count: tree.node_count(),
            depth: tree.depth(),
            errors: Vec::new(),
        },
        Err(err) => ParseReport {
            tree: None,
            node_count: 0,
            depth: 0,
            errors: vec![render_snippet(&tokens, &Diagnostic::from(err))],
        },
    }
}
