// Single-pass operator parser for Lax.
// Builds a tree from pre-classified tokens with a scope stack instead of
// recursion. Separators raise the looseness of the next token; looseness is
// compared before operator priority when deciding how far a new operator
// reaches back.

mod arena;
pub mod diagnostics;
mod error;
mod looseness;
pub mod test_utils;

#[cfg(test)]
mod tests;

use lax_ast::{Fixity, Node, Operator};
use lax_lexer::{KeywordTable, Token};
use log::{debug, trace};

use arena::{NodeArena, NodeId};
pub use diagnostics::{render_snippet, Diagnostic};
pub use error::{ParseError, ParseResult};
pub use looseness::Looseness;

/// Parser settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Inserted between two complete expressions with nothing in between.
    /// Must be binary.
    pub default_operator: Operator,
}

impl ParserConfig {
    pub fn new(default_operator: Operator) -> Self {
        Self { default_operator }
    }
}

impl Default for ParserConfig {
    /// Uses the default operator of the standard keyword table.
    fn default() -> Self {
        Self::from(&KeywordTable::standard())
    }
}

impl From<&KeywordTable> for ParserConfig {
    fn from(keywords: &KeywordTable) -> Self {
        Self::new(keywords.default_operator().clone())
    }
}

/// A reusable parser. Parsing borrows it immutably, so one instance can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(default_operator: Operator) -> Self {
        Self::with_config(ParserConfig::new(default_operator))
    }

    pub fn with_config(config: ParserConfig) -> Self {
        debug_assert_eq!(
            config.default_operator.fixity(),
            Fixity::Binary,
            "default operator must be binary"
        );
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn default_operator(&self) -> &Operator {
        &self.config.default_operator
    }

    /// Parses a complete token sequence into a tree.
    pub fn parse<V, I>(&self, tokens: I) -> ParseResult<Node<V>>
    where
        I: IntoIterator<Item = Token<V>>,
    {
        parse(tokens, &self.config.default_operator)
    }
}

/// Parses `tokens` into a tree, inserting `default_operator` between adjacent
/// operands.
///
/// ```
/// use lax_ast::Operator;
/// use lax_lexer::Token;
/// use lax_parser::parser::parse;
///
/// let plus = Operator::binary("plus", 1);
/// let times = Operator::binary("times", 2);
/// let tokens = vec![
///     Token::Value("a"),
///     Token::Operator(plus.clone()),
///     Token::Value("b"),
///     Token::Separator,
///     Token::Operator(times.clone()),
///     Token::Value("c"),
/// ];
/// let tree = parse(tokens, &times).unwrap();
/// assert_eq!(tree.to_string(), "((a plus b) times c)");
/// ```
pub fn parse<V, I>(tokens: I, default_operator: &Operator) -> ParseResult<Node<V>>
where
    I: IntoIterator<Item = Token<V>>,
{
    let tokens = tokens.into_iter();
    let mut state = ParseState::new(default_operator, tokens.size_hint().0);
    for token in tokens {
        state.feed(token)?;
    }
    state.finish()
}

/// An expression still open to combination with a later operator.
#[derive(Debug, Clone, Copy)]
struct Scope {
    node: NodeId,
    looseness: Looseness,
}

/// Working state of one parse call.
struct ParseState<'a, V> {
    default_operator: &'a Operator,
    arena: NodeArena<V>,
    /// The top scope, when present, is the node receiving the next operand.
    stack: Vec<Scope>,
    /// Separators seen since the last value or operator.
    looseness: Looseness,
    expecting_value: bool,
    /// Index of the token being processed.
    position: usize,
}

impl<'a, V> ParseState<'a, V> {
    fn new(default_operator: &'a Operator, capacity: usize) -> Self {
        Self {
            default_operator,
            arena: NodeArena::with_capacity(capacity),
            stack: Vec::new(),
            looseness: Looseness::Unbounded,
            expecting_value: true,
            position: 0,
        }
    }

    fn feed(&mut self, token: Token<V>) -> ParseResult<()> {
        match token {
            Token::Separator => {
                self.looseness = self.looseness.increment();
                trace!("#{} separator, looseness now {}", self.position, self.looseness);
            }
            Token::Value(value) => self.push_value(value)?,
            Token::Operator(operator) => self.push_operator(operator)?,
        }
        self.position += 1;
        Ok(())
    }

    fn push_value(&mut self, value: V) -> ParseResult<()> {
        self.insert_default_operator()?;

        let leaf = self.arena.leaf(value);
        trace!("#{} value, looseness {}", self.position, self.looseness);
        self.attach_operand(leaf);
        self.stack.push(Scope {
            node: leaf,
            looseness: self.looseness,
        });
        self.looseness = Looseness::ZERO;
        self.expecting_value = false;
        Ok(())
    }

    fn push_operator(&mut self, operator: Operator) -> ParseResult<()> {
        match operator.fixity() {
            Fixity::UnaryPrefix => self.push_prefix(operator),
            Fixity::Binary | Fixity::UnaryPostfix => {
                if self.expecting_value {
                    return Err(ParseError::UnexpectedOperator {
                        operator,
                        position: self.position,
                    });
                }
                self.combine(operator)
            }
        }
    }

    fn push_prefix(&mut self, operator: Operator) -> ParseResult<()> {
        self.insert_default_operator()?;

        trace!(
            "#{} prefix {}, looseness {}",
            self.position,
            operator,
            self.looseness
        );
        let node = self.arena.interior(operator);
        self.attach_operand(node);
        self.stack.push(Scope {
            node,
            looseness: self.looseness,
        });
        self.looseness = Looseness::ZERO;
        self.expecting_value = true;
        Ok(())
    }

    /// Two complete expressions in a row: combine them with the default
    /// operator. The separators seen so far count for the inserted operator
    /// and again for the token that follows it.
    fn insert_default_operator(&mut self) -> ParseResult<()> {
        if self.expecting_value {
            return Ok(());
        }
        let looseness = self.looseness;
        debug!(
            "#{} inserting default operator {} at looseness {}",
            self.position, self.default_operator, looseness
        );
        self.combine(self.default_operator.clone())?;
        self.looseness = looseness;
        Ok(())
    }

    /// Makes `node` the next operand of the top scope, if there is one.
    fn attach_operand(&mut self, node: NodeId) {
        if let Some(anchor) = self.stack.last() {
            self.arena.append_child(anchor.node, node);
        }
    }

    /// Handles a binary or postfix operator: pops the scopes it reaches past,
    /// takes the last one as its left operand and splices itself into that
    /// operand's old place.
    fn combine(&mut self, operator: Operator) -> ParseResult<()> {
        let Some(mut left) = self.stack.pop() else {
            return Err(ParseError::UnexpectedOperator {
                operator,
                position: self.position,
            });
        };
        while self.reaches_past(left, operator.priority()) {
            match self.stack.pop() {
                Some(scope) => left = scope,
                None => break,
            }
        }

        trace!(
            "#{} {} {}, looseness {}, takes left operand at looseness {}",
            self.position,
            operator.fixity(),
            operator,
            self.looseness,
            left.looseness
        );

        let expects_operand = operator.fixity() != Fixity::UnaryPostfix;
        let node = self.arena.interior(operator);
        if let Some(anchor) = self.stack.last() {
            self.arena.replace_last_child(anchor.node, node);
        }
        self.arena.append_child(node, left.node);
        self.stack.push(Scope {
            node,
            looseness: left.looseness,
        });
        self.looseness = Looseness::ZERO;
        self.expecting_value = expects_operand;
        Ok(())
    }

    /// Whether an operator with `priority`, arriving at the current looseness,
    /// keeps popping after having popped `popped`.
    ///
    /// A tighter scope is always reached past. At equal looseness the
    /// operator reaches past while the scope beneath binds at least as
    /// tightly as it does, which makes equal priorities associate left.
    fn reaches_past(&self, popped: Scope, priority: i32) -> bool {
        if popped.looseness < self.looseness {
            return true;
        }
        popped.looseness == self.looseness
            && self
                .stack
                .last()
                .and_then(|top| self.arena.operator(top.node))
                .is_some_and(|top| top.priority() >= priority)
    }

    fn finish(self) -> ParseResult<Node<V>> {
        if self.expecting_value {
            return Err(ParseError::UnexpectedEndOfInput {
                position: self.position,
            });
        }
        let Some(root) = self.stack.first().copied() else {
            return Err(ParseError::UnexpectedEndOfInput {
                position: self.position,
            });
        };
        debug_assert!(self.spine_is_linked(), "open scopes must form a chain");

        debug!(
            "parsed {} tokens into {} nodes, {} scopes left open",
            self.position,
            self.arena.len(),
            self.stack.len()
        );
        Ok(self.arena.into_tree(root.node))
    }

    /// Every open scope's node is the last operand of the scope beneath it,
    /// so the bottom scope owns everything still on the stack.
    fn spine_is_linked(&self) -> bool {
        self.stack
            .windows(2)
            .all(|pair| self.arena.last_child(pair[0].node) == Some(pair[1].node))
    }
}
