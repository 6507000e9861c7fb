use std::collections::HashMap;

use lazy_static::lazy_static;
use lax_ast::Operator;

lazy_static! {
    static ref STANDARD: KeywordTable = {
        let mut table = KeywordTable::new(Operator::binary("times", 5));
        table.insert_separator("_");
        for (word, priority) in [("plus", 1), ("minus", 1)] {
            table.insert(word, Operator::binary(word, priority));
        }
        for word in ["times", "div", "into", "mod"] {
            table.insert(word, Operator::binary(word, 2));
        }
        table.insert("pow", Operator::binary("pow", 3));
        table.insert("neg", Operator::prefix("neg", 4));
        table.insert("sqrt", Operator::prefix("sqrt", 4));
        table.insert("squared", Operator::postfix("squared", 6));
        table
    };
}

/// What a reserved word stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyword {
    Separator,
    Operator(Operator),
}

/// Maps words to separators and operators, and carries the operator the
/// parser inserts between adjacent operands.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    words: HashMap<String, Keyword>,
    default_operator: Operator,
}

impl KeywordTable {
    /// An empty table. `default_operator` should be binary.
    pub fn new(default_operator: Operator) -> Self {
        Self {
            words: HashMap::new(),
            default_operator,
        }
    }

    /// The arithmetic vocabulary: `plus minus times div into mod pow neg sqrt
    /// squared`, `_` as separator, and a `times` of priority 5 for adjacent
    /// operands.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Binds `word` to `operator`, returning the previous binding.
    pub fn insert(&mut self, word: impl Into<String>, operator: Operator) -> Option<Keyword> {
        self.words.insert(word.into(), Keyword::Operator(operator))
    }

    /// Makes `word` a separator, returning the previous binding.
    pub fn insert_separator(&mut self, word: impl Into<String>) -> Option<Keyword> {
        self.words.insert(word.into(), Keyword::Separator)
    }

    pub fn remove(&mut self, word: &str) -> Option<Keyword> {
        self.words.remove(word)
    }

    pub fn lookup(&self, word: &str) -> Option<&Keyword> {
        self.words.get(word)
    }

    pub fn default_operator(&self) -> &Operator {
        &self.default_operator
    }

    pub fn set_default_operator(&mut self, operator: Operator) {
        self.default_operator = operator;
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lax_ast::Fixity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_table() {
        let table = KeywordTable::standard();
        assert_eq!(table.len(), 11);
        assert_eq!(table.lookup("_"), Some(&Keyword::Separator));
        assert_eq!(
            table.lookup("into"),
            Some(&Keyword::Operator(Operator::binary("into", 2)))
        );
        assert_eq!(
            table.lookup("squared"),
            Some(&Keyword::Operator(Operator::postfix("squared", 6)))
        );
        assert_eq!(table.lookup("x"), None);

        let default = table.default_operator();
        assert_eq!(default.name(), "times");
        assert_eq!(default.fixity(), Fixity::Binary);
        assert_eq!(default.priority(), 5);
    }

    #[test]
    fn test_standard_table_is_independent_copy() {
        let mut table = KeywordTable::standard();
        table.remove("plus");
        table.insert_separator(",");
        assert_eq!(table.lookup("plus"), None);
        assert!(KeywordTable::standard().lookup("plus").is_some());
        assert!(KeywordTable::standard().lookup(",").is_none());
    }

    #[test]
    fn test_rebinding_returns_previous() {
        let mut table = KeywordTable::new(Operator::binary("and", 0));
        assert!(table.is_empty());
        assert_eq!(table.insert("or", Operator::binary("or", 0)), None);
        assert_eq!(
            table.insert("or", Operator::binary("or", 1)),
            Some(Keyword::Operator(Operator::binary("or", 0)))
        );
        table.set_default_operator(Operator::binary("then", 0));
        assert_eq!(table.default_operator().name(), "then");
    }
}
