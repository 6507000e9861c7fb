//! Whitespace lexer for Lax using the `logos` crate.
//! Splits text into words and classifies each one through a keyword table.

#[cfg(feature = "logging")]
use log::trace;
use logos::{Lexer as LogosLexer, Logos};

use crate::keywords::{Keyword, KeywordTable};
use crate::token::Token;

/// Raw word type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum RawWord {
    #[regex(r"\S+")]
    Word,
}

/// Iterator over the classified tokens of a source string.
pub struct Lexer<'src, 'kw> {
    inner: LogosLexer<'src, RawWord>,
    keywords: &'kw KeywordTable,
}

impl<'src, 'kw> Lexer<'src, 'kw> {
    pub fn new(source: &'src str, keywords: &'kw KeywordTable) -> Self {
        Self {
            inner: RawWord::lexer(source),
            keywords,
        }
    }

    fn classify(&self, word: &str) -> Token<String> {
        match self.keywords.lookup(word) {
            Some(Keyword::Separator) => Token::Separator,
            Some(Keyword::Operator(op)) => Token::Operator(op.clone()),
            None => Token::Value(word.to_string()),
        }
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(RawWord::Word) => {
                    let word = self.inner.slice();
                    let token = self.classify(word);
                    #[cfg(feature = "logging")]
                    trace!("word {:?} at {:?} -> {:?}", word, self.inner.span(), token);
                    return Some(token);
                }
                // Only whitespace can fail to match, and it is skipped.
                Err(()) => continue,
            }
        }
    }
}

/// Splits `source` on whitespace and classifies every word.
pub fn tokenize(source: &str, keywords: &KeywordTable) -> Vec<Token<String>> {
    Lexer::new(source, keywords).collect()
}
