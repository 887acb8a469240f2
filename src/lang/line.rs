use super::token::{Category, Token, Word};
use super::LineNumber;

/// A stored program line. The source text is kept for LIST and for
/// pointing at the column of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: LineNumber, source: &str, tokens: Vec<Token>) -> Line {
        Line {
            number,
            source: source.trim().to_string(),
            tokens,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_data(&self) -> bool {
        self.starts_with(Word::Data)
    }

    /// True for lines of the form `NEXT <var>`, the only place a
    /// skipped loop can resume after.
    pub fn is_next_for(&self, var: &str) -> bool {
        self.starts_with(Word::Next)
            && matches!(self.tokens.get(1), Some(t) if t.lexeme == var)
    }

    /// Drops everything but the leading keyword. DATA lines keep only
    /// this placeholder once their values are handed to the data store.
    pub fn placeholder(mut self) -> (Line, Vec<Token>) {
        let rest = self.tokens.split_off(1.min(self.tokens.len()));
        (self, rest)
    }

    fn starts_with(&self, word: Word) -> bool {
        matches!(self.tokens.first(), Some(t) if t.category == Category::Word(word))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
