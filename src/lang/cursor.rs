use super::token::{Category, Token, Word};
use super::{Column, Error};

/// Read position within the tokens of one line.
///
/// Copying a cursor is how a statement remembers where it was, and
/// `seek` is how an `Execute` continuation gets back there.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Cursor<'a> {
        Cursor { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn category(&self) -> Option<Category> {
        self.peek().map(|t| t.category)
    }

    pub fn is(&self, category: Category) -> bool {
        self.category() == Some(category)
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the next token only if it has this category.
    pub fn eat(&mut self, category: Category) -> bool {
        if self.is(category) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, category: Category) -> Result<&'a Token, Error> {
        match self.peek() {
            Some(token) if token.category == category => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(error!(SyntaxError, ..&self.column(); expected(category))),
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn at_statement_end(&self) -> bool {
        matches!(
            self.category(),
            None | Some(Category::Colon) | Some(Category::Word(Word::Else))
        )
    }

    /// Stops on the first token of this category, or at the end.
    pub fn skip_to(&mut self, category: Category) {
        while let Some(token) = self.peek() {
            if token.category == category {
                break;
            }
            self.pos += 1;
        }
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.tokens.len();
    }

    /// Columns covered by the current token. Past the end this is the
    /// empty range just after the last token.
    pub fn column(&self) -> Column {
        match self.peek() {
            Some(token) => token.span(),
            None => match self.tokens.last() {
                Some(token) => {
                    let end = token.span().end;
                    end..end + 1
                }
                None => 0..0,
            },
        }
    }
}

fn expected(category: Category) -> String {
    match category {
        Category::LParen => "EXPECTED LEFT PARENTHESIS".to_string(),
        Category::RParen => "EXPECTED RIGHT PARENTHESIS".to_string(),
        Category::Comma => "EXPECTED COMMA".to_string(),
        Category::Hash => "EXPECTED #".to_string(),
        _ => format!("EXPECTED {}", category),
    }
}
