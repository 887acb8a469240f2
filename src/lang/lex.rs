use super::{token::*, Error, LineNumber, MAX_LINE_NUMBER};

/// Splits one line of source into an optional leading line number
/// and the tokens that follow it.
pub fn lex(s: &str) -> Result<(Option<LineNumber>, Vec<Token>), Error> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_basic_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn bump(&mut self) -> Option<char>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.bump();
        }
    }

    fn number(&mut self, column: usize) -> Result<Token, Error> {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&pk) = self.chars().peek() {
            if is_basic_digit(pk) || (!decimal && pk == '.') {
                if pk == '.' {
                    decimal = true;
                }
                s.push(pk);
                self.bump();
                continue;
            }
            break;
        }
        if s == "." {
            return Err(error!(SyntaxError, ..&(column..column + 1); "UNEXPECTED CHARACTER"));
        }
        let category = if decimal {
            Category::Float
        } else {
            Category::Integer
        };
        Ok(Token::new(column, category, s))
    }

    fn string(&mut self, column: usize) -> Result<Token, Error> {
        let mut s = String::new();
        self.bump();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::new(column, Category::String, s)),
                Some(ch) => s.push(ch),
                None => {
                    let len = s.chars().count() + 1;
                    return Err(
                        error!(SyntaxError, ..&(column..column + len); "MISMATCHED QUOTES"),
                    );
                }
            }
        }
    }

    fn alphabetic(&mut self, column: usize) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !is_basic_alphanumeric(pk) {
                break;
            }
            s.push(pk.to_ascii_uppercase());
            self.bump();
        }
        match Category::from_string(&s) {
            Some(category) => Token::new(column, category, s),
            None => Token::new(column, Category::Name, s),
        }
    }

    fn minutia(&mut self, column: usize) -> Result<Token, Error> {
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Err(error!(InternalError; "LEXER PASSED END OF LINE")),
        };
        let mut s = ch.to_string();
        if let Some(&pk) = self.chars().peek() {
            s.push(pk);
            if let Some(category) = Category::from_string(&s) {
                self.bump();
                return Ok(Token::new(column, category, s));
            }
            s.pop();
        }
        match Category::from_string(&s) {
            Some(category) => Ok(Token::new(column, category, s)),
            None => Err(error!(SyntaxError, ..&(column..column + 1); "UNEXPECTED CHARACTER")),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    column: usize,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.column += 1;
        Some(ch)
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remark {
            return None;
        }
        self.whitespace();
        let pk = *self.chars.peek()?;
        let column = self.column;
        if is_basic_digit(pk) || pk == '.' {
            return Some(self.number(column));
        }
        if is_basic_alphabetic(pk) {
            let token = self.alphabetic(column);
            if token.is(Category::Word(Word::Rem)) {
                self.remark = true;
            }
            return Some(Ok(token));
        }
        if pk == '"' {
            return Some(self.string(column));
        }
        Some(self.minutia(column))
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<(Option<LineNumber>, Vec<Token>), Error> {
        let mut tokens = BasicLexer {
            chars: s.chars().peekable(),
            column: 0,
            remark: false,
        }
        .collect::<Result<Vec<Token>, Error>>()?;
        let line_number = match tokens.first() {
            Some(token) if token.is(Category::Integer) => {
                let line_number = BasicLexer::line_number(token)?;
                tokens.remove(0);
                Some(line_number)
            }
            _ => None,
        };
        Ok((line_number, tokens))
    }

    fn line_number(token: &Token) -> Result<LineNumber, Error> {
        match token.lexeme.parse::<LineNumber>() {
            Ok(n) if n > 0 && n <= MAX_LINE_NUMBER => Ok(n),
            _ => Err(error!(SyntaxError, ..&token.span(); "INVALID LINE NUMBER")),
        }
    }
}
