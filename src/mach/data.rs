use super::Val;
use crate::error;
use crate::lang::token::{Category, Operator, Token};
use crate::lang::{Error, LineNumber};
use std::collections::{BTreeMap, VecDeque};

type Result<T> = std::result::Result<T, Error>;

/// ## DATA statements and the READ cursor
///
/// Values are decoded one line at a time as READ reaches them.

#[derive(Debug, Default)]
pub struct Data {
    lines: BTreeMap<LineNumber, Vec<Token>>,
    next_line: LineNumber,
    pending: VecDeque<Val>,
}

impl Data {
    pub fn new() -> Data {
        Data::default()
    }

    pub fn insert(&mut self, line_number: LineNumber, tokens: Vec<Token>) {
        self.lines.insert(line_number, tokens);
    }

    pub fn remove(&mut self, line_number: LineNumber) {
        self.lines.remove(&line_number);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.restore(0);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The next READ starts at the first DATA line at or after `line_number`.
    pub fn restore(&mut self, line_number: LineNumber) {
        self.next_line = line_number;
        self.pending.clear();
    }

    pub fn read(&mut self) -> Result<Val> {
        loop {
            if let Some(val) = self.pending.pop_front() {
                return Ok(val);
            }
            let (&line_number, tokens) = match self.lines.range(self.next_line..).next() {
                Some(entry) => entry,
                None => return Err(error!(OutOfData)),
            };
            let values = Data::values(tokens)?;
            self.next_line = line_number.saturating_add(1);
            self.pending.extend(values);
        }
    }

    fn values(tokens: &[Token]) -> Result<Vec<Val>> {
        let mut values = vec![];
        let mut negative = false;
        for token in tokens {
            match token.category {
                Category::Comma => negative = false,
                Category::Operator(Operator::Minus) => negative = true,
                Category::String => values.push(Val::String(token.lexeme.as_str().into())),
                Category::Integer | Category::Float => {
                    let val = match Val::parse(&token.lexeme) {
                        Some(Val::Integer(n)) if token.category == Category::Float => {
                            Val::Float(n as f64)
                        }
                        Some(val) => val,
                        None => return Err(error!(SyntaxError, ..&token.span(); "INVALID DATA")),
                    };
                    if negative {
                        values.push(super::Operation::negate(val)?);
                    } else {
                        values.push(val);
                    }
                }
                _ => return Err(error!(SyntaxError, ..&token.span(); "INVALID DATA")),
            }
        }
        Ok(values)
    }
}
