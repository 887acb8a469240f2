use super::{function, Context, Operation, Val};
use crate::error;
use crate::lang::token::{Category, Operator};
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluation
///
/// Recursive descent, loosest binding first. Every level leaves its
/// result on the operand stack; `expression` pops the final value.
impl Context {
    pub fn expression(&mut self, cur: &mut Cursor) -> Result<Val> {
        self.logical(cur)?;
        self.operands.pop()
    }

    /// `( expr {, expr} )` for array subscripts, DIM sizes and
    /// function arguments.
    pub fn index_list(&mut self, cur: &mut Cursor) -> Result<Vec<Val>> {
        cur.expect(Category::LParen)?;
        let mut list = vec![self.expression(cur)?];
        while cur.eat(Category::Comma) {
            list.push(self.expression(cur)?);
        }
        cur.expect(Category::RParen)?;
        Ok(list)
    }

    fn logical(&mut self, cur: &mut Cursor) -> Result<()> {
        self.negation(cur)?;
        loop {
            let op = match cur.category() {
                Some(Category::Operator(op @ Operator::And))
                | Some(Category::Operator(op @ Operator::Or)) => op,
                _ => return Ok(()),
            };
            cur.next();
            self.negation(cur)?;
            let (lhs, rhs) = self.operands.pop_2()?;
            let val = match op {
                Operator::And => Operation::and(lhs, rhs),
                _ => Operation::or(lhs, rhs),
            };
            self.operands.push(val)?;
        }
    }

    fn negation(&mut self, cur: &mut Cursor) -> Result<()> {
        if cur.eat(Category::Operator(Operator::Not)) {
            self.relation(cur)?;
            let val = self.operands.pop()?;
            self.operands.push(Operation::not(val))
        } else {
            self.relation(cur)
        }
    }

    fn relation(&mut self, cur: &mut Cursor) -> Result<()> {
        self.additive(cur)?;
        loop {
            let op = match cur.category() {
                Some(Category::Operator(op)) if op.is_relational() => op,
                _ => return Ok(()),
            };
            cur.next();
            self.additive(cur)?;
            let (lhs, rhs) = self.operands.pop_2()?;
            let val = match op {
                Operator::Equal => Operation::equal(lhs, rhs)?,
                Operator::NotEqual => Operation::not_equal(lhs, rhs)?,
                Operator::Less => Operation::less(lhs, rhs)?,
                Operator::LessEqual => Operation::less_equal(lhs, rhs)?,
                Operator::Greater => Operation::greater(lhs, rhs)?,
                _ => Operation::greater_equal(lhs, rhs)?,
            };
            self.operands.push(val)?;
        }
    }

    fn additive(&mut self, cur: &mut Cursor) -> Result<()> {
        self.term(cur)?;
        loop {
            let op = match cur.category() {
                Some(Category::Operator(op @ Operator::Plus))
                | Some(Category::Operator(op @ Operator::Minus)) => op,
                _ => return Ok(()),
            };
            cur.next();
            self.term(cur)?;
            let (lhs, rhs) = self.operands.pop_2()?;
            let val = match op {
                Operator::Plus => Operation::sum(lhs, rhs)?,
                _ => Operation::subtract(lhs, rhs)?,
            };
            self.operands.push(val)?;
        }
    }

    fn term(&mut self, cur: &mut Cursor) -> Result<()> {
        self.factor(cur, false)?;
        loop {
            let op = match cur.category() {
                Some(Category::Operator(op @ Operator::Multiply))
                | Some(Category::Operator(op @ Operator::Divide))
                | Some(Category::Operator(op @ Operator::Modulus)) => op,
                _ => return Ok(()),
            };
            cur.next();
            self.factor(cur, false)?;
            let (lhs, rhs) = self.operands.pop_2()?;
            let val = match op {
                Operator::Multiply => Operation::multiply(lhs, rhs)?,
                Operator::Divide => Operation::divide(lhs, rhs)?,
                _ => Operation::modulus(lhs, rhs)?,
            };
            self.operands.push(val)?;
        }
    }

    /// Unary signs fold into `negative` and are applied to whatever
    /// primary follows.
    fn factor(&mut self, cur: &mut Cursor, negative: bool) -> Result<()> {
        let token = match cur.next() {
            Some(token) => token,
            None => return Err(error!(SyntaxError, ..&cur.column(); "EXPECTED EXPRESSION")),
        };
        let val = match token.category {
            Category::Operator(Operator::Minus) => return self.factor(cur, !negative),
            Category::Operator(Operator::Plus) => return self.factor(cur, negative),
            Category::Integer | Category::Float => match Val::parse(&token.lexeme) {
                Some(Val::Integer(n)) if token.category == Category::Float => Val::Float(n as f64),
                Some(val) => val,
                None => return Err(error!(Overflow, ..&token.span())),
            },
            Category::String => Val::String(token.lexeme.as_str().into()),
            Category::Name => {
                if cur.is(Category::LParen) {
                    let index = self.index_list(cur)?;
                    self.var.fetch_array(&token.lexeme, &index)?
                } else {
                    self.var.fetch(&token.lexeme)
                }
            }
            Category::Function(func) => {
                let args = self.arguments(cur)?;
                function::call(func, args, &mut self.rng)?
            }
            Category::LParen => {
                let val = self.expression(cur)?;
                cur.expect(Category::RParen)?;
                val
            }
            _ => return Err(error!(SyntaxError, ..&token.span(); "EXPECTED EXPRESSION")),
        };
        let val = if negative {
            Operation::negate(val)?
        } else {
            val
        };
        self.operands.push(val)
    }

    fn arguments(&mut self, cur: &mut Cursor) -> Result<Vec<Val>> {
        if cur.is(Category::LParen) {
            let mut peek = *cur;
            peek.next();
            if peek.eat(Category::RParen) {
                *cur = peek;
                return Ok(vec![]);
            }
        }
        self.index_list(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    fn eval(s: &str) -> Result<Val> {
        let (_, tokens) = lex(&format!("10 {}", s))?;
        let mut ctx = Context::new(Some(1));
        let mut cur = Cursor::new(&tokens);
        let val = ctx.expression(&mut cur)?;
        assert!(cur.at_end(), "trailing tokens in {}", s);
        assert!(ctx.operands.is_empty());
        Ok(val)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), Val::Integer(14));
        assert_eq!(eval("(2 + 3) * 4").unwrap(), Val::Integer(20));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Val::Integer(3));
        assert_eq!(eval("7 MOD 4 + 1").unwrap(), Val::Integer(4));
        assert_eq!(eval("1 + 1 = 2 AND 3 > 2").unwrap(), Val::Integer(1));
        assert_eq!(eval("NOT 1 = 2").unwrap(), Val::Integer(1));
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(eval("-(2 + 3)").unwrap(), Val::Integer(-5));
        assert_eq!(eval("--4").unwrap(), Val::Integer(4));
        assert_eq!(eval("2 * -3").unwrap(), Val::Integer(-6));
        assert_eq!(eval("-INT(2.5)").unwrap(), Val::Integer(-2));
    }

    #[test]
    fn test_float_literal_stays_float() {
        assert_eq!(eval("2.0").unwrap(), Val::Float(2.0));
        assert_eq!(eval("1 / 4").unwrap(), Val::Float(0.25));
    }

    #[test]
    fn test_errors() {
        assert!(eval("1 +").unwrap_err().is_syntax());
        assert!(eval("(1").unwrap_err().is_syntax());
        assert_eq!(eval("-\"A\"").unwrap_err().to_string(), "TYPE MISMATCH");
        assert_eq!(eval("\"A\" < 1").unwrap_err().to_string(), "TYPE MISMATCH");
    }
}
