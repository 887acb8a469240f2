use super::console::advance_column;
use super::file::Mode;
use super::var::Variable;
use super::{Console, Context, Flow, Operation, Val};
use crate::error;
use crate::lang::token::{Category, Function, Operator, Token, Word};
use crate::lang::{Cursor, Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const ZONE_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Channel {
    Console,
    File(i64),
}

impl Context {
    /// Runs the statements of one line until one of them signals.
    ///
    /// An `Execute` signal from IF moves the cursor into the chosen
    /// branch and the loop carries on from there. Inside a branch an
    /// ELSE ends the line.
    pub fn execute(&mut self, tokens: &[Token], console: &mut dyn Console) -> Result<Option<Flow>> {
        let mut cur = Cursor::new(tokens);
        let mut branch = false;
        loop {
            while cur.eat(Category::Colon) {}
            match cur.category() {
                None => return Ok(None),
                Some(Category::Word(Word::Else)) if branch => return Ok(None),
                _ => {}
            }
            let flow = match self.statement(&mut cur, console) {
                Ok(flow) => flow,
                Err(error) => return Err(error.in_column(&cur.column())),
            };
            match flow {
                Some(Flow::Execute(position)) => {
                    cur.seek(position);
                    branch = true;
                    continue;
                }
                Some(flow) => return Ok(Some(flow)),
                None => {}
            }
            match cur.category() {
                None | Some(Category::Colon) => {}
                Some(Category::Word(Word::Else)) if branch => return Ok(None),
                Some(_) => {
                    return Err(error!(SyntaxError, ..&cur.column(); "UNEXPECTED TOKEN"));
                }
            }
        }
    }

    fn statement(&mut self, cur: &mut Cursor, console: &mut dyn Console) -> Result<Option<Flow>> {
        let word = match cur.category() {
            Some(Category::Name) => {
                self.r#let(cur)?;
                return Ok(None);
            }
            Some(Category::Word(word)) => word,
            _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        cur.next();
        match word {
            Word::Close => self.r#close(cur)?,
            Word::Data | Word::Rem => cur.skip_to_end(),
            Word::Dim => self.r#dim(cur)?,
            Word::For => return self.r#for(cur),
            Word::Gosub => return Ok(Some(Flow::Gosub(self.line_number(cur)?))),
            Word::Goto => return Ok(Some(Flow::Jump(self.line_number(cur)?))),
            Word::If => return self.r#if(cur),
            Word::Input => self.r#input(cur, console)?,
            Word::Let => self.r#let(cur)?,
            Word::Next => return self.r#next(cur),
            Word::On => return self.r#on(cur),
            Word::Open => self.r#open(cur)?,
            Word::Print => self.r#print(cur, console)?,
            Word::Read => self.r#read(cur)?,
            Word::Restore => self.r#restore(cur)?,
            Word::Return => return Ok(Some(Flow::Return)),
            Word::Stop => {
                self.files.close_all()?;
                return Ok(Some(Flow::Stop));
            }
            Word::Exit | Word::List | Word::New | Word::Run => {
                return Err(error!(SyntaxError; format!("{} IS NOT ALLOWED IN A PROGRAM", word)));
            }
            Word::Append | Word::As | Word::Else | Word::Output | Word::Step | Word::Then | Word::To => {
                return Err(error!(SyntaxError; "EXPECTED STATEMENT"));
            }
        }
        Ok(None)
    }

    fn line_number(&mut self, cur: &mut Cursor) -> Result<LineNumber> {
        self.expression(cur)?.line_number()
    }

    fn variable(&mut self, cur: &mut Cursor) -> Result<Variable> {
        let name: Rc<str> = cur.expect(Category::Name)?.lexeme.as_str().into();
        if cur.is(Category::LParen) {
            Ok(Variable::Array(name, self.index_list(cur)?))
        } else {
            Ok(Variable::Unary(name))
        }
    }

    fn r#let(&mut self, cur: &mut Cursor) -> Result<()> {
        let variable = self.variable(cur)?;
        cur.expect(Category::Operator(Operator::Equal))?;
        let value = self.expression(cur)?;
        self.var.assign(&variable, value)
    }

    fn r#dim(&mut self, cur: &mut Cursor) -> Result<()> {
        loop {
            let name: Rc<str> = cur.expect(Category::Name)?.lexeme.as_str().into();
            let sizes = self.index_list(cur)?;
            self.var.dimension_array(name, &sizes)?;
            if !cur.eat(Category::Comma) {
                return Ok(());
            }
        }
    }

    fn r#for(&mut self, cur: &mut Cursor) -> Result<Option<Flow>> {
        let name: Rc<str> = cur.expect(Category::Name)?.lexeme.as_str().into();
        cur.expect(Category::Operator(Operator::Equal))?;
        let start = self.expression(cur)?;
        cur.expect(Category::Word(Word::To))?;
        let end = self.expression(cur)?;
        let step = if cur.eat(Category::Word(Word::Step)) {
            self.expression(cur)?
        } else {
            Val::Integer(1)
        };
        if !cur.at_end() {
            return Err(error!(SyntaxError, ..&cur.column(); "FOR MUST END ITS LINE"));
        }
        let direction = step.to_f64()?;
        if direction == 0.0 {
            return Err(error!(IllegalFunctionCall; "ZERO STEP IN FOR LOOP"));
        }
        let value = match self.last_flow {
            Some(Flow::LoopRepeat(_)) => Operation::sum(self.var.fetch(&name), step)?,
            _ => start,
        };
        self.var.store(&name, value.clone())?;
        let past = if direction > 0.0 {
            Operation::greater(value, end)?
        } else {
            Operation::less(value, end)?
        };
        if past.is_true() {
            Ok(Some(Flow::LoopSkip(name)))
        } else {
            Ok(Some(Flow::LoopBegin(name)))
        }
    }

    fn r#next(&mut self, cur: &mut Cursor) -> Result<Option<Flow>> {
        let name = match cur.peek() {
            Some(token) if token.is(Category::Name) => token.lexeme.as_str(),
            _ => return Err(error!(SyntaxError; "EXPECTED LOOP VARIABLE")),
        };
        if name.ends_with('$') {
            return Err(error!(SyntaxError; "LOOP VARIABLE MUST BE NUMERIC"));
        }
        cur.next();
        Ok(Some(Flow::LoopRepeat(name.into())))
    }

    /// A line number after THEN or ELSE jumps, anything else starts a
    /// branch of statements on this line.
    fn r#if(&mut self, cur: &mut Cursor) -> Result<Option<Flow>> {
        let condition = self.expression(cur)?.is_true();
        cur.expect(Category::Word(Word::Then))?;
        if cur.is(Category::Integer) {
            let target = self.line_number(cur)?;
            if condition {
                return Ok(Some(Flow::Jump(target)));
            }
        } else if condition {
            return Ok(Some(Flow::Execute(cur.position())));
        }
        cur.skip_to(Category::Word(Word::Else));
        if !cur.eat(Category::Word(Word::Else)) {
            return Ok(None);
        }
        if cur.is(Category::Integer) {
            return Ok(Some(Flow::Jump(self.line_number(cur)?)));
        }
        Ok(Some(Flow::Execute(cur.position())))
    }

    fn r#on(&mut self, cur: &mut Cursor) -> Result<Option<Flow>> {
        let selector = self.expression(cur)?.to_f64()?.trunc();
        let gosub = match cur.next().map(|t| t.category) {
            Some(Category::Word(Word::Goto)) => false,
            Some(Category::Word(Word::Gosub)) => true,
            _ => return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB")),
        };
        let mut targets = vec![self.line_number(cur)?];
        while cur.eat(Category::Comma) {
            targets.push(self.line_number(cur)?);
        }
        if selector.is_nan() {
            return Err(error!(IllegalFunctionCall; "INVALID ON SELECTOR"));
        }
        if selector < 0.0 {
            return Err(error!(IllegalFunctionCall; "NEGATIVE ON SELECTOR"));
        }
        if selector < 1.0 || selector > targets.len() as f64 {
            return Ok(None);
        }
        let target = targets[selector as usize - 1];
        if gosub {
            Ok(Some(Flow::Gosub(target)))
        } else {
            Ok(Some(Flow::Jump(target)))
        }
    }

    fn r#read(&mut self, cur: &mut Cursor) -> Result<()> {
        loop {
            let variable = self.variable(cur)?;
            let value = self.data.read()?;
            self.var.assign(&variable, value)?;
            if !cur.eat(Category::Comma) {
                return Ok(());
            }
        }
    }

    fn r#restore(&mut self, cur: &mut Cursor) -> Result<()> {
        let line_number = if cur.at_statement_end() {
            0
        } else {
            self.line_number(cur)?
        };
        self.data.restore(line_number);
        Ok(())
    }

    fn r#open(&mut self, cur: &mut Cursor) -> Result<()> {
        let path = match self.expression(cur)? {
            Val::String(path) => path,
            _ => return Err(error!(TypeMismatch; "FILE NAME MUST BE A STRING")),
        };
        cur.expect(Category::Word(Word::For))?;
        let mode = match cur.next().map(|t| t.category) {
            Some(Category::Word(Word::Input)) => Mode::Input,
            Some(Category::Word(Word::Output)) => Mode::Output,
            Some(Category::Word(Word::Append)) => Mode::Append,
            _ => return Err(error!(SyntaxError; "EXPECTED INPUT, OUTPUT OR APPEND")),
        };
        cur.expect(Category::Word(Word::As))?;
        cur.eat(Category::Hash);
        let number = self.file_number(cur)?;
        self.files.open(number, &path, mode)
    }

    fn r#close(&mut self, cur: &mut Cursor) -> Result<()> {
        if cur.at_statement_end() {
            return self.files.close_all();
        }
        loop {
            cur.eat(Category::Hash);
            let number = self.file_number(cur)?;
            self.files.close(number)?;
            if !cur.eat(Category::Comma) {
                return Ok(());
            }
        }
    }

    fn file_number(&mut self, cur: &mut Cursor) -> Result<i64> {
        match self.expression(cur)?.integral()? {
            Some(number) => Ok(number),
            None => Err(error!(BadFileNumber)),
        }
    }

    /// `#n,` selects an open file, otherwise the console.
    fn channel(&mut self, cur: &mut Cursor) -> Result<Channel> {
        if !cur.eat(Category::Hash) {
            return Ok(Channel::Console);
        }
        let number = self.file_number(cur)?;
        if !self.files.is_open(number) {
            return Err(error!(BadFileNumber));
        }
        if !cur.at_statement_end() {
            cur.expect(Category::Comma)?;
        }
        Ok(Channel::File(number))
    }

    fn r#print(&mut self, cur: &mut Cursor, console: &mut dyn Console) -> Result<()> {
        let channel = self.channel(cur)?;
        let mut linefeed = true;
        while !cur.at_statement_end() {
            linefeed = true;
            let tab = cur.is(Category::Function(Function::Tab));
            let value = self.expression(cur)?;
            if tab {
                self.tab(console, channel, &value)?;
            } else {
                self.emit(console, channel, &value.to_string())?;
            }
            match cur.category() {
                Some(Category::Semicolon) => {
                    cur.next();
                    linefeed = false;
                }
                Some(Category::Comma) => {
                    cur.next();
                    linefeed = false;
                    let column = self.column_of(channel)?;
                    let next_zone = (column / ZONE_WIDTH + 1) * ZONE_WIDTH;
                    self.emit(console, channel, &" ".repeat(next_zone - column))?;
                }
                _ => break,
            }
        }
        if linefeed {
            self.emit(console, channel, "\n")?;
        }
        Ok(())
    }

    /// TAB(n) moves to 1-based column `n`, breaking the line first if
    /// the output is already past it.
    fn tab(&mut self, console: &mut dyn Console, channel: Channel, value: &Val) -> Result<()> {
        let target = match value {
            Val::String(s) => s.chars().count().saturating_sub(1),
            _ => return Err(error!(TypeMismatch)),
        };
        let mut column = self.column_of(channel)?;
        if column > target {
            self.emit(console, channel, "\n")?;
            column = 0;
        }
        self.emit(console, channel, &" ".repeat(target - column))
    }

    fn column_of(&self, channel: Channel) -> Result<usize> {
        match channel {
            Channel::Console => Ok(self.column),
            Channel::File(number) => self.files.column(number),
        }
    }

    fn emit(&mut self, console: &mut dyn Console, channel: Channel, text: &str) -> Result<()> {
        match channel {
            Channel::Console => {
                console.print(text)?;
                advance_column(&mut self.column, text);
                Ok(())
            }
            Channel::File(number) => self.files.write(number, text),
        }
    }

    fn r#input(&mut self, cur: &mut Cursor, console: &mut dyn Console) -> Result<()> {
        let channel = self.channel(cur)?;
        let mut prompt = String::from("? ");
        if channel == Channel::Console && cur.is(Category::String) {
            if let Some(token) = cur.next() {
                prompt = token.lexeme.clone();
            }
            if cur.eat(Category::Semicolon) {
                prompt.push_str("? ");
            } else {
                cur.expect(Category::Comma)?;
            }
        }
        let mut variables = vec![self.variable(cur)?];
        while cur.eat(Category::Comma) {
            variables.push(self.variable(cur)?);
        }
        loop {
            let line = match channel {
                Channel::Console => match console.input(&prompt)? {
                    Some(line) => {
                        self.column = 0;
                        line
                    }
                    None => return Err(error!(InputPastEnd)),
                },
                Channel::File(number) => self.files.read_line(number)?,
            };
            match answers(&line, &variables) {
                Some(values) => {
                    for (variable, value) in variables.iter().zip(values) {
                        self.var.assign(variable, value)?;
                    }
                    return Ok(());
                }
                None if channel == Channel::Console => {
                    console.print("?REDO FROM START\n")?;
                }
                None => return Err(error!(TypeMismatch; "BAD INPUT FROM FILE")),
            }
        }
    }
}

/// Splits an answer on commas, one field per variable. `None` when the
/// count is wrong or a numeric variable gets text.
fn answers(line: &str, variables: &[Variable]) -> Option<Vec<Val>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != variables.len() {
        return None;
    }
    let mut values = Vec::with_capacity(fields.len());
    for (field, variable) in fields.iter().zip(variables) {
        let name = match variable {
            Variable::Unary(name) | Variable::Array(name, _) => name,
        };
        if name.ends_with('$') {
            let field = field.trim();
            let field = field
                .strip_prefix('"')
                .and_then(|f| f.strip_suffix('"'))
                .unwrap_or(field);
            values.push(Val::String(field.into()));
        } else {
            values.push(Val::parse(field)?);
        }
    }
    Some(values)
}
