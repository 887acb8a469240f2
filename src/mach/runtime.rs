use super::{Console, Context, Flow, Program};
use crate::error;
use crate::lang::token::{Category, Operator, Token, Word};
use crate::lang::{lex, Cursor, Error, Line, LineNumber, MAX_LINE_NUMBER};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// What the front end should do after a line is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Ready,
    Exit,
}

/// ## Line entry and commands
///
/// Numbered lines edit the program. Unnumbered lines are the commands
/// RUN, LIST, NEW and EXIT, or a statement to execute right away.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    context: Context,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(None)
    }
}

impl Runtime {
    pub fn new(seed: Option<u64>) -> Runtime {
        Runtime {
            program: Program::new(),
            context: Context::new(seed),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set this to stop a running program at the next line.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn enter(&mut self, console: &mut dyn Console, s: &str) -> Result<Event> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Event::Ready);
        }
        let (line_number, tokens) = lex(s)?;
        if let Some(line_number) = line_number {
            self.store(line_number, s, tokens);
            return Ok(Event::Ready);
        }
        self.command(console, &tokens)
    }

    /// Adds one line of a program file. Every line needs a number.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(());
        }
        match lex(s)? {
            (Some(line_number), tokens) => {
                self.store(line_number, s, tokens);
                Ok(())
            }
            (None, _) => Err(error!(DirectStatementInFile)),
        }
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.program
            .execute(&mut self.context, console, &self.interrupted)
    }

    pub fn list(&self, range: std::ops::RangeInclusive<LineNumber>) -> String {
        if range.start() > range.end() {
            return String::new();
        }
        self.program
            .list(range)
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Source text of a stored line.
    pub fn line(&self, line_number: LineNumber) -> Option<String> {
        self.program.line(line_number).map(|line| line.source().to_string())
    }

    /// Every stored line by number, for the line editor's completer.
    pub fn listing(&self) -> BTreeMap<LineNumber, String> {
        self.program
            .list(0..=MAX_LINE_NUMBER)
            .map(|line| (line.number(), line.source().to_string()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.program.clear(&mut self.context.data);
        self.context.reset();
    }

    fn store(&mut self, line_number: LineNumber, s: &str, tokens: Vec<Token>) {
        if tokens.is_empty() {
            debug!(line = line_number, "line deleted");
            self.program.remove(line_number, &mut self.context.data);
        } else {
            debug!(line = line_number, "line stored");
            self.program
                .insert(Line::new(line_number, s, tokens), &mut self.context.data);
        }
    }

    fn command(&mut self, console: &mut dyn Console, tokens: &[Token]) -> Result<Event> {
        let mut cur = Cursor::new(tokens);
        match cur.category() {
            Some(Category::Word(Word::Exit)) => {
                cur.next();
                Runtime::expect_end(&cur)?;
                Ok(Event::Exit)
            }
            Some(Category::Word(Word::New)) => {
                cur.next();
                Runtime::expect_end(&cur)?;
                self.clear();
                Ok(Event::Ready)
            }
            Some(Category::Word(Word::Run)) => {
                cur.next();
                Runtime::expect_end(&cur)?;
                self.run(console)?;
                Ok(Event::Ready)
            }
            Some(Category::Word(Word::List)) => {
                cur.next();
                let range = Runtime::list_range(&mut cur)?;
                console.print(&self.list(range))?;
                Ok(Event::Ready)
            }
            _ => {
                self.direct(console, tokens)?;
                Ok(Event::Ready)
            }
        }
    }

    /// Statements typed without a line number. They see the variables
    /// left by the last run but may not transfer control.
    fn direct(&mut self, console: &mut dyn Console, tokens: &[Token]) -> Result<()> {
        self.context.operands.clear();
        match self.context.execute(tokens, console)? {
            None | Some(Flow::Stop) => Ok(()),
            Some(_) => Err(error!(IllegalDirect)),
        }
    }

    fn expect_end(cur: &Cursor) -> Result<()> {
        if cur.at_end() {
            Ok(())
        } else {
            Err(error!(SyntaxError, ..&cur.column(); "UNEXPECTED TOKEN"))
        }
    }

    /// `[a][-[b]]`
    fn list_range(cur: &mut Cursor) -> Result<std::ops::RangeInclusive<LineNumber>> {
        let mut from = 0;
        let mut to = MAX_LINE_NUMBER;
        if let Some(token) = cur.peek() {
            if token.is(Category::Integer) {
                from = Runtime::list_number(token)?;
                to = from;
                cur.next();
            }
        }
        if cur.eat(Category::Operator(Operator::Minus)) {
            to = MAX_LINE_NUMBER;
            if let Some(token) = cur.peek() {
                if token.is(Category::Integer) {
                    to = Runtime::list_number(token)?;
                    cur.next();
                }
            }
        }
        Runtime::expect_end(cur)?;
        Ok(from..=to)
    }

    fn list_number(token: &Token) -> Result<LineNumber> {
        match token.lexeme.parse::<LineNumber>() {
            Ok(n) if n <= MAX_LINE_NUMBER => Ok(n),
            _ => Err(error!(SyntaxError, ..&token.span(); "INVALID LINE NUMBER")),
        }
    }
}
