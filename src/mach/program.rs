use super::{Console, Context, Data, Flow, Stack};
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Program lines and the engine that runs them

#[derive(Debug)]
pub struct Program {
    lines: BTreeMap<LineNumber, Line>,
    returns: Stack<LineNumber>,
    loops: HashMap<Rc<str>, LineNumber>,
}

impl Default for Program {
    fn default() -> Self {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            lines: BTreeMap::new(),
            returns: Stack::new("TOO MANY GOSUB"),
            loops: HashMap::new(),
        }
    }

    /// Adds or replaces a line. The values of a DATA line go to the
    /// data store and only the DATA keyword stays here.
    pub fn insert(&mut self, line: Line, data: &mut Data) {
        let number = line.number();
        data.remove(number);
        let line = if line.is_data() {
            let (placeholder, values) = line.placeholder();
            data.insert(number, values);
            placeholder
        } else {
            line
        };
        self.lines.insert(number, line);
    }

    pub fn remove(&mut self, number: LineNumber, data: &mut Data) {
        data.remove(number);
        self.lines.remove(&number);
    }

    pub fn clear(&mut self, data: &mut Data) {
        data.clear();
        self.lines.clear();
        self.returns.clear();
        self.loops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, number: LineNumber) -> Option<&Line> {
        self.lines.get(&number)
    }

    pub fn list(&self, range: RangeInclusive<LineNumber>) -> impl Iterator<Item = &Line> {
        self.lines.range(range).map(|(_, line)| line)
    }

    /// Runs from the lowest line until the program ends, STOP, or an
    /// error. Errors leave with the number of the line that raised them.
    pub fn execute(
        &mut self,
        context: &mut Context,
        console: &mut dyn Console,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        self.returns.clear();
        self.loops.clear();
        context.reset();
        interrupted.store(false, Ordering::SeqCst);
        let mut current = match self.lines.keys().next() {
            Some(&number) => number,
            None => return Err(error!(UndefinedLine; "NO PROGRAM")),
        };
        info!(first = current, lines = self.lines.len(), "run started");
        loop {
            if interrupted.swap(false, Ordering::SeqCst) {
                info!(line = current, "interrupted");
                return Err(error!(Break).in_line_number(current));
            }
            let line = match self.lines.get(&current) {
                Some(line) => line,
                None => return Err(error!(UndefinedLine).in_line_number(current)),
            };
            trace!(line = current, "executing");
            let flow = match context.execute(line.tokens(), console) {
                Ok(flow) => flow,
                Err(error) => {
                    debug!(line = current, code = error.code(), "run failed");
                    return Err(error.in_line_number(current));
                }
            };
            if let Some(flow) = &flow {
                debug!(line = current, ?flow, "flow signal");
            }
            let next = self
                .next_line(current, flow.as_ref())
                .map_err(|e| e.in_line_number(current))?;
            context.last_flow = flow;
            match next {
                Some(number) => current = number,
                None => break,
            }
        }
        context.files.close_all()?;
        info!(line = current, "run finished");
        Ok(())
    }

    fn next_line(&mut self, current: LineNumber, flow: Option<&Flow>) -> Result<Option<LineNumber>> {
        let flow = match flow {
            Some(flow) => flow,
            None => return Ok(self.following(current)),
        };
        match flow {
            Flow::Jump(target) => Ok(Some(self.target(*target)?)),
            Flow::Gosub(target) => {
                let target = self.target(*target)?;
                match self.following(current) {
                    Some(ret) => self.returns.push(ret)?,
                    None => return Err(error!(UndefinedLine; "GOSUB FROM LAST LINE")),
                }
                Ok(Some(target))
            }
            Flow::Return => {
                if self.returns.is_empty() {
                    return Err(error!(ReturnWithoutGosub));
                }
                Ok(Some(self.returns.pop()?))
            }
            Flow::LoopBegin(var) => {
                self.loops.insert(var.clone(), current);
                Ok(self.following(current))
            }
            Flow::LoopRepeat(var) => match self.loops.remove(var) {
                Some(number) => Ok(Some(number)),
                None => Err(error!(NextWithoutFor)),
            },
            Flow::LoopSkip(var) => Ok(self.skip_loop(current, var)),
            Flow::Stop => Ok(None),
            Flow::Execute(_) => Err(error!(InternalError; "UNRESOLVED BRANCH")),
        }
    }

    fn following(&self, number: LineNumber) -> Option<LineNumber> {
        self.lines
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(&number, _)| number)
    }

    fn target(&self, number: LineNumber) -> Result<LineNumber> {
        if self.lines.contains_key(&number) {
            Ok(number)
        } else {
            Err(error!(UndefinedLine; format!("NO LINE {}", number)))
        }
    }

    /// The line after the first later `NEXT var`.
    fn skip_loop(&self, current: LineNumber, var: &str) -> Option<LineNumber> {
        let mut lines = self.lines.range((Excluded(current), Unbounded));
        while let Some((_, line)) = lines.next() {
            if line.is_next_for(var) {
                return lines.next().map(|(&number, _)| number);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;
    use crate::mach::Capture;

    fn program(source: &[&str]) -> (Program, Context) {
        let mut program = Program::new();
        let mut context = Context::new(Some(1));
        for s in source {
            let (number, tokens) = lex(s).unwrap();
            program.insert(Line::new(number.unwrap(), s, tokens), &mut context.data);
        }
        (program, context)
    }

    fn run(source: &[&str]) -> (Result<()>, String) {
        let (mut program, mut context) = program(source);
        let mut console = Capture::new();
        let result = program.execute(&mut context, &mut console, &AtomicBool::new(false));
        (result, console.take_output())
    }

    #[test]
    fn test_empty_program() {
        let (result, _) = run(&[]);
        assert_eq!(result.unwrap_err().to_string(), "UNDEFINED LINE; NO PROGRAM");
    }

    #[test]
    fn test_gosub_from_last_line() {
        let (result, _) = run(&["10 GOSUB 10"]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "UNDEFINED LINE; GOSUB FROM LAST LINE in line 10"
        );
    }

    #[test]
    fn test_loop_skip_resumes_after_next() {
        let (result, output) = run(&[
            "10 FOR I = 5 TO 1",
            "20 PRINT \"BODY\"",
            "30 NEXT I",
            "40 PRINT \"DONE\"",
        ]);
        result.unwrap();
        assert_eq!(output, "DONE\n");
    }

    #[test]
    fn test_interrupt_breaks_endless_loop() {
        let (mut program, mut context) = program(&["10 GOTO 20", "20 GOTO 10"]);
        let flag = std::sync::Arc::new(AtomicBool::new(false));
        let setter = flag.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            setter.store(true, Ordering::SeqCst);
        });
        let result = program.execute(&mut context, &mut Capture::new(), &flag);
        handle.join().unwrap();
        assert!(result.unwrap_err().to_string().starts_with("BREAK in line"));
    }

    #[test]
    fn test_data_lines_keep_placeholder() {
        let (program, context) = program(&["10 DATA 1, 2", "20 PRINT"]);
        assert_eq!(program.line(10).unwrap().tokens().len(), 1);
        assert_eq!(context.data.len(), 1);
        assert_eq!(program.list(1..=15).count(), 1);
    }
}
