use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where PRINT writes and INPUT reads when no file number is given.
pub trait Console {
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Shows the prompt and reads one line. `None` at end of input.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Moves a print column past `text`; a line break resets it.
pub fn advance_column(column: &mut usize, text: &str) {
    match text.rfind('\n') {
        Some(pos) => *column = text[pos + 1..].chars().count(),
        None => *column += text.chars().count(),
    }
}

/// Standard output and standard input, for running program files.
#[derive(Debug, Default)]
pub struct Stdio {}

impl Console for Stdio {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Collects output in memory and answers INPUT from a queue.
#[derive(Debug, Default)]
pub struct Capture {
    output: String,
    input: VecDeque<String>,
}

impl Capture {
    pub fn new() -> Capture {
        Capture::default()
    }

    pub fn with_input<I, S>(lines: I) -> Capture
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Capture {
            output: String::new(),
            input: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for Capture {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_column() {
        let mut column = 0;
        advance_column(&mut column, "ABC");
        assert_eq!(column, 3);
        advance_column(&mut column, "D\nEF");
        assert_eq!(column, 2);
        advance_column(&mut column, "\n");
        assert_eq!(column, 0);
    }

    #[test]
    fn test_capture() {
        let mut c = Capture::with_input(vec!["1,2"]);
        c.print("HI").unwrap();
        assert_eq!(c.input("? ").unwrap().as_deref(), Some("1,2"));
        assert_eq!(c.input("? ").unwrap(), None);
        assert_eq!(c.take_output(), "HI? ? ");
        assert_eq!(c.output(), "");
    }
}
