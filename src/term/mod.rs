use crate::error;
use crate::lang::{Error, LineNumber};
use crate::mach::{Console, Event, Runtime, Stdio};
use ansi_term::Style;
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Interactive prompt. Returns when EXIT is entered or input ends.
pub fn main(runtime: Runtime) {
    let interrupted = runtime.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    if let Err(error) = main_loop(runtime) {
        eprintln!("{}", error);
    }
}

/// Loads a program file and runs it once on standard input and output.
pub fn run_file(mut runtime: Runtime, path: &Path) -> Result<(), Error> {
    load(&mut runtime, path)?;
    let interrupted = runtime.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    runtime.run(&mut Stdio::default())
}

fn main_loop(mut runtime: Runtime) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    command.write_fmt(format_args!("READY.\n"))?;

    loop {
        let saved_completer =
            command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.set_completer(saved_completer);
        let mut screen = Screen {
            command: &command,
            input: &input,
            interrupted: runtime.interrupt_flag(),
        };
        let result = runtime.enter(&mut screen, &string);
        if !string.trim().is_empty() {
            command.add_history_unique(string.clone());
        }
        match result {
            Ok(Event::Exit) => break,
            Ok(Event::Ready) => {}
            Err(error) => report(&command, &runtime, &string, &error)?,
        }
    }
    info!("leaving interactive prompt");
    Ok(())
}

/// The line editor as PRINT and INPUT see it.
struct Screen<'a> {
    command: &'a Interface<DefaultTerminal>,
    input: &'a Interface<DefaultTerminal>,
    interrupted: Arc<AtomicBool>,
}

impl Console for Screen<'_> {
    fn print(&mut self, text: &str) -> std::io::Result<()> {
        self.command.write_fmt(format_args!("{}", text))
    }

    fn input(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.input.set_prompt(prompt)?;
        match self.input.read_line()? {
            ReadResult::Input(string) => {
                if !string.is_empty() {
                    self.input.add_history_unique(string.clone());
                }
                Ok(Some(string))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                self.input.set_buffer("")?;
                self.input.lock_reader().cancel_read_line()?;
                self.interrupted.store(true, Ordering::SeqCst);
                Err(std::io::ErrorKind::Interrupted.into())
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

fn report(
    interface: &Interface<DefaultTerminal>,
    runtime: &Runtime,
    entered: &str,
    error: &Error,
) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))?;
    let column = error.column();
    if column.is_empty() {
        return Ok(());
    }
    let source = if error.is_direct() {
        Some(entered.trim().to_string())
    } else {
        error.line_number().and_then(|n| runtime.line(n))
    };
    if let Some(source) = source {
        interface.write_fmt(format_args!("{}\n", decorate_list(&source, &[column])))?;
    }
    Ok(())
}

struct LineCompleter {
    listing: BTreeMap<LineNumber, String>,
}

impl LineCompleter {
    fn new(listing: BTreeMap<LineNumber, String>) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let s = self.listing.get(&num)?;
        let mut comp = Completion::simple(s.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

/// Underlines the columns of `ins` an error points at. A column just
/// past the end underlines a trailing space.
fn decorate_list(ins: &str, columns: &[std::ops::Range<usize>]) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for ch in ins.chars() {
        let do_under = columns.iter().any(|c| c.contains(&index));
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
        index += 1;
    }
    if columns.iter().any(|c| c.start == index) {
        if !under_on {
            out.push_str(&prefix);
        }
        under_on = true;
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}

fn load(runtime: &mut Runtime, path: &Path) -> Result<(), Error> {
    let reader = BufReader::new(File::open(path)?);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Err(error) = runtime.load_str(&line) {
            return Err(error.message(format!(
                "IN LINE {} OF {}",
                index + 1,
                path.display()
            )));
        }
    }
    if runtime.listing().is_empty() {
        return Err(error!(UndefinedLine; format!("NO PROGRAM IN {}", path.display())));
    }
    info!(path = %path.display(), "program loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_list() {
        let plain = decorate_list("10 PRINT", &[]);
        assert_eq!(plain, "10 PRINT");
        let under = decorate_list("10 PRINT", &[3..8]);
        assert!(under.starts_with("10 "));
        assert!(under.contains("PRINT"));
        assert_ne!(under, plain);
    }

    #[test]
    fn test_load_requires_numbers() {
        let mut path = std::env::temp_dir();
        path.push(format!("basic-load-{}.bas", std::process::id()));
        std::fs::write(&path, "10 PRINT 1\nPRINT 2\n").unwrap();
        let mut runtime = Runtime::new(Some(1));
        let e = load(&mut runtime, &path).unwrap_err();
        assert!(e.to_string().starts_with("DIRECT STATEMENT IN FILE; IN LINE 2 OF"));
        let _ = std::fs::remove_file(&path);
    }
}
