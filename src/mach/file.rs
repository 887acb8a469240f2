use super::console::advance_column;
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input,
    Output,
    Append,
}

#[derive(Debug)]
enum Handle {
    Input(BufReader<File>),
    Output { writer: BufWriter<File>, column: usize },
}

/// ## Open file handles by number

#[derive(Debug, Default)]
pub struct Files {
    handles: BTreeMap<i64, Handle>,
}

impl Files {
    pub fn new() -> Files {
        Files::default()
    }

    pub fn is_open(&self, number: i64) -> bool {
        self.handles.contains_key(&number)
    }

    pub fn open(&mut self, number: i64, path: &str, mode: Mode) -> Result<()> {
        if number < 1 {
            return Err(error!(BadFileNumber));
        }
        if self.is_open(number) {
            return Err(error!(FileAlreadyOpen));
        }
        let handle = match mode {
            Mode::Input => Handle::Input(BufReader::new(File::open(path)?)),
            Mode::Output => Handle::Output {
                writer: BufWriter::new(File::create(path)?),
                column: 0,
            },
            Mode::Append => Handle::Output {
                writer: BufWriter::new(OpenOptions::new().append(true).create(true).open(path)?),
                column: 0,
            },
        };
        self.handles.insert(number, handle);
        Ok(())
    }

    pub fn close(&mut self, number: i64) -> Result<()> {
        match self.handles.remove(&number) {
            Some(handle) => Files::flush(handle),
            None => Err(error!(BadFileNumber)),
        }
    }

    /// Every handle is closed even when one of them fails to flush.
    pub fn close_all(&mut self) -> Result<()> {
        let mut result = Ok(());
        while let Some((_, handle)) = self.handles.pop_first() {
            if let Err(error) = Files::flush(handle) {
                result = Err(error);
            }
        }
        result
    }

    pub fn write(&mut self, number: i64, text: &str) -> Result<()> {
        match self.handles.get_mut(&number) {
            Some(Handle::Output { writer, column }) => {
                writer.write_all(text.as_bytes())?;
                advance_column(column, text);
                Ok(())
            }
            Some(Handle::Input(_)) => Err(error!(BadFileMode)),
            None => Err(error!(BadFileNumber)),
        }
    }

    pub fn column(&self, number: i64) -> Result<usize> {
        match self.handles.get(&number) {
            Some(Handle::Output { column, .. }) => Ok(*column),
            Some(Handle::Input(_)) => Err(error!(BadFileMode)),
            None => Err(error!(BadFileNumber)),
        }
    }

    /// One line without its terminator.
    pub fn read_line(&mut self, number: i64) -> Result<String> {
        match self.handles.get_mut(&number) {
            Some(Handle::Input(reader)) => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Err(error!(InputPastEnd));
                }
                let len = line.trim_end_matches(&['\r', '\n'][..]).len();
                line.truncate(len);
                Ok(line)
            }
            Some(Handle::Output { .. }) => Err(error!(BadFileMode)),
            None => Err(error!(BadFileNumber)),
        }
    }

    fn flush(handle: Handle) -> Result<()> {
        if let Handle::Output { mut writer, .. } = handle {
            writer.flush()?;
        }
        Ok(())
    }
}
