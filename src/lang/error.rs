use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is_syntax(&self) -> bool {
        self.code == ErrorCode::SyntaxError as u16
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    /// The first line number wins. Errors raised inside an IF branch
    /// already belong to the line that holds the IF.
    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = Some(line);
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        let message = message.into();
        if self.message.is_empty() {
            self.message = message;
        } else {
            self.message = format!("{}; {}", self.message, message);
        }
        self
    }
}

pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    DivisionByZero = 11,
    IllegalDirect = 12,
    TypeMismatch = 13,
    Break = 24,
    InternalError = 51,
    BadFileNumber = 52,
    FileNotFound = 53,
    BadFileMode = 54,
    FileAlreadyOpen = 55,
    DiskIoError = 57,
    InputPastEnd = 62,
    DirectStatementInFile = 66,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::Interrupted => return Error::new(ErrorCode::Break),
            _ => ErrorCode::DiskIoError,
        };
        Error::new(code).message(error.to_string().to_ascii_uppercase())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            4 => "OUT OF DATA",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            9 => "SUBSCRIPT OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            12 => "ILLEGAL DIRECT",
            13 => "TYPE MISMATCH",
            24 => "BREAK",
            51 => "INTERNAL ERROR",
            52 => "BAD FILE NUMBER",
            53 => "FILE NOT FOUND",
            54 => "BAD FILE MODE",
            55 => "FILE ALREADY OPEN",
            57 => "DISK I/O ERROR",
            62 => "INPUT PAST END",
            66 => "DIRECT STATEMENT IN FILE",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " in line {}", line_number)?;
        }
        Ok(())
    }
}
