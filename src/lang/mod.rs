/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language and the
cursor statements are evaluated from.

*/

#[macro_use]
mod error;
mod cursor;
mod lex;
mod line;
pub mod token;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;

pub type LineNumber = u16;
pub type Column = std::ops::Range<usize>;

pub const MAX_LINE_NUMBER: LineNumber = 65529;
