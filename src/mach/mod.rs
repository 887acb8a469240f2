/*!
## Rust Machine Module

This Rust module evaluates BASIC statements straight from their tokens
and steps a program from line to line by the flow signals they return.

*/

mod array;
mod console;
mod context;
mod data;
mod expr;
mod file;
mod flow;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

pub use array::Array;
pub use console::{Capture, Console, Stdio};
pub use context::Context;
pub use data::Data;
pub use file::{Files, Mode};
pub use flow::Flow;
pub use operation::Operation;
pub use program::Program;
pub use runtime::{Event, Runtime};
pub use stack::Stack;
pub use val::Val;
pub use var::{validate, Var, Variable};
