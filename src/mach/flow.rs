use crate::lang::LineNumber;
use std::rc::Rc;

/// What a line asks the engine to do next. No signal at all means
/// continue with the following line.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Jump(LineNumber),
    Gosub(LineNumber),
    LoopBegin(Rc<str>),
    LoopRepeat(Rc<str>),
    LoopSkip(Rc<str>),
    Return,
    Stop,
    /// Token position to continue the same line from. The statement
    /// driver consumes it; it never reaches the engine.
    Execute(usize),
}
