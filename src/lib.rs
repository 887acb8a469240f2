//! # BASIC
//!
//! A line-numbered BASIC that runs each statement as it reads it.
//! There is no syntax tree and no compile step: statements are
//! evaluated straight from their tokens and hand back a flow signal
//! that tells the engine which line runs next.
//!
//! ```
//! use basic::mach::{Capture, Runtime};
//!
//! let mut runtime = Runtime::new(Some(1));
//! let mut console = Capture::new();
//! runtime.enter(&mut console, "10 FOR I = 1 TO 3").unwrap();
//! runtime.enter(&mut console, "20 PRINT I;").unwrap();
//! runtime.enter(&mut console, "30 NEXT I").unwrap();
//! runtime.enter(&mut console, "RUN").unwrap();
//! assert_eq!(console.output(), "123");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
