//! Reference traces.
//!
//! A trace is the ordered list of pages a program touches. [`TraceReader`]
//! streams one from a file or any buffered reader; [`parse_trace`] and
//! [`read_trace`] load a whole trace at once for policies that need
//! lookahead.

mod reader;

pub use reader::{parse_trace, read_trace, TraceReader};
