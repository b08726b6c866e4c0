//! Simulation of demand paging over a reference trace.
//!
//! # Components
//! - [`Simulation`] - drives one replacer over a trace
//! - [`AccessEvent`] / [`EventSink`] - per-reference notifications
//! - [`SimStats`] / [`PolicyReport`] - counters and run summaries
//! - [`compare`] - every policy over the same trace

mod compare;
mod event;
mod simulation;
mod stats;

pub use compare::{compare, Comparison};
pub use event::{AccessEvent, EventLog, EventSink, LogSink, NullSink};
pub use simulation::{process, run_policy, simulate, Simulation};
pub use stats::{PolicyReport, SimStats};
