//! pagesim - demand-paging simulator with swappable page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Input Source (trace/)                       │   │
//! │  │        TraceReader: one page id per line, lazy           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (sim/)                           │   │
//! │  │     Simulation + SimStats + EventSink + compare          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Eviction Engine (replacer/)  [Swappable]          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Policies: FIFO | LRU | MRU | Optimal        │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        OrderedTable + RecencyList building blocks        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`replacer`] - Page replacement policies
//! - [`trace`] - Reading reference traces
//! - [`sim`] - Running policies over traces
//!
//! # Quick Start
//! ```
//! use pagesim::replacer::PolicyKind;
//! use pagesim::trace::parse_trace;
//!
//! let trace = parse_trace("1\n2\n1\n3\n2\n").unwrap();
//! let faults = pagesim::process(PolicyKind::Optimal, 2, trace.into_iter().map(Ok)).unwrap();
//! assert_eq!(faults, 3);
//! ```

pub mod common;
pub mod replacer;
pub mod sim;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_CAPACITY, DEFAULT_TRACE_PATH};
pub use common::{pages, Error, FrameCapacity, FrameId, PageId, Result, SimConfig};

pub use replacer::{Access, PolicyKind, Replacer};
pub use sim::{process, run_policy, simulate, PolicyReport, SimStats, Simulation};
pub use trace::TraceReader;
