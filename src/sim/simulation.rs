//! Simulation driver - feeds a trace through one replacer.
//!
//! A [`Simulation`] provides:
//! - Strictly sequential resolution of references
//! - Hit / fault / eviction accounting
//! - Event delivery to an [`EventSink`]

use crate::common::{FrameCapacity, PageId, Result};
use crate::replacer::{Access, PolicyKind, Replacer};
use crate::sim::{AccessEvent, EventSink, NullSink, PolicyReport, SimStats};

/// Runs references through a single replacer.
///
/// # Architecture
/// ```text
///  references ──► Simulation::step ──► Replacer::reference ──► Access
///                        │                                       │
///                        ├──────────── SimStats ◄────────────────┤
///                        └──────────── EventSink ◄───────────────┘
/// ```
///
/// One reference is fully resolved before the next is read. The simulation
/// owns its replacer's frame table exclusively.
///
/// # Usage
/// ```
/// use pagesim::replacer::PolicyKind;
/// use pagesim::sim::{EventLog, Simulation};
/// use pagesim::{pages, FrameCapacity};
///
/// let trace = pages(&[1, 2, 1, 3, 2]);
/// let capacity = FrameCapacity::new(2).unwrap();
/// let mut sim = Simulation::new(PolicyKind::Lru.build(capacity, &trace), EventLog::new());
///
/// for &page_id in &trace {
///     sim.step(page_id);
/// }
/// assert_eq!(sim.stats().faults, 4);
/// assert_eq!(sim.sink().evictions().len(), 2);
/// ```
pub struct Simulation<S: EventSink = NullSink> {
    replacer: Box<dyn Replacer>,
    stats: SimStats,
    sink: S,
}

impl<S: EventSink> Simulation<S> {
    pub fn new(replacer: Box<dyn Replacer>, sink: S) -> Self {
        Self {
            replacer,
            stats: SimStats::new(),
            sink,
        }
    }

    /// Resolve a single reference.
    pub fn step(&mut self, page_id: PageId) -> Access {
        let position = self.stats.references as usize;
        let access = self.replacer.reference(page_id);

        self.stats.record(access);
        self.sink.record(&AccessEvent {
            policy: self.replacer.kind(),
            position,
            page_id,
            access,
        });

        access
    }

    /// Resolve references until the source is exhausted.
    ///
    /// Returns the total fault count of this simulation.
    ///
    /// # Errors
    /// The first error yielded by `references`. The run stops there; counts
    /// accumulated so far are not authoritative.
    pub fn run<I>(&mut self, references: I) -> Result<u64>
    where
        I: IntoIterator<Item = Result<PageId>>,
    {
        for page_id in references {
            self.step(page_id?);
        }
        Ok(self.stats.faults)
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    pub fn replacer(&self) -> &dyn Replacer {
        self.replacer.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Summary of the run so far.
    pub fn report(&self) -> PolicyReport {
        PolicyReport {
            policy: self.replacer.kind(),
            capacity: self.replacer.capacity(),
            stats: self.stats,
        }
    }
}

/// Run one policy over an in-memory trace.
pub fn simulate<S: EventSink>(
    kind: PolicyKind,
    capacity: FrameCapacity,
    trace: &[PageId],
    sink: S,
) -> PolicyReport {
    log::info!("Running {} over {} references with {}", kind, trace.len(), capacity);

    let mut sim = Simulation::new(kind.build(capacity, trace), sink);
    for &page_id in trace {
        sim.step(page_id);
    }

    let report = sim.report();
    log::info!("{}", report);
    report
}

/// Run one policy over a fallible reference source.
///
/// FIFO, LRU and MRU pull one reference at a time. Optimal first reads the
/// whole source, since it needs lookahead.
///
/// # Errors
/// The first error yielded by `references`.
pub fn run_policy<I, S>(
    kind: PolicyKind,
    capacity: FrameCapacity,
    references: I,
    sink: S,
) -> Result<PolicyReport>
where
    I: IntoIterator<Item = Result<PageId>>,
    S: EventSink,
{
    if kind.needs_lookahead() {
        let trace = references.into_iter().collect::<Result<Vec<PageId>>>()?;
        return Ok(simulate(kind, capacity, &trace, sink));
    }

    log::info!("Running {} with {}", kind, capacity);

    let mut sim = Simulation::new(kind.build(capacity, &[]), sink);
    sim.run(references)?;

    let report = sim.report();
    log::info!("{}", report);
    Ok(report)
}

/// Count the page faults `kind` takes on `references` with `frame_capacity` frames.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frame_capacity <= 0`
/// - the first error yielded by `references`
///
/// # Example
/// ```
/// use pagesim::replacer::PolicyKind;
/// use pagesim::{pages, process};
///
/// let trace = pages(&[1, 2, 1, 3, 2]);
/// let faults = process(PolicyKind::Fifo, 2, trace.into_iter().map(Ok)).unwrap();
/// assert_eq!(faults, 3);
/// ```
pub fn process<I>(kind: PolicyKind, frame_capacity: i64, references: I) -> Result<u64>
where
    I: IntoIterator<Item = Result<PageId>>,
{
    let capacity = FrameCapacity::new(frame_capacity)?;
    run_policy(kind, capacity, references, NullSink).map(|report| report.faults())
}
