//! Side-by-side comparison of every policy on one trace.

use std::thread;

use parking_lot::Mutex;

use crate::common::{FrameCapacity, PageId};
use crate::replacer::PolicyKind;
use crate::sim::{simulate, NullSink, PolicyReport};

/// Reports for every policy over the same trace and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub capacity: FrameCapacity,

    /// One report per policy, in [`PolicyKind::ALL`] order.
    pub reports: Vec<PolicyReport>,
}

impl Comparison {
    pub fn get(&self, kind: PolicyKind) -> Option<&PolicyReport> {
        self.reports.iter().find(|report| report.policy == kind)
    }

    pub fn faults(&self, kind: PolicyKind) -> Option<u64> {
        self.get(kind).map(PolicyReport::faults)
    }

    /// The report with the fewest faults; earlier policies win ties.
    pub fn best(&self) -> Option<&PolicyReport> {
        self.reports.iter().min_by_key(|report| report.faults())
    }
}

/// Run every policy over `trace`.
///
/// Each policy runs on its own thread with its own frame table; only the
/// trace is shared, read-only.
///
/// # Example
/// ```
/// use pagesim::replacer::PolicyKind;
/// use pagesim::sim::compare;
/// use pagesim::{pages, FrameCapacity};
///
/// let cmp = compare(FrameCapacity::new(2).unwrap(), &pages(&[1, 2, 1, 3, 2]));
/// assert_eq!(cmp.faults(PolicyKind::Lru), Some(4));
/// assert_eq!(cmp.faults(PolicyKind::Optimal), Some(3));
/// ```
pub fn compare(capacity: FrameCapacity, trace: &[PageId]) -> Comparison {
    let reports = Mutex::new(Vec::with_capacity(PolicyKind::ALL.len()));

    thread::scope(|scope| {
        for kind in PolicyKind::ALL {
            let reports = &reports;
            scope.spawn(move || {
                let report = simulate(kind, capacity, trace, NullSink);
                reports.lock().push(report);
            });
        }
    });

    let mut reports = reports.into_inner();
    reports.sort_by_key(|report| report.policy);

    Comparison { capacity, reports }
}
