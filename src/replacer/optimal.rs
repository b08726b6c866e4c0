//! Optimal (Belady) replacement policy.
//!
//! On a fault with a full table, evicts the resident page whose next use lies
//! furthest in the future. Needs the whole trace up front.
//!
//! Next uses are precomputed in one backward pass over the trace, so a fault
//! costs O(capacity) instead of a fresh scan of the remaining trace.
//!
//! # Tie-break
//! When several resident pages are never referenced again, the one loaded
//! most recently is evicted. Pages with a future use always have distinct
//! next-use positions, so no other ties exist.

use std::collections::HashMap;

use crate::common::{FrameCapacity, PageId};
use crate::replacer::{Access, PolicyKind, Replacer};

#[derive(Debug, Clone, Copy)]
struct Residency {
    /// Trace position of the next reference, `None` if never again.
    next_use: Option<usize>,

    /// Load sequence number, larger = loaded later.
    loaded: u64,
}

impl Residency {
    /// Eviction rank; the largest rank is the victim.
    fn rank(&self) -> (usize, u64) {
        (self.next_use.unwrap_or(usize::MAX), self.loaded)
    }
}

/// Belady's algorithm over a fixed reference trace.
///
/// References are expected in trace order. The replacer keeps a cursor into
/// the trace and looks ahead from the position after the current one; a
/// reference that does not match the trace at the cursor still counts as
/// that position and its next use is found by scanning.
pub struct OptimalReplacer {
    trace: Vec<PageId>,

    /// `next_use[i]` is the next position after `i` holding `trace[i]`.
    next_use: Vec<Option<usize>>,

    /// Position of the next reference in `trace`.
    cursor: usize,

    frames: HashMap<PageId, Residency>,
    loads: u64,
    capacity: FrameCapacity,
}

impl OptimalReplacer {
    /// Create an Optimal replacer for `trace` with an empty frame table.
    pub fn new(capacity: FrameCapacity, trace: Vec<PageId>) -> Self {
        let frames = capacity.get();
        let next_use = next_uses(&trace);
        Self {
            trace,
            next_use,
            cursor: 0,
            frames: HashMap::with_capacity(frames),
            loads: 0,
            capacity,
        }
    }

    /// Number of references consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The full trace this replacer looks ahead into.
    pub fn trace(&self) -> &[PageId] {
        &self.trace
    }

    /// Next use of `page_id` strictly after `position`.
    fn lookahead(&self, position: usize, page_id: PageId) -> Option<usize> {
        if self.trace.get(position) == Some(&page_id) {
            return self.next_use[position];
        }

        // Out-of-order reference: fall back to scanning the remainder.
        let start = (position + 1).min(self.trace.len());
        self.trace[start..]
            .iter()
            .position(|&pid| pid == page_id)
            .map(|offset| start + offset)
    }

    fn select_victim(&self) -> Option<PageId> {
        self.frames
            .iter()
            .max_by_key(|(_, residency)| residency.rank())
            .map(|(&page_id, _)| page_id)
    }
}

/// For each position, the next position holding the same page.
fn next_uses(trace: &[PageId]) -> Vec<Option<usize>> {
    let mut next_use = vec![None; trace.len()];
    let mut seen: HashMap<PageId, usize> = HashMap::new();

    for (pos, &page_id) in trace.iter().enumerate().rev() {
        next_use[pos] = seen.insert(page_id, pos);
    }

    next_use
}

impl Replacer for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        self.frames.contains_key(&page_id)
    }

    fn reference(&mut self, page_id: PageId) -> Access {
        let position = self.cursor;
        self.cursor += 1;

        let next_use = self.lookahead(position, page_id);

        if let Some(residency) = self.frames.get_mut(&page_id) {
            residency.next_use = next_use;
            return Access::Hit;
        }

        let evicted = if self.frames.len() >= self.capacity.get() {
            let victim = self.select_victim();
            if let Some(victim) = victim {
                self.frames.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.loads += 1;
        self.frames.insert(
            page_id,
            Residency {
                next_use,
                loaded: self.loads,
            },
        );

        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        let mut resident: Vec<(u64, PageId)> = self
            .frames
            .iter()
            .map(|(&page_id, residency)| (residency.loaded, page_id))
            .collect();
        resident.sort_unstable();
        resident.into_iter().map(|(_, page_id)| page_id).collect()
    }
}
