//! MRU (Most Recently Used) replacement policy.
//!
//! The frame table is a [`RecencyList`] (head = least recent, tail = most
//! recent) plus an index from page to list node for O(1) lookup.
//!
//! ```text
//!   index: HashMap<PageId, FrameId>
//!   ┌─────────┬──────────┐
//!   │ Page(4) │ Frame(0) │──┐
//!   │ Page(9) │ Frame(2) │──┼──┐
//!   │ Page(7) │ Frame(1) │──┼──┼──┐
//!   └─────────┴──────────┘  │  │  │
//!                           ▼  ▼  ▼
//!   list:  head ─► [9] ◄─► [4] ◄─► [7] ◄─ tail  (victim)
//! ```
//!
//! A hit relinks the node at the tail. A fault on a full table destroys the
//! tail node before the new page is appended, so the page just loaded is
//! never its own victim.

use std::collections::HashMap;

use crate::common::{FrameCapacity, FrameId, PageId};
use crate::replacer::{Access, PolicyKind, Replacer, RecencyList};

/// Evicts the page accessed most recently before the faulting reference.
pub struct MruReplacer {
    list: RecencyList,

    /// Every linked node has exactly one entry here, and vice versa.
    index: HashMap<PageId, FrameId>,

    capacity: FrameCapacity,
}

impl MruReplacer {
    /// Create an MRU replacer with an empty frame table.
    pub fn new(capacity: FrameCapacity) -> Self {
        let frames = capacity.get();
        Self {
            list: RecencyList::with_capacity(frames),
            index: HashMap::with_capacity(frames),
            capacity,
        }
    }

    /// The page that would be evicted on the next full-table fault.
    pub fn most_recent(&self) -> Option<PageId> {
        self.list.tail().and_then(|id| self.list.page_id(id))
    }

    /// Destroy the most recent node and drop its index entry.
    fn evict(&mut self) -> Option<PageId> {
        let victim = self.list.pop_back()?;
        self.index.remove(&victim);
        Some(victim)
    }
}

impl Replacer for MruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        self.index.contains_key(&page_id)
    }

    fn reference(&mut self, page_id: PageId) -> Access {
        if let Some(&frame_id) = self.index.get(&page_id) {
            self.list.promote(frame_id);
            return Access::Hit;
        }

        let evicted = if self.list.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };

        let frame_id = self.list.push_back(page_id);
        self.index.insert(page_id, frame_id);

        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        self.list.iter().collect()
    }
}
