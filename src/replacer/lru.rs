//! LRU (Least Recently Used) replacement policy.

use crate::common::{FrameCapacity, PageId};
use crate::replacer::{Access, OrderPolicy, OrderedTable, OverCapacity, PolicyKind, Replacer};

/// Evicts the page whose last access is oldest.
///
/// Hits and loads both count as an access. The frame table is an
/// access-ordered [`OrderedTable`] whose [`OverCapacity`] trigger drops the
/// least recently used page as soon as a load pushes the table past capacity.
pub struct LruReplacer {
    /// Resident pages, least recently used first.
    frames: OrderedTable<PageId, OverCapacity>,

    capacity: FrameCapacity,
}

impl LruReplacer {
    /// Create an LRU replacer with an empty frame table.
    pub fn new(capacity: FrameCapacity) -> Self {
        let frames = capacity.get();
        Self {
            frames: OrderedTable::with_capacity(OrderPolicy::Access, OverCapacity(frames), frames),
            capacity,
        }
    }

    /// The least recently used resident page.
    pub fn least_recent(&self) -> Option<PageId> {
        self.frames.oldest().copied()
    }

    /// The most recently used resident page.
    pub fn most_recent(&self) -> Option<PageId> {
        self.frames.newest().copied()
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page_id: PageId) -> bool {
        self.frames.contains(&page_id)
    }

    fn reference(&mut self, page_id: PageId) -> Access {
        // A hit promotes the page to most recently used.
        if self.frames.touch(&page_id) {
            return Access::Hit;
        }

        let evicted = self.frames.insert(page_id);
        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        self.frames.iter().copied().collect()
    }
}
