//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameCapacity, PageId};
use crate::replacer::{Access, OrderPolicy, OrderedTable, OverCapacity, PolicyKind, Replacer};

/// Evicts pages in the order they were loaded.
///
/// Hits never change ordering, so the victim is always the resident page
/// with the smallest load index.
pub struct FifoReplacer {
    /// Resident pages, earliest load first.
    frames: OrderedTable<PageId, OverCapacity>,

    capacity: FrameCapacity,
}

impl FifoReplacer {
    /// Create a FIFO replacer with an empty frame table.
    pub fn new(capacity: FrameCapacity) -> Self {
        let frames = capacity.get();
        Self {
            frames: OrderedTable::with_capacity(
                OrderPolicy::Insertion,
                OverCapacity(frames),
                frames,
            ),
            capacity,
        }
    }

    /// The page that would be evicted on the next full-table fault.
    pub fn next_victim(&self) -> Option<PageId> {
        self.frames.oldest().copied()
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
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

#[cfg(test)]
mod tests {
    use super::*;

    fn fifo(frames: i64) -> FifoReplacer {
        FifoReplacer::new(FrameCapacity::new(frames).unwrap())
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = fifo(3);

        // Load pages 0, 1, 2 into free frames
        for id in 0..3 {
            assert_eq!(replacer.reference(PageId(id)), Access::Fault { evicted: None });
        }
        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.reference(PageId(3)).evicted(), Some(PageId(0)));
        assert_eq!(replacer.reference(PageId(4)).evicted(), Some(PageId(1)));
        assert_eq!(replacer.reference(PageId(5)).evicted(), Some(PageId(2)));
        assert_eq!(replacer.resident(), vec![PageId(3), PageId(4), PageId(5)]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = fifo(2);

        replacer.reference(PageId(0));
        replacer.reference(PageId(1));
        assert_eq!(replacer.reference(PageId(0)), Access::Hit); // should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(replacer.next_victim(), Some(PageId(0)));
        assert_eq!(replacer.reference(PageId(2)).evicted(), Some(PageId(0)));
        assert_eq!(replacer.reference(PageId(3)).evicted(), Some(PageId(1)));
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = fifo(1);

        assert_eq!(replacer.reference(PageId(7)), Access::Fault { evicted: None });
        assert_eq!(replacer.reference(PageId(7)), Access::Hit);
        assert_eq!(replacer.reference(PageId(8)).evicted(), Some(PageId(7)));
        assert!(!replacer.contains(PageId(7)));
        assert_eq!(replacer.len(), 1);
    }

    #[test]
    fn test_fifo_belady_anomaly() {
        // Adding a frame makes FIFO fault more on this trace.
        let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
        let faults = |frames| {
            let mut replacer = fifo(frames);
            trace
                .iter()
                .filter(|&&id| replacer.reference(PageId(id)).is_fault())
                .count()
        };

        assert_eq!(faults(3), 9);
        assert_eq!(faults(4), 10);
    }
}
