//! Arena-backed doubly linked recency list.
//!
//! Nodes live in a `Vec` of slots and link to each other by [`FrameId`]
//! rather than by pointer, so a relink can never dangle. A freed slot goes on
//! a free list and is reused by the next push.
//!
//! ```text
//!   head (least recent)                       tail (most recent)
//!   ┌──────────┐     ┌──────────┐     ┌──────────┐
//!   │ Frame(2) │ ◄─► │ Frame(0) │ ◄─► │ Frame(1) │
//!   │ Page(9)  │     │ Page(4)  │     │ Page(7)  │
//!   └──────────┘     └──────────┘     └──────────┘
//! ```

use crate::common::{FrameId, PageId};

struct Node {
    page_id: PageId,
    prev: Option<FrameId>,
    next: Option<FrameId>,
}

/// Doubly linked list of pages ordered from least to most recently used.
///
/// # Example
/// ```
/// use pagesim::replacer::RecencyList;
/// use pagesim::PageId;
///
/// let mut list = RecencyList::new();
/// let a = list.push_back(PageId(1));
/// list.push_back(PageId(2));
///
/// list.promote(a);
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![PageId(2), PageId(1)]);
/// assert_eq!(list.pop_back(), Some(PageId(1)));
/// ```
#[derive(Default)]
pub struct RecencyList {
    /// `None` marks a slot whose node has been destroyed.
    slots: Vec<Option<Node>>,

    /// Destroyed slots available for reuse.
    free: Vec<FrameId>,

    head: Option<FrameId>,
    tail: Option<FrameId>,
    len: usize,
}

impl RecencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Least recently used node.
    #[inline]
    pub fn head(&self) -> Option<FrameId> {
        self.head
    }

    /// Most recently used node.
    #[inline]
    pub fn tail(&self) -> Option<FrameId> {
        self.tail
    }

    /// Page held by a linked node.
    pub fn page_id(&self, id: FrameId) -> Option<PageId> {
        self.slots.get(id.0)?.as_ref().map(|node| node.page_id)
    }

    /// Link a new node at the tail and return its slot.
    pub fn push_back(&mut self, page_id: PageId) -> FrameId {
        let node = Node {
            page_id,
            prev: self.tail,
            next: None,
        };

        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                FrameId::new(self.slots.len() - 1)
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        id
    }

    /// Move a linked node to the tail.
    ///
    /// # Panics
    /// Panics if `id` is not linked into this list.
    pub fn promote(&mut self, id: FrameId) {
        // Already most recent: nothing to relink.
        if self.tail == Some(id) {
            return;
        }

        let (prev, next) = {
            let node = self.node_mut(id);
            (node.prev, node.next)
        };

        // Not the tail, so a successor exists.
        let Some(next) = next else {
            unreachable!("{} has no successor but is not the tail", id);
        };

        match prev {
            // Interior: splice the neighbours together.
            Some(prev) => {
                self.node_mut(prev).next = Some(next);
                self.node_mut(next).prev = Some(prev);
            }
            // Head: advance head past the node.
            None => {
                self.head = Some(next);
                self.node_mut(next).prev = None;
            }
        }

        let old_tail = self.tail;
        {
            let node = self.node_mut(id);
            node.prev = old_tail;
            node.next = None;
        }
        if let Some(old_tail) = old_tail {
            self.node_mut(old_tail).next = Some(id);
        }
        self.tail = Some(id);
    }

    /// Unlink and destroy the tail node, returning its page.
    pub fn pop_back(&mut self) -> Option<PageId> {
        let tail = self.tail?;
        let node = self.slots[tail.0].take()?;

        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.tail = node.prev;
        self.free.push(tail);
        self.len -= 1;

        Some(node.page_id)
    }

    /// Pages from head (least recent) to tail (most recent).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn node(&self, id: FrameId) -> &Node {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("{} is not linked", id),
        }
    }

    fn node_mut(&mut self, id: FrameId) -> &mut Node {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("{} is not linked", id),
        }
    }

    /// Walk the list both ways and check every link agrees.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let forward: Vec<FrameId> = {
            let mut ids = vec![];
            let mut cursor = self.head;
            let mut prev = None;
            while let Some(id) = cursor {
                assert_eq!(self.node(id).prev, prev, "back link of {}", id);
                ids.push(id);
                prev = Some(id);
                cursor = self.node(id).next;
            }
            assert_eq!(prev, self.tail, "tail mismatch");
            ids
        };
        assert_eq!(forward.len(), self.len, "length mismatch");

        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, self.len, "destroyed slot still counted");
        assert_eq!(live + self.free.len(), self.slots.len(), "slot leaked");
    }
}

/// Iterator over a [`RecencyList`], least recent first.
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<FrameId>,
}

impl Iterator for Iter<'_> {
    type Item = PageId;

    fn next(&mut self) -> Option<PageId> {
        let id = self.cursor?;
        let node = self.list.node(id);
        self.cursor = node.next;
        Some(node.page_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(ids: &[i64]) -> (RecencyList, Vec<FrameId>) {
        let mut list = RecencyList::new();
        let frames = ids.iter().map(|&id| list.push_back(PageId(id))).collect();
        (list, frames)
    }

    fn pages(list: &RecencyList) -> Vec<i64> {
        list.iter().map(|pid| pid.0).collect()
    }

    #[test]
    fn test_push_back_links_in_order() {
        let (list, frames) = list_of(&[1, 2, 3]);
        list.assert_consistent();

        assert_eq!(pages(&list), vec![1, 2, 3]);
        assert_eq!(list.head(), Some(frames[0]));
        assert_eq!(list.tail(), Some(frames[2]));
        assert_eq!(list.page_id(frames[1]), Some(PageId(2)));
    }

    #[test]
    fn test_promote_interior() {
        let (mut list, frames) = list_of(&[1, 2, 3]);

        list.promote(frames[1]);
        list.assert_consistent();
        assert_eq!(pages(&list), vec![1, 3, 2]);
        assert_eq!(list.tail(), Some(frames[1]));
    }

    #[test]
    fn test_promote_head() {
        let (mut list, frames) = list_of(&[1, 2, 3]);

        list.promote(frames[0]);
        list.assert_consistent();
        assert_eq!(pages(&list), vec![2, 3, 1]);
        assert_eq!(list.head(), Some(frames[1]));
    }

    #[test]
    fn test_promote_tail_is_noop() {
        let (mut list, frames) = list_of(&[1, 2, 3]);

        list.promote(frames[2]);
        list.assert_consistent();
        assert_eq!(pages(&list), vec![1, 2, 3]);
        assert_eq!(list.head(), Some(frames[0]));
        assert_eq!(list.tail(), Some(frames[2]));
    }

    #[test]
    fn test_promote_single_node() {
        let (mut list, frames) = list_of(&[1]);

        list.promote(frames[0]);
        list.assert_consistent();
        assert_eq!(list.head(), list.tail());
    }

    #[test]
    fn test_promote_with_two_nodes() {
        let (mut list, frames) = list_of(&[1, 2]);

        list.promote(frames[0]);
        list.assert_consistent();
        assert_eq!(pages(&list), vec![2, 1]);

        list.promote(frames[1]);
        list.assert_consistent();
        assert_eq!(pages(&list), vec![1, 2]);
    }

    #[test]
    fn test_pop_back_to_empty() {
        let (mut list, _) = list_of(&[1, 2]);

        assert_eq!(list.pop_back(), Some(PageId(2)));
        list.assert_consistent();
        assert_eq!(list.pop_back(), Some(PageId(1)));
        list.assert_consistent();

        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_destroyed_slot_is_reused() {
        let (mut list, frames) = list_of(&[1, 2]);

        list.pop_back();
        assert_eq!(list.page_id(frames[1]), None);

        let reused = list.push_back(PageId(5));
        list.assert_consistent();
        assert_eq!(reused, frames[1]);
        assert_eq!(pages(&list), vec![1, 5]);
    }

    #[test]
    #[should_panic(expected = "is not linked")]
    fn test_promote_unlinked_panics() {
        let (mut list, frames) = list_of(&[1, 2]);
        list.pop_back();
        list.promote(frames[1]);
    }
}
