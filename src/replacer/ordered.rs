//! Ordered hash table with a pluggable eviction trigger.
//!
//! [`OrderedTable`] keeps keys in a linked hash map so membership, insertion,
//! move-to-newest and remove-oldest are all O(1). Whether a hit moves the
//! key is chosen by [`OrderPolicy`]; when the oldest key is dropped is
//! decided by an [`EvictionTrigger`] supplied at construction.
//!
//! ```text
//!  oldest                                   newest
//!   ┌────┐   ┌────┐   ┌────┐   ┌────┐   ┌────┐
//!   │ k0 │◄─►│ k1 │◄─►│ k2 │◄─►│ k3 │◄─►│ k4 │   ◄── insert / refresh
//!   └────┘   └────┘   └────┘   └────┘   └────┘
//!     ▲
//!     └── evicted when trigger.should_evict(len)
//! ```

use std::hash::Hash;

use linked_hash_map::LinkedHashMap;

/// Decides, after an insertion, whether the oldest entry must go.
///
/// Any `Fn(usize) -> bool` closure is a trigger, receiving the table length
/// after the insertion.
pub trait EvictionTrigger {
    fn should_evict(&self, len: usize) -> bool;
}

/// Evict once the table holds more entries than the wrapped capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverCapacity(pub usize);

impl EvictionTrigger for OverCapacity {
    #[inline]
    fn should_evict(&self, len: usize) -> bool {
        len > self.0
    }
}

impl<F> EvictionTrigger for F
where
    F: Fn(usize) -> bool,
{
    #[inline]
    fn should_evict(&self, len: usize) -> bool {
        self(len)
    }
}

/// How a hit affects ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Order is fixed at insertion; hits leave it alone.
    Insertion,
    /// Every access moves the key to the newest end.
    Access,
}

/// An ordered set of keys, oldest first.
///
/// # Example
/// ```
/// use pagesim::replacer::{OrderPolicy, OrderedTable, OverCapacity};
///
/// let mut table = OrderedTable::new(OrderPolicy::Access, OverCapacity(2));
/// table.insert(1);
/// table.insert(2);
/// table.touch(&1);
/// assert_eq!(table.insert(3), Some(2));
/// assert_eq!(table.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct OrderedTable<K, T = OverCapacity> {
    map: LinkedHashMap<K, ()>,
    order: OrderPolicy,
    trigger: T,
}

impl<K, T> OrderedTable<K, T>
where
    K: Hash + Eq,
    T: EvictionTrigger,
{
    pub fn new(order: OrderPolicy, trigger: T) -> Self {
        Self {
            map: LinkedHashMap::new(),
            order,
            trigger,
        }
    }

    /// Pre-size the table for `capacity` keys plus one in flight.
    pub fn with_capacity(order: OrderPolicy, trigger: T, capacity: usize) -> Self {
        Self {
            map: LinkedHashMap::with_capacity(capacity + 1),
            order,
            trigger,
        }
    }

    /// Membership test that never reorders.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Record an access to `key`.
    ///
    /// Returns whether the key was present. Under [`OrderPolicy::Access`] a
    /// present key becomes the newest.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.order {
            OrderPolicy::Insertion => self.map.contains_key(key),
            OrderPolicy::Access => self.map.get_refresh(key).is_some(),
        }
    }

    /// Insert `key` as the newest entry, then consult the trigger once.
    ///
    /// Returns the evicted oldest key, if the trigger fired. A key that is
    /// already present is only touched.
    pub fn insert(&mut self, key: K) -> Option<K> {
        if self.touch(&key) {
            return None;
        }

        self.map.insert(key, ());

        if self.trigger.should_evict(self.map.len()) {
            self.pop_oldest()
        } else {
            None
        }
    }

    /// Remove and return the oldest key.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.map.pop_front().map(|(key, ())| key)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn oldest(&self) -> Option<&K> {
        self.map.front().map(|(key, _)| key)
    }

    pub fn newest(&self) -> Option<&K> {
        self.map.back().map(|(key, _)| key)
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn order(&self) -> OrderPolicy {
        self.order
    }
}
