//! Page replacement policies (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts the page loaded earliest
//! - [`LruReplacer`] - evicts the least recently used page
//! - [`MruReplacer`] - evicts the most recently used page
//! - [`OptimalReplacer`] - Belady's offline algorithm (full lookahead)
//!
//! All four sit behind the [`Replacer`] trait so a simulation can swap them
//! freely. Building blocks:
//! - [`OrderedTable`] - ordered hash set with a pluggable [`EvictionTrigger`]
//! - [`RecencyList`] - arena-backed doubly linked list addressed by [`FrameId`](crate::FrameId)

mod fifo;
mod lru;
mod mru;
mod optimal;
mod ordered;
mod recency_list;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use mru::MruReplacer;
pub use optimal::OptimalReplacer;
pub use ordered::{EvictionTrigger, OrderPolicy, OrderedTable, OverCapacity};
pub use recency_list::RecencyList;

use std::fmt;
use std::str::FromStr;

use crate::common::{FrameCapacity, PageId};

/// Result of presenting one page reference to a replacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident.
    Hit,
    /// The page was not resident and has now been loaded.
    ///
    /// `evicted` names the page that gave up its frame, if the table was full.
    Fault { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// The victim of this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Hit => None,
            Access::Fault { evicted } => *evicted,
        }
    }
}

/// A page replacement policy operating on its own frame table.
///
/// Implementations keep at most [`capacity`](Replacer::capacity) pages
/// resident and hold each page at most once.
pub trait Replacer: Send {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Maximum number of resident pages.
    fn capacity(&self) -> FrameCapacity;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `page_id` is resident. Never changes replacement order.
    fn contains(&self, page_id: PageId) -> bool;

    /// Resolve one reference: report a hit, or load the page (evicting a
    /// victim if every frame is taken).
    fn reference(&mut self, page_id: PageId) -> Access;

    /// Resident pages in the policy's own order, next-to-keep last.
    ///
    /// FIFO lists by load order, LRU and MRU from least to most recently
    /// used, Optimal by load order.
    fn resident(&self) -> Vec<PageId>;
}

/// The available policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Mru,
    Optimal,
}

impl PolicyKind {
    /// Every policy, in reporting order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Optimal,
    ];

    /// Whether the policy needs the whole trace before it can start.
    #[inline]
    pub fn needs_lookahead(self) -> bool {
        matches!(self, PolicyKind::Optimal)
    }

    /// Construct a fresh replacer with an empty frame table.
    ///
    /// `trace` is only read by [`PolicyKind::Optimal`]; the others ignore it.
    pub fn build(self, capacity: FrameCapacity, trace: &[PageId]) -> Box<dyn Replacer> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(capacity)),
            PolicyKind::Lru => Box::new(LruReplacer::new(capacity)),
            PolicyKind::Mru => Box::new(MruReplacer::new(capacity)),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new(capacity, trace.to_vec())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Mru => "MRU",
            PolicyKind::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown replacement policy {0:?} (expected fifo, lru, mru or optimal)")]
pub struct UnknownPolicy(pub String);

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "mru" => Ok(PolicyKind::Mru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
