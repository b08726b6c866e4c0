//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page of virtual memory in a reference trace.
///
/// Carries no meaning beyond identity. Traces conventionally hold one
/// integer per line, so the identifier is a signed 64-bit value and any
/// integer a trace can spell is a valid page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Build a trace from plain integers.
///
/// Mostly a convenience for tests and benchmarks.
pub fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}
