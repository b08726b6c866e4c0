//! Frame identifier type.

use std::fmt;

/// Identifies a node slot in a [`RecencyList`](crate::replacer::RecencyList).
///
/// Each resident page occupies exactly one frame, so the slot index doubles
/// as the frame the page lives in. Using `usize` because:
/// 1. Slots are stored in a `Vec`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
