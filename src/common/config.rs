//! Configuration for a simulation run.

use std::fmt;
use std::num::NonZeroUsize;

use crate::common::{Error, Result};
use crate::replacer::PolicyKind;

/// Frame capacity used when the caller does not pick one.
pub const DEFAULT_FRAME_CAPACITY: usize = 3;

/// Trace file read when the caller does not name one.
pub const DEFAULT_TRACE_PATH: &str = "reference_string.txt";

/// Number of physical frames available to a simulation.
///
/// Always at least one. Constructing from a raw integer is the only place
/// [`Error::InvalidCapacity`] can originate, so every replacer can assume a
/// usable table.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let cap = FrameCapacity::new(4).unwrap();
/// assert_eq!(cap.get(), 4);
/// assert!(FrameCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCapacity(NonZeroUsize);

impl FrameCapacity {
    /// Validate a raw capacity.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames <= 0` or does not fit in `usize`
    pub fn new(frames: i64) -> Result<Self> {
        usize::try_from(frames)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(FrameCapacity)
            .ok_or(Error::InvalidCapacity(frames))
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for FrameCapacity {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_FRAME_CAPACITY) {
            Some(n) => FrameCapacity(n),
            None => FrameCapacity(NonZeroUsize::MIN),
        }
    }
}

impl From<NonZeroUsize> for FrameCapacity {
    fn from(n: NonZeroUsize) -> Self {
        FrameCapacity(n)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}

/// What to simulate: how many frames, and which policy.
///
/// `policy == None` means every policy in [`PolicyKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimConfig {
    pub frame_capacity: FrameCapacity,
    pub policy: Option<PolicyKind>,
}

impl SimConfig {
    /// Build a config from a raw capacity.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames <= 0`
    pub fn new(frames: i64, policy: Option<PolicyKind>) -> Result<Self> {
        Ok(Self {
            frame_capacity: FrameCapacity::new(frames)?,
            policy,
        })
    }

    /// Policies this config selects, in reporting order.
    pub fn policies(&self) -> Vec<PolicyKind> {
        match self.policy {
            Some(kind) => vec![kind],
            None => PolicyKind::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rejects_non_positive() {
        assert!(matches!(FrameCapacity::new(0), Err(Error::InvalidCapacity(0))));
        assert!(matches!(FrameCapacity::new(-5), Err(Error::InvalidCapacity(-5))));
        assert_eq!(FrameCapacity::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_capacity_default() {
        assert_eq!(FrameCapacity::default().get(), DEFAULT_FRAME_CAPACITY);
        assert_eq!(format!("{}", FrameCapacity::default()), "3 frames");
    }

    #[test]
    fn test_config_policies() {
        let all = SimConfig::new(2, None).unwrap();
        assert_eq!(all.policies(), PolicyKind::ALL.to_vec());

        let one = SimConfig::new(2, Some(PolicyKind::Mru)).unwrap();
        assert_eq!(one.policies(), vec![PolicyKind::Mru]);

        assert!(SimConfig::new(0, None).is_err());
    }
}
