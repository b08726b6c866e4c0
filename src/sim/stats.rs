//! Simulation statistics.

use std::fmt;

use crate::common::FrameCapacity;
use crate::replacer::{Access, PolicyKind};

/// Counters tracked over one simulation run.
///
/// Each run owns its counters, so plain integers suffice.
///
/// # Example
/// ```
/// use pagesim::SimStats;
/// use pagesim::replacer::Access;
///
/// let mut stats = SimStats::new();
/// stats.record(Access::Fault { evicted: None });
/// stats.record(Access::Hit);
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of references resolved.
    pub references: u64,

    /// Number of references that found their page resident.
    pub hits: u64,

    /// Number of references that had to load their page.
    pub faults: u64,

    /// Number of faults that displaced a resident page.
    pub evictions: u64,
}

impl SimStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved reference.
    pub fn record(&mut self, access: Access) {
        self.references += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

/// Outcome of running one policy over one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    pub capacity: FrameCapacity,
    pub stats: SimStats,
}

impl PolicyReport {
    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Total page faults: {}", self.policy, self.stats.faults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    #[test]
    fn test_stats_new() {
        let stats = SimStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimStats::new();

        for _ in 0..7 {
            stats.record(Access::Hit);
        }
        stats.record(Access::Fault { evicted: None });
        stats.record(Access::Fault { evicted: None });
        stats.record(Access::Fault {
            evicted: Some(PageId(1)),
        });

        assert_eq!(stats.references, 10);
        assert_eq!(stats.faults, 3);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SimStats::new();
        stats.record(Access::Hit);

        stats.reset();

        assert_eq!(stats, SimStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimStats {
            references: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }

    #[test]
    fn test_report_display() {
        let report = PolicyReport {
            policy: PolicyKind::Lru,
            capacity: FrameCapacity::new(2).unwrap(),
            stats: SimStats {
                references: 5,
                hits: 1,
                faults: 4,
                evictions: 2,
            },
        };
        assert_eq!(report.faults(), 4);
        assert_eq!(format!("{}", report), "LRU - Total page faults: 4");
    }
}
