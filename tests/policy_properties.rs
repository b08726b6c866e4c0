//! Cross-policy properties checked over random traces.

use std::collections::{HashMap, HashSet};

use pagesim::replacer::{
    Access, FifoReplacer, LruReplacer, MruReplacer, PolicyKind, Replacer,
};
use pagesim::sim::{simulate, EventLog, NullSink};
use pagesim::{FrameCapacity, PageId};
use proptest::prelude::*;

fn trace_strategy() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0i64..8).prop_map(PageId), 0..60)
}

fn cap(frames: usize) -> FrameCapacity {
    FrameCapacity::new(frames as i64).unwrap()
}

fn faults(kind: PolicyKind, frames: usize, trace: &[PageId]) -> u64 {
    simulate(kind, cap(frames), trace, NullSink).faults()
}

proptest! {
    /// Every first touch of a page faults.
    #[test]
    fn prop_cold_start_lower_bound(trace in trace_strategy(), frames in 1usize..6) {
        let distinct = trace.iter().collect::<HashSet<_>>().len() as u64;
        for kind in PolicyKind::ALL {
            prop_assert!(faults(kind, frames, &trace) >= distinct);
        }
    }

    /// Optimal never loses to an online policy.
    #[test]
    fn prop_optimal_is_lower_bound(trace in trace_strategy(), frames in 1usize..6) {
        let optimal = faults(PolicyKind::Optimal, frames, &trace);
        for kind in [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Mru] {
            prop_assert!(optimal <= faults(kind, frames, &trace), "{} beat Optimal", kind);
        }
    }

    /// Same inputs, same faults and same victims.
    #[test]
    fn prop_deterministic(trace in trace_strategy(), frames in 1usize..6) {
        for kind in PolicyKind::ALL {
            let mut first = EventLog::new();
            let mut second = EventLog::new();
            let a = simulate(kind, cap(frames), &trace, &mut first);
            let b = simulate(kind, cap(frames), &trace, &mut second);

            prop_assert_eq!(a, b);
            prop_assert_eq!(first.events(), second.events());
        }
    }

    /// More frames never cost more faults for the stack policies.
    ///
    /// FIFO is left out: it can show Belady's anomaly.
    #[test]
    fn prop_capacity_monotonic(trace in trace_strategy(), frames in 1usize..6) {
        for kind in [PolicyKind::Lru, PolicyKind::Mru, PolicyKind::Optimal] {
            prop_assert!(
                faults(kind, frames + 1, &trace) <= faults(kind, frames, &trace),
                "{} faulted more with {} frames",
                kind,
                frames + 1
            );
        }
    }

    /// Tables stay within capacity and never hold a page twice.
    #[test]
    fn prop_frame_table_bounded(trace in trace_strategy(), frames in 1usize..6) {
        for kind in PolicyKind::ALL {
            let mut replacer = kind.build(cap(frames), &trace);
            for &page_id in &trace {
                let access = replacer.reference(page_id);
                let resident = replacer.resident();

                prop_assert!(resident.len() <= frames);
                prop_assert_eq!(resident.len(), replacer.len());
                prop_assert_eq!(resident.iter().collect::<HashSet<_>>().len(), resident.len());
                prop_assert!(replacer.contains(page_id));
                if let Some(victim) = access.evicted() {
                    prop_assert!(!replacer.contains(victim));
                }
            }
        }
    }

    /// The FIFO victim has the smallest load index among resident pages.
    #[test]
    fn prop_fifo_evicts_earliest_load(trace in trace_strategy(), frames in 1usize..6) {
        let mut replacer = FifoReplacer::new(cap(frames));
        let mut loaded_at: HashMap<PageId, usize> = HashMap::new();

        for (pos, &page_id) in trace.iter().enumerate() {
            let before = replacer.resident();
            let access = replacer.reference(page_id);

            if let Some(victim) = access.evicted() {
                let earliest = before.iter().min_by_key(|pid| loaded_at[*pid]).copied();
                prop_assert_eq!(Some(victim), earliest);
            }
            if access.is_fault() {
                loaded_at.insert(page_id, pos);
            }
        }
    }

    /// After a hit the page is most recent; a victim was least recent.
    #[test]
    fn prop_lru_promotion(trace in trace_strategy(), frames in 1usize..6) {
        let mut replacer = LruReplacer::new(cap(frames));

        for &page_id in &trace {
            let least_recent = replacer.least_recent();
            let access = replacer.reference(page_id);

            prop_assert_eq!(replacer.most_recent(), Some(page_id));
            if let Some(victim) = access.evicted() {
                prop_assert_eq!(Some(victim), least_recent);
            }
        }
    }

    /// A hit on the most recent page leaves MRU order untouched; any other
    /// hit moves the page to the most recent end.
    #[test]
    fn prop_mru_promotion(trace in trace_strategy(), frames in 1usize..6) {
        let mut replacer = MruReplacer::new(cap(frames));

        for &page_id in &trace {
            let before = replacer.resident();
            let was_most_recent = replacer.most_recent() == Some(page_id);
            let access = replacer.reference(page_id);

            if access == Access::Hit {
                let after = replacer.resident();
                if was_most_recent {
                    prop_assert_eq!(after, before);
                } else {
                    let mut expected: Vec<PageId> =
                        before.into_iter().filter(|&pid| pid != page_id).collect();
                    expected.push(page_id);
                    prop_assert_eq!(after, expected);
                }
            } else if let Some(victim) = access.evicted() {
                prop_assert_eq!(before.last().copied(), Some(victim));
            }
            prop_assert_eq!(replacer.most_recent(), Some(page_id));
        }
    }
}
