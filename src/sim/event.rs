//! Access events and the sinks that receive them.
//!
//! A [`Simulation`](crate::sim::Simulation) reports every resolved reference
//! as an [`AccessEvent`]. What happens to the event is up to the
//! [`EventSink`]. Sinks cannot fail back into the simulation.

use crate::common::PageId;
use crate::replacer::{Access, PolicyKind};

/// One resolved page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessEvent {
    pub policy: PolicyKind,

    /// 0-based index of the reference in the trace.
    pub position: usize,

    pub page_id: PageId,
    pub access: Access,
}

impl AccessEvent {
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.access.is_fault()
    }

    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        self.access.evicted()
    }
}

/// Receives access events as a side channel.
pub trait EventSink {
    fn record(&mut self, event: &AccessEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &AccessEvent) {
        (**self).record(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn record(&mut self, _event: &AccessEvent) {}
}

/// Renders events through the `log` facade.
///
/// Hits go to `trace`, faults and evictions to `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &AccessEvent) {
        match event.access {
            Access::Hit => {
                log::trace!("[{}] Successful request of {}", event.policy, event.page_id);
            }
            Access::Fault { evicted: None } => {
                log::debug!("[{}] Page fault on {}, loaded into a free frame", event.policy, event.page_id);
            }
            Access::Fault {
                evicted: Some(victim),
            } => {
                log::debug!("[{}] Page fault on {}, evicted {}", event.policy, event.page_id, victim);
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<AccessEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<AccessEvent> {
        self.events
    }

    /// Victims in eviction order.
    pub fn evictions(&self) -> Vec<PageId> {
        self.events.iter().filter_map(AccessEvent::evicted).collect()
    }

    pub fn fault_count(&self) -> usize {
        self.events.iter().filter(|event| event.is_fault()).count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: &AccessEvent) {
        self.events.push(*event);
    }
}
