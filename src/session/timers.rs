use std::collections::BTreeMap;

use crate::foundation::core::{Millis, SessionId};

/// Payload of a scheduled phase-boundary callback.
///
/// The owning session's id is captured at scheduling time; the orchestrator
/// compares it with the live session before applying anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimerEvent {
    pub session: SessionId,
    /// Index of the phase that ends at this boundary.
    pub phase_index: usize,
}

/// Opaque handle returned by [`TimerQueue::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// Host event-loop timers (`setTimeout`-style), single-threaded.
pub trait TimerQueue {
    /// Arrange for `event` to be delivered at host time `due`.
    fn schedule(&mut self, due: Millis, event: TimerEvent) -> TimerHandle;

    /// Forget a pending timer. Cancelling an unknown or fired handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return the earliest timer due at or before `now`.
    fn pop_due(&mut self, now: Millis) -> Option<(TimerHandle, TimerEvent)>;

    /// Number of timers still waiting to fire.
    fn pending(&self) -> usize;
}

/// Deterministic in-memory timer queue driven by an explicit clock.
///
/// Timers due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    next_handle: u64,
    queue: BTreeMap<(Millis, u64), TimerEvent>,
    // handle -> due, to find the queue key on cancel
    index: BTreeMap<u64, Millis>,
    cancelled: usize,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Due instant of the next pending timer, if any.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Handles cancelled over the queue's lifetime.
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl TimerQueue for VirtualTimers {
    fn schedule(&mut self, due: Millis, event: TimerEvent) -> TimerHandle {
        let h = self.next_handle;
        self.next_handle += 1;
        self.queue.insert((due, h), event);
        self.index.insert(h, due);
        TimerHandle(h)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(due) = self.index.remove(&handle.0) {
            self.queue.remove(&(due, handle.0));
            self.cancelled += 1;
        }
    }

    fn pop_due(&mut self, now: Millis) -> Option<(TimerHandle, TimerEvent)> {
        let (&(due, h), _) = self.queue.iter().next()?;
        if due > now {
            return None;
        }
        let event = self.queue.remove(&(due, h))?;
        self.index.remove(&h);
        Some((TimerHandle(h), event))
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/timers.rs"]
mod tests;
