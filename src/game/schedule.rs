//! Cancellable timer for the computer's simulated thinking
//!
//! At most one move is scheduled at a time. Every schedule or cancel bumps a
//! generation counter; a [`TaskHandle`] from an older generation is stale and
//! must not be applied.

use std::time::{Duration, Instant};

/// Identifies one scheduled computer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledMove {
    handle: TaskHandle,
    started: Instant,
    due: Instant,
}

/// Holds the outstanding computer move, if any
#[derive(Debug, Default)]
pub struct MoveScheduler {
    generation: u64,
    pending: Option<ScheduledMove>,
}

impl MoveScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a move to fire `delay` after `now`, replacing any outstanding one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TaskHandle {
        self.generation += 1;
        let handle = TaskHandle {
            generation: self.generation,
        };
        self.pending = Some(ScheduledMove {
            handle,
            started: now,
            due: now + delay,
        });
        handle
    }

    /// Drop the outstanding move and invalidate every handle issued so far.
    /// Returns whether a move was outstanding.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.pending.take().is_some()
    }

    /// Remove and return the outstanding move once its delay has elapsed
    pub fn take_due(&mut self, now: Instant) -> Option<TaskHandle> {
        match self.pending {
            Some(task) if now >= task.due => {
                self.pending = None;
                Some(task.handle)
            }
            _ => None,
        }
    }

    /// Handle still belongs to the latest generation
    #[inline]
    pub fn is_current(&self, handle: TaskHandle) -> bool {
        handle.generation == self.generation
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the outstanding move fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|task| task.due.saturating_duration_since(now))
    }

    /// Time since the outstanding move was scheduled
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|task| now.saturating_duration_since(task.started))
    }
}
