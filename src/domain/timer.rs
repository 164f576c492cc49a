//! Tick-driven scheduling primitives
//!
//! The host loop never sleeps on behalf of an animator. Instead it measures the time that passed
//! between two ticks and hands it to each mounted task, which converts it into a number of whole
//! periods. This keeps every animator deterministic under test: feed it durations, observe events.

use std::time::Duration;

use serde::Serialize;

/// A task driven by the host's tick stream.
pub trait Scheduled {
    type Event;

    /// Advance the task by `elapsed` and report what happened, in order.
    fn tick(&mut self, elapsed: Duration) -> Vec<Self::Event>;
}

/// Fixed-period repeating timer.
///
/// Time that does not add up to a full period is carried over to the next call, so a sequence
/// of small ticks fires exactly as often as one large tick of the same total length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    period: Duration,
    carried: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            carried: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns how many periods completed during `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }
        let total = self.carried.saturating_add(elapsed).as_nanos();
        let period = self.period.as_nanos();
        // The remainder is below one period, so it always fits
        self.carried = Duration::from_nanos(u64::try_from(total % period).unwrap_or(u64::MAX));
        u64::try_from(total / period).unwrap_or(u64::MAX)
    }

    /// Time until the next fire.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.carried)
    }
}

/// Owning handle for a mounted task.
///
/// Mounting installs a fresh task; unmounting drops it, which is the teardown of its timer.
/// Ticking an empty slot is a no-op, so a torn-down task can never fire late.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSlot<T> {
    task: Option<T>,
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { task: None }
    }
}

impl<T: Scheduled> TaskSlot<T> {
    pub fn mounted(task: T) -> Self {
        Self { task: Some(task) }
    }

    pub fn mount(&mut self, task: T) {
        self.task = Some(task);
    }

    /// Returns `true` when a task was running.
    pub fn unmount(&mut self) -> bool {
        self.task.take().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.task.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.task.as_ref()
    }

    pub fn tick(&mut self, elapsed: Duration) -> Vec<T::Event> {
        match self.task.as_mut() {
            Some(task) => task.tick(elapsed),
            None => vec![],
        }
    }
}
