//! Ambient auditor status line
//!
//! A hover elsewhere in the dashboard sets a transient message that wins over everything else.
//! While no transient message is present, an idle rotator replaces the idle text every
//! [`IDLE_ROTATION_PERIOD`] with an independent uniform draw from a fixed set. Draws may repeat.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::domain::timer::{Interval, Scheduled, TaskSlot};

pub const IDLE_ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Source of idle message indices.
pub trait IdlePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IdlePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fires when at least one rotation period has passed. A tick spanning several periods
/// still fires once, since only the last draw would be visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdleRotator {
    interval: Interval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotate;

impl IdleRotator {
    pub fn new() -> Self {
        Self {
            interval: Interval::new(IDLE_ROTATION_PERIOD),
        }
    }
}

impl Default for IdleRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduled for IdleRotator {
    type Event = Rotate;

    fn tick(&mut self, elapsed: Duration) -> Vec<Rotate> {
        if self.interval.advance(elapsed) == 0 {
            vec![]
        } else {
            vec![Rotate]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientStatus {
    messages: &'static [&'static str],
    idle_text: &'static str,
    transient: Option<String>,
    started: bool,
    rotator: TaskSlot<IdleRotator>,
}

impl AmbientStatus {
    /// The first message is shown until the first rotation.
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self {
            messages,
            idle_text: messages.first().copied().unwrap_or_default(),
            transient: None,
            started: false,
            rotator: TaskSlot::default(),
        }
    }

    /// Begins idle rotation. Called once the dashboard is up.
    pub fn start(&mut self) {
        self.started = true;
        self.sync_rotator();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn transient(&self) -> Option<&str> {
        self.transient.as_deref()
    }

    pub fn idle_text(&self) -> &'static str {
        self.idle_text
    }

    /// What the status line shows right now.
    pub fn displayed(&self) -> &str {
        self.transient.as_deref().unwrap_or(self.idle_text)
    }

    pub fn is_rotating(&self) -> bool {
        self.rotator.is_mounted()
    }

    pub fn set_transient(&mut self, message: impl Into<String>) {
        self.transient = Some(message.into());
        self.sync_rotator();
    }

    pub fn clear_transient(&mut self) {
        self.transient = None;
        self.sync_rotator();
    }

    /// Advances the rotator and returns the number of draws made, at most one per tick.
    pub fn tick(&mut self, elapsed: Duration, picker: &mut dyn IdlePicker) -> usize {
        let rotated = !self.rotator.tick(elapsed).is_empty();
        if !rotated || self.messages.is_empty() {
            return 0;
        }
        let index = picker.pick(self.messages.len()).min(self.messages.len() - 1);
        self.idle_text = self.messages[index];
        1
    }

    /// The rotator only runs while started and not overridden. It restarts with a full period
    /// whenever the override goes away.
    fn sync_rotator(&mut self) {
        let should_run = self.started && self.transient.is_none();
        if should_run && !self.rotator.is_mounted() {
            self.rotator.mount(IdleRotator::new());
        } else if !should_run {
            self.rotator.unmount();
        }
    }
}
