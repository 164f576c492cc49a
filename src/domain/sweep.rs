use std::time::Duration;

use serde::Serialize;

use crate::domain::timer::{Interval, Scheduled};

pub const SWEEP_STEP_DEGREES: f64 = 2.0;
pub const SWEEP_PERIOD: Duration = Duration::from_millis(50);

/// Rotating radar beam. Always starts at 0 degrees when mounted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSweep {
    angle: f64,
    interval: Interval,
}

impl RadarSweep {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            interval: Interval::new(SWEEP_PERIOD),
        }
    }

    /// Current beam angle in [0, 360).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Moves the beam one step forward, wrapping at 360.
    pub fn step(&mut self) -> f64 {
        self.angle = next_angle(self.angle);
        self.angle
    }
}

impl Default for RadarSweep {
    fn default() -> Self {
        Self::new()
    }
}

/// `(angle + step) mod 360`
pub fn next_angle(angle: f64) -> f64 {
    advance_angle(angle, 1)
}

/// Angle after `steps` steps. Whole turns are dropped before the float math.
pub fn advance_angle(angle: f64, steps: u64) -> f64 {
    let steps = steps % STEPS_PER_TURN;
    (angle + steps as f64 * SWEEP_STEP_DEGREES).rem_euclid(360.0)
}

const STEPS_PER_TURN: u64 = 180;

impl Scheduled for RadarSweep {
    /// Beam angle at the end of the tick, reported only when the beam moved.
    type Event = f64;

    fn tick(&mut self, elapsed: Duration) -> Vec<f64> {
        let steps = self.interval.advance(elapsed);
        if steps == 0 {
            return vec![];
        }
        self.angle = advance_angle(self.angle, steps);
        vec![self.angle]
    }
}
