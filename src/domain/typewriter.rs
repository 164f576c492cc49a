//! Boot log typewriter
//!
//! Reveals a script of [`BootLine`]s one character per [`CHAR_QUANTUM`]. A line may not start
//! before its own `delay` (measured from the start of the script) nor before the previous line
//! is committed. Once the script is exhausted the typewriter waits [`SETTLE_TIME`] and then
//! reports [`TypewriterEvent::Completed`] exactly once.

use std::time::Duration;

use serde::Serialize;

use crate::domain::{content::BootLine, timer::Scheduled};

pub const CHAR_QUANTUM: Duration = Duration::from_millis(25);
pub const SETTLE_TIME: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypewriterEvent {
    Char { line: usize, ch: char },
    LineCommitted { line: usize },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Phase {
    /// Waiting for the line's start time.
    Pending { line: usize },
    /// `chars` characters of the line are visible; `since_char` has passed since the last one.
    Typing {
        line: usize,
        chars: usize,
        since_char: Duration,
    },
    Settling { waited: Duration },
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typewriter {
    script: &'static [BootLine],
    completed: Vec<String>,
    typing: String,
    clock: Duration,
    phase: Phase,
}

impl Typewriter {
    pub fn new(script: &'static [BootLine]) -> Self {
        let phase = if script.is_empty() {
            Phase::Settling {
                waited: Duration::ZERO,
            }
        } else {
            Phase::Pending { line: 0 }
        };
        Self {
            script,
            completed: Vec::with_capacity(script.len()),
            typing: String::new(),
            clock: Duration::ZERO,
            phase,
        }
    }

    /// Lines that finished typing, in script order.
    pub fn completed_lines(&self) -> &[String] {
        &self.completed
    }

    /// The partially typed current line.
    pub fn typing(&self) -> &str {
        &self.typing
    }

    /// Index of the line being worked on; equals the script length once exhausted.
    pub fn line_index(&self) -> usize {
        match self.phase {
            Phase::Pending { line } | Phase::Typing { line, .. } => line,
            Phase::Settling { .. } | Phase::Done => self.script.len(),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.script.len()
    }

    /// Characters of the current line already visible.
    pub fn char_index(&self) -> usize {
        match self.phase {
            Phase::Typing { chars, .. } => chars,
            _ => 0,
        }
    }

    /// Fraction of lines committed, 0.0–1.0.
    pub fn progress(&self) -> f64 {
        if self.script.is_empty() {
            return 1.0;
        }
        self.line_index() as f64 / self.script.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Time since the sequence started.
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    fn commit(&mut self, line: usize) -> TypewriterEvent {
        self.completed.push(std::mem::take(&mut self.typing));
        let next = line + 1;
        self.phase = if next < self.script.len() {
            Phase::Pending { line: next }
        } else {
            Phase::Settling {
                waited: Duration::ZERO,
            }
        };
        TypewriterEvent::LineCommitted { line }
    }
}

impl Scheduled for Typewriter {
    type Event = TypewriterEvent;

    fn tick(&mut self, elapsed: Duration) -> Vec<TypewriterEvent> {
        let mut events = vec![];
        let mut budget = elapsed;

        loop {
            match self.phase {
                Phase::Pending { line } => {
                    let start_at = self.script[line].delay;
                    if self.clock < start_at {
                        let wait = start_at - self.clock;
                        if budget < wait {
                            self.clock += budget;
                            break;
                        }
                        self.clock += wait;
                        budget -= wait;
                    }
                    self.phase = Phase::Typing {
                        line,
                        chars: 0,
                        since_char: Duration::ZERO,
                    };
                }
                Phase::Typing {
                    line,
                    chars,
                    since_char,
                } => {
                    let Some(ch) = self.script[line].text.chars().nth(chars) else {
                        events.push(self.commit(line));
                        continue;
                    };
                    let need = CHAR_QUANTUM - since_char;
                    if budget < need {
                        self.clock += budget;
                        self.phase = Phase::Typing {
                            line,
                            chars,
                            since_char: since_char + budget,
                        };
                        break;
                    }
                    self.clock += need;
                    budget -= need;
                    self.typing.push(ch);
                    self.phase = Phase::Typing {
                        line,
                        chars: chars + 1,
                        since_char: Duration::ZERO,
                    };
                    events.push(TypewriterEvent::Char { line, ch });
                }
                Phase::Settling { waited } => {
                    let need = SETTLE_TIME - waited;
                    if budget < need {
                        self.clock += budget;
                        self.phase = Phase::Settling {
                            waited: waited + budget,
                        };
                        break;
                    }
                    self.clock += need;
                    self.phase = Phase::Done;
                    events.push(TypewriterEvent::Completed);
                    break;
                }
                Phase::Done => break,
            }
        }

        events
    }
}
