use std::time::Duration;

use ratatui::layout::Rect;
use serde::Serialize;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Terminal area the last frame was laid out for
    pub viewport: Rect,
    /// Sum of all tick durations; drives the cosmetic CRT curves
    pub uptime: Duration,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick(elapsed) => {
                self.uptime = self.uptime.saturating_add(elapsed);
                vec![]
            }

            SystemMsg::ReportError(message) => vec![Cmd::LogError { message }],
        }
    }
}
