//! AI auditor status box
//!
//! Shows the ambient status line: a hover message when one is set, otherwise the rotating idle
//! message.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::theme::{blink_on, Theme},
};

#[derive(Debug, Clone, Default)]
pub struct AuditorComponent;

impl AuditorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let cursor = if blink_on(state.system.uptime) { "_" } else { " " };
        let line = Line::from(vec![
            Span::styled("AI_AUDITOR: ", theme.accent),
            Span::styled(state.ambient.displayed().to_string(), theme.base),
            Span::styled(cursor, theme.accent),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(Block::bordered().border_style(theme.dim)),
            area,
        );
    }
}
