//! Header component
//!
//! Terminal label (CRT mode only) and the display-mode toggle.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::content::TERMINAL_LABEL,
    presentation::{layout::ScreenLayout, theme::Theme},
};

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn toggle_label(clean_mode: bool) -> &'static str {
        if clean_mode {
            "⬤ CRT MODE"
        } else {
            "◯ CLEAN VIEW"
        }
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, layout: &ScreenLayout) {
        let mut block = Block::bordered().border_style(theme.dim).style(theme.base);
        if !theme.clean {
            block = block.title(Span::styled(format!(" {TERMINAL_LABEL} "), theme.dim));
        }
        let inner = block.inner(layout.header);
        frame.render_widget(block, layout.header);

        let title = Line::from(vec![
            Span::styled("STIGMAN", theme.accent),
            Span::styled(" // SECURE TERMINAL", theme.dim),
        ]);
        frame.render_widget(Paragraph::new(title), inner);

        let toggle = Paragraph::new(Self::toggle_label(state.ui.clean_mode))
            .style(theme.accent)
            .right_aligned();
        frame.render_widget(toggle, layout.toggle);
    }
}
