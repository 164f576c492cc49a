//! Sidebar component
//!
//! Operator status and the four section buttons. Button rows come from [`ScreenLayout::nav`] so
//! a click lands on the row it was drawn in.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{content::OPERATOR_STATUS, section::Section},
    presentation::{
        layout::ScreenLayout,
        theme::{blink_on, Theme},
    },
};

#[derive(Debug, Clone, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn nav_label(section: Section) -> String {
        format!("[F{}] {section}", section.function_key())
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, layout: &ScreenLayout) {
        let block = Block::bordered().border_style(theme.dim).style(theme.base);
        let inner = block.inner(layout.sidebar);
        frame.render_widget(block, layout.sidebar);

        let mut status: Vec<Line> = OPERATOR_STATUS
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label}: "), theme.dim),
                    Span::styled(*value, theme.base),
                ])
            })
            .collect();
        let dot = if blink_on(state.system.uptime) { "●" } else { " " };
        status.push(Line::from(vec![
            Span::styled(dot, theme.accent),
            Span::styled(" SYSTEM ONLINE", theme.accent),
        ]));
        frame.render_widget(Paragraph::new(status), inner);

        for section in Section::iter() {
            let row = layout.nav[section.index()];
            let style = if section == state.active_section() {
                theme.accent.add_modifier(Modifier::REVERSED)
            } else {
                theme.base
            };
            frame.render_widget(Paragraph::new(Self::nav_label(section)).style(style), row);
        }

        if inner.height > 0 {
            let footer = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            let last_nav = layout.nav[3];
            if footer.y > last_nav.y {
                frame.render_widget(
                    Paragraph::new("NIST COMPLIANT").style(theme.compliance).centered(),
                    footer,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::components::test_support::*;

    #[test]
    fn test_nav_labels() {
        assert_eq!(SidebarComponent::nav_label(Section::Profile), "[F1] PROFILE");
        assert_eq!(SidebarComponent::nav_label(Section::Diagnostics), "[F4] SYS_DIAG");
    }

    #[test]
    fn test_active_item_is_highlighted() -> color_eyre::Result<()> {
        let mut state = booted_state()?;
        state.nav.active_section = Section::Audits;
        let layout = ScreenLayout::for_state(&state);
        let theme = Theme::new(&state.config.styles, false);

        let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(100, 30))?;
        terminal.draw(|frame| SidebarComponent::new().view(&state, &theme, frame, &layout))?;
        let buffer = terminal.backend().buffer();

        let audits = layout.nav[Section::Audits.index()];
        let profile = layout.nav[Section::Profile.index()];
        assert!(buffer[(audits.x, audits.y)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(profile.x, profile.y)].modifier.contains(Modifier::REVERSED));
        Ok(())
    }

    #[test]
    fn test_status_and_footer() -> color_eyre::Result<()> {
        let state = booted_state()?;
        let layout = ScreenLayout::for_state(&state);
        let theme = Theme::new(&state.config.styles, false);
        let lines = render_lines(100, 30, |frame| {
            SidebarComponent::new().view(&state, &theme, frame, &layout)
        })?;

        assert!(contains(&lines, "OPERATOR: TheSTIGMan"));
        assert!(contains(&lines, "CLEARANCE: VERIFIED"));
        assert!(contains(&lines, "● SYSTEM ONLINE"));
        assert!(contains(&lines, "[F3] AUDITS"));
        assert!(contains(&lines, "NIST COMPLIANT"));
        Ok(())
    }
}
