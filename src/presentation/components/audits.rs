//! Threat detection panel
//!
//! Radar scope, legend and a detail card for the highlighted contact.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::content::{find_contact, Contact, Severity, CONTACTS},
    presentation::{
        components::panel,
        layout::AuditsLayout,
        theme::{blink_on, Theme},
        widgets::RadarScope,
    },
};

const PLACEHOLDER: &str = "▶ Hover over radar contacts to view project details";

#[derive(Debug, Clone, Default)]
pub struct AuditsComponent;

impl AuditsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let scanning = if blink_on(state.system.uptime) {
            " SCANNING... "
        } else {
            "             "
        };
        let block = panel("THREAT DETECTION & MITIGATION", theme)
            .title(Line::styled(scanning, theme.accent).right_aligned());
        frame.render_widget(block, area);

        let layout = AuditsLayout::new(area);
        let highlighted = state.ui.highlighted_contact();
        frame.render_widget(
            RadarScope::new(theme)
                .sweep_angle(state.sweep_angle())
                .highlighted(highlighted)
                .uptime(state.system.uptime),
            layout.radar,
        );
        frame.render_widget(Self::legend(theme), layout.legend);

        match highlighted {
            Some(id) => self.render_detail(find_contact(id), theme, frame, layout.detail),
            None => frame.render_widget(
                Paragraph::new(PLACEHOLDER)
                    .style(theme.dim)
                    .block(Block::bordered().border_style(theme.dim))
                    .wrap(Wrap { trim: true }),
                layout.detail,
            ),
        }
    }

    fn legend(theme: &Theme) -> Paragraph<'static> {
        let mut lines = vec![];
        for severity in [Severity::CatI, Severity::CatII] {
            lines.push(Line::from(vec![
                Span::styled("● ", theme.severity(severity)),
                Span::styled(severity.legend(), theme.base),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(format!("CONTACTS: {}", CONTACTS.len()), theme.dim));
        Paragraph::new(lines)
    }

    /// Unknown ids get an empty card
    fn render_detail(&self, contact: Option<&Contact>, theme: &Theme, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(theme.accent);
        let Some(contact) = contact else {
            frame.render_widget(block, area);
            return;
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("CAT {} ", contact.severity),
                    theme.severity(contact.severity),
                ),
                Span::styled(contact.name, theme.accent),
            ]),
            Line::styled(contact.description, theme.base),
            Line::styled("→ VIEW REMEDIATION PLAN", theme.accent.add_modifier(Modifier::UNDERLINED)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
