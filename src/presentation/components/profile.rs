use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::content::{
        METHODOLOGY, MISSION_STATEMENT, OPERATIONAL_BACKGROUND, OPERATOR_ID, QUALIFICATIONS,
    },
    presentation::{components::panel, theme::Theme},
};

/// Security clearance dossier
#[derive(Debug, Clone, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, _state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let block = panel("SECURITY CLEARANCE DOSSIER", theme)
            .title(Line::styled(" [ VERIFIED ] ", theme.compliance).right_aligned());

        let heading = |text: &'static str| Line::styled(text, theme.accent);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("OPERATOR ID: ", theme.dim),
                Span::styled(OPERATOR_ID, theme.base),
            ]),
            Line::default(),
            heading("// MISSION STATEMENT"),
            Line::styled(MISSION_STATEMENT, theme.base),
            Line::default(),
            heading("// OPERATIONAL BACKGROUND"),
        ];
        for paragraph in OPERATIONAL_BACKGROUND {
            lines.push(Line::styled(*paragraph, theme.base));
        }
        lines.push(Line::default());
        lines.push(heading("// CERTIFIED QUALIFICATIONS"));
        lines.extend(QUALIFICATIONS.iter().map(|qualification| {
            Line::from(vec![
                Span::styled("[x] ", theme.accent),
                Span::styled(*qualification, theme.base),
            ])
        }));
        lines.push(Line::default());
        lines.push(heading("// CORE METHODOLOGY"));
        lines.extend(METHODOLOGY.iter().enumerate().map(|(i, (title, description))| {
            Line::from(vec![
                Span::styled(format!("{:02} ", i + 1), theme.dim),
                Span::styled(format!("{title:<10}"), theme.accent),
                Span::styled(*description, theme.base),
            ])
        }));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
