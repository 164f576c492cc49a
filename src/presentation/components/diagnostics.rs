use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        content::{SkillCategory, SKILLS},
        skills::Diagnostics,
    },
    presentation::{
        components::panel,
        theme::Theme,
        widgets::{DialGauge, Horizon},
    },
};

const GAUGE_COLUMNS: usize = 3;
const HORIZON_WIDTH: u16 = 40;
const ANALYSIS_HEIGHT: u16 = 6;

/// Skill gauges and the experience horizon
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsComponent;

impl DiagnosticsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, _state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let block = panel("SYSTEM DIAGNOSTICS", theme)
            .title(Line::styled(" ALL SYSTEMS NOMINAL ", theme.accent).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [gauges, horizon] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(HORIZON_WIDTH)])
                .areas(inner);
        self.render_gauges(theme, frame, gauges);
        self.render_horizon(theme, frame, horizon);
    }

    fn render_gauges(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        let [title, grid] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(Line::styled("// CAPABILITY METRICS", theme.accent), title);

        let rows = SKILLS.len().div_ceil(GAUGE_COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(grid);
        for (row_area, skills) in row_areas.iter().zip(SKILLS.chunks(GAUGE_COLUMNS)) {
            let cells = Layout::horizontal(vec![
                Constraint::Ratio(1, GAUGE_COLUMNS as u32);
                GAUGE_COLUMNS
            ])
            .split(*row_area);
            for (cell, skill) in cells.iter().zip(skills) {
                let needle = match skill.category {
                    SkillCategory::Software => theme.accent,
                    SkillCategory::Hardware => theme.amber,
                };
                frame.render_widget(
                    DialGauge::new(skill.name, skill.value, theme).needle_style(needle),
                    *cell,
                );
            }
        }
    }

    fn render_horizon(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        let diagnostics = Diagnostics::from_skills(SKILLS);
        let [title, indicator, analysis] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(ANALYSIS_HEIGHT),
        ])
        .areas(area);
        frame.render_widget(Line::styled("// EXPERIENCE HORIZON", theme.accent), title);
        frame.render_widget(Horizon::new(diagnostics.roll, theme), indicator);

        let lines = vec![
            Line::from(vec![
                Span::styled("☁ SOFTWARE SECURITY ", theme.base),
                Span::styled(format!("{:.0}%", diagnostics.software_average), theme.accent),
            ]),
            Line::from(vec![
                Span::styled("⚙ HARDWARE EXPERTISE ", theme.base),
                Span::styled(format!("{:.0}%", diagnostics.hardware_average), theme.amber),
            ]),
            Line::default(),
            Line::styled("BALANCE ASSESSMENT:", theme.dim),
            Line::styled(diagnostics.balance.verdict(), theme.base),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), analysis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::components::test_support::*;

    #[test]
    fn test_diagnostics_panel() -> color_eyre::Result<()> {
        let state = booted_state()?;
        let theme = Theme::new(&state.config.styles, false);
        let lines = render_lines(110, 30, |frame| {
            DiagnosticsComponent::new().view(&state, &theme, frame, frame.area())
        })?;

        for needle in [
            "SYSTEM DIAGNOSTICS",
            "ALL SYSTEMS NOMINAL",
            "// CAPABILITY METRICS",
            "// EXPERIENCE HORIZON",
            "SOFTWARE SECURITY 90%",
            "HARDWARE EXPERTISE 92%",
            "BALANCE ASSESSMENT:",
            "STIG COMPLIANCE",
            "AIRCRAFT SYS",
            "94%",
        ] {
            assert!(contains(&lines, needle), "missing {needle}");
        }
        assert!(contains(&lines, "Optimal balance between hardware and"));
        Ok(())
    }
}
