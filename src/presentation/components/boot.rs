//! Boot screen
//!
//! Banner, the typed boot log with a blinking block cursor and a progress bar.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        content::{BOOT_BANNER, BOOT_SUBTITLE},
        typewriter::Typewriter,
    },
    presentation::theme::{blink_on, Theme},
};

#[derive(Debug, Clone, Default)]
pub struct BootComponent;

impl BootComponent {
    pub fn new() -> Self {
        Self
    }

    /// `"{line}/{total}"` under the progress bar
    pub fn progress_label(typewriter: &Typewriter) -> String {
        let total = typewriter.total_lines();
        format!("{}/{}", typewriter.line_index().min(total), total)
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let Some(typewriter) = state.boot.typewriter() else {
            return;
        };

        let banner_height = BOOT_BANNER.lines().count() as u16;
        let [banner, subtitle, log, progress] = Layout::vertical([
            Constraint::Length(banner_height + 1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area.inner(Margin::new(2, 1)));

        frame.render_widget(Paragraph::new(BOOT_BANNER).style(theme.accent), banner);
        frame.render_widget(Paragraph::new(BOOT_SUBTITLE).style(theme.dim), subtitle);

        let mut lines: Vec<Line> = typewriter
            .completed_lines()
            .iter()
            .map(|line| Line::styled(line.as_str(), theme.base))
            .collect();
        if !typewriter.is_complete() {
            let cursor = if blink_on(state.system.uptime) { "█" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(typewriter.typing(), theme.base),
                Span::styled(cursor, theme.accent),
            ]));
        }
        // Keep the newest lines in view on short terminals
        let overflow = lines.len().saturating_sub(usize::from(log.height));
        frame.render_widget(Paragraph::new(lines.split_off(overflow)), log);

        let gauge = Gauge::default()
            .gauge_style(theme.accent)
            .ratio(typewriter.progress().clamp(0.0, 1.0))
            .label(Self::progress_label(typewriter));
        frame.render_widget(gauge, progress);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{content::BOOT_SEQUENCE, timer::Scheduled},
        infrastructure::config::Config,
        presentation::components::test_support::*,
    };

    #[test]
    fn test_progress_label() {
        let mut typewriter = Typewriter::new(BOOT_SEQUENCE);
        assert_eq!(BootComponent::progress_label(&typewriter), "0/6");
        typewriter.tick(Duration::from_secs(10));
        assert_eq!(BootComponent::progress_label(&typewriter), "6/6");
    }

    #[test]
    fn test_renders_typed_lines() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::embedded()?);
        state.boot.typewriter.tick(Duration::from_millis(700));
        let theme = Theme::new(&state.config.styles, false);

        let lines = render_lines(90, 24, |frame| {
            BootComponent::new().view(&state, &theme, frame, frame.area())
        })?;
        assert!(contains(&lines, "> POWER_ON..."));
        assert!(contains(&lines, BOOT_SUBTITLE));
        assert!(contains(&lines, "1/6"));
        Ok(())
    }

    #[test]
    fn test_cursor_blinks() -> color_eyre::Result<()> {
        let mut state = AppState::new(Config::embedded()?);
        let theme = Theme::new(&state.config.styles, false);

        let on = render_lines(90, 24, |frame| {
            BootComponent::new().view(&state, &theme, frame, frame.area())
        })?;
        state.system.uptime = Duration::from_millis(400);
        let off = render_lines(90, 24, |frame| {
            BootComponent::new().view(&state, &theme, frame, frame.area())
        })?;

        assert!(contains(&on, "█"));
        assert!(!contains(&off, "█"));
        Ok(())
    }
}
