//! Incident log archive
//!
//! One row per entry; at most one entry is expanded to show its body and the classified
//! summary. Rows are placed by [`log_rows`], which the pointer hit-testing shares.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::AppState,
    domain::{
        content::{LogEntry, LOGS},
        text::{pad_to_width, redact, truncate_to_width},
        ui::HoverTarget,
    },
    presentation::{
        components::panel,
        layout::{expanded_lines, log_rows, panel_inner, LOG_BODY_INDENT},
        theme::Theme,
    },
};

const DIRECTORY_HEADER: &str = "drwxr-xr-x  stigman  security  /var/log/incidents/";
const END_OF_FILE: &str = "█ END OF FILE - More entries classified";

#[derive(Debug, Clone, Default)]
pub struct LogsComponent;

impl LogsComponent {
    pub fn new() -> Self {
        Self
    }

    /// `[+] id  title ... date` fitted to `width` columns
    pub fn header_text(log: &LogEntry, expanded: bool, width: u16) -> String {
        let marker = if expanded { "[-]" } else { "[+]" };
        let left = format!("{marker} {}  ", log.id);
        let right = format!("  {}", log.date);
        let room = usize::from(width).saturating_sub(left.width() + right.width());
        let title = pad_to_width(&truncate_to_width(log.title, room), room);
        truncate_to_width(&format!("{left}{title}{right}"), usize::from(width))
    }

    pub fn view(&self, state: &AppState, theme: &Theme, frame: &mut Frame, area: Rect) {
        let block = panel("[ INCIDENT REPORT ARCHIVE ]", theme).title(
            Line::styled(format!(" {} ENTRIES ", LOGS.len()), theme.dim).right_aligned(),
        );
        frame.render_widget(block, area);

        let inner = panel_inner(area);
        if inner.height == 0 {
            return;
        }
        frame.render_widget(
            Paragraph::new(truncate_to_width(DIRECTORY_HEADER, usize::from(inner.width)))
                .style(theme.dim),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        let rows = log_rows(area, state.ui.expanded_log.as_deref());
        for row in &rows {
            let expanded = state.ui.is_expanded(row.entry.id);
            let hovered = state
                .ui
                .is_hovered(&HoverTarget::Log(row.entry.id.to_string()));
            let style = if hovered {
                theme.accent.add_modifier(Modifier::REVERSED)
            } else if expanded {
                theme.accent
            } else {
                theme.base
            };
            frame.render_widget(
                Paragraph::new(Self::header_text(row.entry, expanded, row.header.width))
                    .style(style),
                row.header,
            );

            if expanded && row.area.height > 1 {
                let body_area = Rect::new(
                    row.area.x + LOG_BODY_INDENT.min(row.area.width),
                    row.area.y + 1,
                    row.area.width.saturating_sub(LOG_BODY_INDENT),
                    row.area.height - 1,
                );
                frame.render_widget(
                    Paragraph::new(Self::expanded_text(row.entry, inner.width, theme)),
                    body_area,
                );
            }
        }

        let end = rows
            .last()
            .map_or(inner.y + 1, |row| row.area.bottom())
            .saturating_add(1);
        if end < inner.bottom() {
            frame.render_widget(
                Paragraph::new(truncate_to_width(END_OF_FILE, usize::from(inner.width)))
                    .style(theme.dim),
                Rect::new(inner.x, end, inner.width, 1),
            );
        }
    }

    /// Body, label and summary; the summary is blacked out unless the clean view is on
    fn expanded_text<'a>(log: &LogEntry, width: u16, theme: &Theme) -> Text<'a> {
        let (body, summary) = expanded_lines(log, width);
        let mut lines: Vec<Line> = body
            .into_iter()
            .map(|line| Line::styled(line, theme.base))
            .collect();
        lines.push(Line::styled("CLASSIFIED INTEL:", theme.alert));
        lines.extend(summary.into_iter().map(|line| {
            if theme.clean {
                Line::styled(line, theme.dim)
            } else {
                Line::styled(redact(&line), theme.dim)
            }
        }));
        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::section::Section, presentation::components::test_support::*};

    fn render(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let theme = Theme::new(&state.config.styles, state.ui.clean_mode);
        render_lines(72, 24, |frame| {
            LogsComponent::new().view(state, &theme, frame, frame.area())
        })
    }

    #[test]
    fn test_header_text_fits_width() {
        let text = LogsComponent::header_text(&LOGS[1], false, 50);
        assert_eq!(text.width(), 50);
        assert!(text.starts_with("[+] IR-2024-002  Zero-Day"));
        assert!(text.ends_with("  2024.11.22"));

        let expanded = LogsComponent::header_text(&LOGS[1], true, 12);
        assert_eq!(expanded, "[-] IR-2024~");
    }

    #[test]
    fn test_collapsed_archive() -> color_eyre::Result<()> {
        let mut state = booted_state()?;
        state.nav.active_section = Section::Logs;
        let lines = render(&state)?;

        assert!(contains(&lines, "[ INCIDENT REPORT ARCHIVE ]"));
        assert!(contains(&lines, "3 ENTRIES"));
        assert!(contains(&lines, "/var/log/incidents/"));
        assert!(contains(&lines, "[+] IR-2024-003"));
        assert!(!contains(&lines, "CLASSIFIED INTEL:"));
        assert!(contains(&lines, "END OF FILE"));
        Ok(())
    }

    #[test]
    fn test_expanded_entry_is_redacted_in_crt_mode() -> color_eyre::Result<()> {
        let mut state = booted_state()?;
        state.nav.active_section = Section::Logs;
        state.ui.toggle_expand("IR-2024-001");
        let lines = render(&state)?;

        assert!(contains(&lines, "[-] IR-2024-001"));
        assert!(contains(&lines, "Successfully hardened 12 RHEL servers"));
        assert!(contains(&lines, "CLASSIFIED INTEL:"));
        assert!(!contains(&lines, "Discovered 47 CAT I findings"));
        assert!(contains(&lines, "██████████ ██ ███ █"));
        Ok(())
    }

    #[test]
    fn test_expanded_entry_is_plain_in_clean_mode() -> color_eyre::Result<()> {
        let mut state = booted_state()?;
        state.nav.active_section = Section::Logs;
        state.ui.clean_mode = true;
        state.ui.toggle_expand("IR-2024-001");
        let lines = render(&state)?;

        assert!(contains(&lines, "Discovered 47 CAT I findings"));
        Ok(())
    }
}
