//! Component collection
//!
//! Components are stateless renderers: each one reads an `&AppState` snapshot and draws into the
//! rectangle [`ScreenLayout`] assigns to it.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::section::Section,
    presentation::{layout::ScreenLayout, theme::Theme},
};

pub mod auditor;
pub mod audits;
pub mod boot;
pub mod diagnostics;
pub mod header;
pub mod logs;
pub mod profile;
pub mod scanline;
pub mod sidebar;

pub use auditor::AuditorComponent;
pub use audits::AuditsComponent;
pub use boot::BootComponent;
pub use diagnostics::DiagnosticsComponent;
pub use header::HeaderComponent;
pub use logs::LogsComponent;
pub use profile::ProfileComponent;
pub use scanline::ScanlineComponent;
pub use sidebar::SidebarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub boot: BootComponent,
    pub sidebar: SidebarComponent,
    pub profile: ProfileComponent,
    pub logs: LogsComponent,
    pub audits: AuditsComponent,
    pub diagnostics: DiagnosticsComponent,
    pub auditor: AuditorComponent,
    pub scanline: ScanlineComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one frame
    ///
    /// The boot screen replaces the sidebar and panels until the boot sequence completes. The
    /// header, and in CRT mode the scanline, are drawn in both phases.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let theme = Theme::new(&state.config.styles, state.ui.clean_mode);
        let layout = ScreenLayout::new(area, state.is_booted(), state.ui.clean_mode);

        frame.render_widget(Block::new().style(theme.base), area);
        self.header.view(state, &theme, frame, &layout);

        if !state.is_booted() {
            self.boot.view(state, &theme, frame, layout.body);
        } else {
            self.sidebar.view(state, &theme, frame, &layout);
            match state.active_section() {
                Section::Profile => self.profile.view(state, &theme, frame, layout.main),
                Section::Logs => self.logs.view(state, &theme, frame, layout.main),
                Section::Audits => self.audits.view(state, &theme, frame, layout.main),
                Section::Diagnostics => self.diagnostics.view(state, &theme, frame, layout.main),
            }
            if let Some(auditor) = layout.auditor {
                self.auditor.view(state, &theme, frame, auditor);
            }
        }

        if !theme.clean {
            self.scanline.view(state, frame, area);
        }
    }
}

/// Bordered panel with a heading in the top border
pub(crate) fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::bordered()
        .border_style(theme.dim)
        .title(Span::styled(format!(" {title} "), theme.accent))
        .style(theme.base)
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::{core::state::AppState, infrastructure::config::Config};

    /// Booted state on a 100x30 viewport with the embedded config
    pub fn booted_state() -> color_eyre::Result<AppState> {
        let mut state = AppState::new(Config::embedded()?);
        state.system.viewport = ratatui::layout::Rect::new(0, 0, 100, 30);
        state.boot.finish();
        state.ambient.start();
        state.sync_mounts();
        Ok(state)
    }

    /// Draws with `draw` on a fresh terminal and returns the screen rows as text
    pub fn render_lines(
        width: u16,
        height: u16,
        draw: impl FnOnce(&mut ratatui::Frame),
    ) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(draw)?;
        let buffer = terminal.backend().buffer();
        Ok((0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect())
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
