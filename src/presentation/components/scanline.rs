use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::theme::scanline_row};

/// CRT scanline: one dimmed row drifting down the screen
#[derive(Debug, Clone, Default)]
pub struct ScanlineComponent;

impl ScanlineComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(row) = scanline_row(state.system.uptime, area.height) else {
            return;
        };
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        frame
            .buffer_mut()
            .set_style(line, Style::new().add_modifier(Modifier::DIM));
    }
}
