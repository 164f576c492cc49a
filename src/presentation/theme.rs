//! Palette and animation curves
//!
//! Colors come from the `styles` section of the config; the constants below are what an
//! unconfigured build falls back to. Curves are pure functions of the uptime so a frame can be
//! rendered from an `&AppState` snapshot alone.

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};

use crate::{domain::content::Severity, presentation::config::Styles};

pub const PHOSPHOR: Color = Color::Rgb(0x00, 0xff, 0x41);
pub const PHOSPHOR_DIM: Color = Color::Rgb(0x00, 0xcc, 0x33);
pub const MONITOR: Color = Color::Rgb(0x0a, 0x0f, 0x0a);
pub const ALERT: Color = Color::Rgb(0xff, 0x00, 0x00);
pub const CAT_AMBER: Color = Color::Rgb(0xff, 0xa5, 0x00);
pub const COMPLIANCE: Color = Color::Rgb(0xff, 0xff, 0xff);

pub const BLINK_PERIOD: Duration = Duration::from_millis(700);
pub const PULSE_PERIOD: Duration = Duration::from_millis(2000);
pub const SCANLINE_PERIOD: Duration = Duration::from_millis(8000);

/// Resolved styles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub clean: bool,
    /// Panel background and body text
    pub base: Style,
    pub dim: Style,
    /// Headings, the active nav item and focused rows
    pub accent: Style,
    pub alert: Style,
    pub amber: Style,
    pub compliance: Style,
}

impl Theme {
    pub fn new(styles: &Styles, clean: bool) -> Self {
        let alert = styles.get_or("alert", Style::new().fg(ALERT).add_modifier(Modifier::BOLD));
        let amber = styles.get_or("cat_amber", Style::new().fg(CAT_AMBER));
        let compliance = styles.get_or(
            "compliance",
            Style::new().fg(COMPLIANCE).add_modifier(Modifier::BOLD),
        );

        if clean {
            let base = styles.get_or("clean", Style::new().fg(Color::Gray).bg(Color::Black));
            return Self {
                clean,
                base,
                dim: styles.get_or("clean_dim", Style::new().fg(Color::DarkGray)),
                accent: styles.get_or(
                    "clean_accent",
                    Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                alert,
                amber,
                compliance,
            };
        }

        let phosphor = styles.get_or("phosphor", Style::new().fg(PHOSPHOR));
        Self {
            clean,
            base: styles.get_or("monitor", Style::new().fg(PHOSPHOR).bg(MONITOR)),
            dim: styles.get_or("phosphor_dim", Style::new().fg(PHOSPHOR_DIM)),
            accent: phosphor.add_modifier(Modifier::BOLD),
            alert,
            amber,
            compliance,
        }
    }

    /// Blip and legend color of a finding category
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::CatI => self.alert,
            Severity::CatII => self.amber,
        }
    }
}

/// Foreground of a style, for canvas shapes that take a bare color
pub fn fg_of(style: Style) -> Color {
    style.fg.unwrap_or(Color::Reset)
}

/// Cursor blink: visible for the first half of every 0.7 s period.
pub fn blink_on(uptime: Duration) -> bool {
    let phase = uptime.as_millis() % BLINK_PERIOD.as_millis();
    phase < BLINK_PERIOD.as_millis() / 2
}

/// Glow intensity in `0.0..=1.0`, a triangle wave over 2 s peaking halfway.
pub fn pulse_level(uptime: Duration) -> f64 {
    let period = PULSE_PERIOD.as_millis();
    let phase = (uptime.as_millis() % period) as f64 / period as f64;
    1.0 - (2.0 * phase - 1.0).abs()
}

/// Row the scanline is on, drifting linearly top to bottom once every 8 s.
pub fn scanline_row(uptime: Duration, height: u16) -> Option<u16> {
    if height == 0 {
        return None;
    }
    let period = SCANLINE_PERIOD.as_millis();
    let phase = uptime.as_millis() % period;
    Some((phase * u128::from(height) / period) as u16)
}
