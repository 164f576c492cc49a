use std::time::Duration;

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
};

use crate::{
    domain::{
        content::CONTACTS,
        polar::{in_sweep, polar_to_percent},
    },
    presentation::{
        layout::blip_cell,
        theme::{fg_of, pulse_level, Theme},
    },
};

const RING_RADII: [f64; 4] = [12.5, 25.0, 37.5, 50.0];

/// Radar scope: rings, crosshair, the beam and one blip per contact.
///
/// Drawn into the square returned by [`crate::presentation::layout::scope_rect`]. Blips are
/// written cell by cell at [`blip_cell`] so they line up with pointer hit-testing.
#[derive(Debug, Clone)]
pub struct RadarScope<'a> {
    theme: &'a Theme,
    sweep_angle: Option<f64>,
    highlighted: Option<u32>,
    uptime: Duration,
}

impl<'a> RadarScope<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            sweep_angle: None,
            highlighted: None,
            uptime: Duration::ZERO,
        }
    }

    pub fn sweep_angle(mut self, sweep_angle: Option<f64>) -> Self {
        self.sweep_angle = sweep_angle;
        self
    }

    pub fn highlighted(mut self, contact_id: Option<u32>) -> Self {
        self.highlighted = contact_id;
        self
    }

    pub fn uptime(mut self, uptime: Duration) -> Self {
        self.uptime = uptime;
        self
    }
}

impl Widget for RadarScope<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ring = fg_of(self.theme.dim);
        let beam = fg_of(self.theme.accent);
        let sweep_angle = self.sweep_angle;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(move |ctx| {
                for radius in RING_RADII {
                    ctx.draw(&Circle {
                        x: 50.0,
                        y: 50.0,
                        radius,
                        color: ring,
                    });
                }
                ctx.draw(&CanvasLine::new(0.0, 50.0, 100.0, 50.0, ring));
                ctx.draw(&CanvasLine::new(50.0, 0.0, 50.0, 100.0, ring));
                if let Some(angle) = sweep_angle {
                    // Canvas y grows upward
                    let (x, y) = polar_to_percent(angle, 100.0);
                    ctx.draw(&CanvasLine::new(50.0, 50.0, x, 100.0 - y, beam));
                }
            })
            .render(area, buf);

        let glowing = pulse_level(self.uptime) > 0.5;
        for contact in CONTACTS {
            let Some(position) = blip_cell(area, contact) else {
                continue;
            };
            let lit = sweep_angle.is_some_and(|angle| in_sweep(angle, contact.angle));
            let mut style = self.theme.severity(contact.severity);
            let symbol = if lit {
                style = style.add_modifier(Modifier::BOLD);
                if glowing {
                    "◉"
                } else {
                    "●"
                }
            } else {
                "•"
            };
            if self.highlighted == Some(contact.id) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}
