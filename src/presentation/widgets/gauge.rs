use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Paragraph,
    },
};

use crate::{
    domain::skills::{needle_angle, GAUGE_SPAN_DEGREES, GAUGE_START_DEGREES},
    presentation::theme::{fg_of, Theme},
};

const DIAL_RADIUS: f64 = 40.0;
const NEEDLE_LENGTH: f64 = 34.0;
const TICKS: u32 = 11;

/// Point on the dial at `angle` degrees clockwise from up, in canvas coordinates.
fn dial_point(angle: f64, radius: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (50.0 + radius * radians.sin(), 50.0 + radius * radians.cos())
}

/// Dial gauge for one skill: arc, ticks, a needle and the reading underneath.
#[derive(Debug, Clone)]
pub struct DialGauge<'a> {
    name: &'a str,
    value: u8,
    needle: Style,
    theme: &'a Theme,
}

impl<'a> DialGauge<'a> {
    pub fn new(name: &'a str, value: u8, theme: &'a Theme) -> Self {
        Self {
            name,
            value,
            needle: theme.accent,
            theme,
        }
    }

    pub fn needle_style(mut self, style: Style) -> Self {
        self.needle = style;
        self
    }

    pub fn needle_angle(&self) -> f64 {
        needle_angle(self.value)
    }
}

impl Widget for DialGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [dial, reading, label] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let arc: Vec<(f64, f64)> = (0..=90)
            .map(|step| {
                let angle = GAUGE_START_DEGREES + GAUGE_SPAN_DEGREES * f64::from(step) / 90.0;
                dial_point(angle, DIAL_RADIUS)
            })
            .collect();
        let track = fg_of(self.theme.dim);
        let needle = fg_of(self.needle);
        let angle = self.needle_angle();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &arc,
                    color: track,
                });
                for tick in 0..TICKS {
                    let angle =
                        GAUGE_START_DEGREES + GAUGE_SPAN_DEGREES * f64::from(tick) / f64::from(TICKS - 1);
                    let (x1, y1) = dial_point(angle, DIAL_RADIUS + 6.0);
                    let (x2, y2) = dial_point(angle, DIAL_RADIUS + 2.0);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, track));
                }
                let (x, y) = dial_point(angle, NEEDLE_LENGTH);
                ctx.draw(&CanvasLine::new(50.0, 50.0, x, y, needle));
                ctx.draw(&Circle {
                    x: 50.0,
                    y: 50.0,
                    radius: 3.0,
                    color: track,
                });
            })
            .render(dial, buf);

        Paragraph::new(format!("{}%", self.value))
            .style(self.needle)
            .centered()
            .render(reading, buf);
        Paragraph::new(self.name)
            .style(self.theme.dim)
            .centered()
            .render(label, buf);
    }
}
