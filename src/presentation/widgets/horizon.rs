use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
};

use crate::presentation::theme::{fg_of, Theme};

const PITCH_OFFSETS: [f64; 4] = [-40.0, -20.0, 20.0, 40.0];

/// Rotates a point about the origin, clockwise on screen for positive degrees.
fn rotate((x, y): (f64, f64), degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos + y * sin, -x * sin + y * cos)
}

/// Attitude indicator. The horizon and its pitch ladder roll with the balance between the
/// two skill categories; the aircraft symbol stays level.
#[derive(Debug, Clone)]
pub struct Horizon<'a> {
    roll: f64,
    theme: &'a Theme,
}

impl<'a> Horizon<'a> {
    pub fn new(roll: f64, theme: &'a Theme) -> Self {
        Self { roll, theme }
    }

    /// End points of the rolled horizon line
    pub fn horizon_line(&self) -> ((f64, f64), (f64, f64)) {
        (rotate((-80.0, 0.0), self.roll), rotate((80.0, 0.0), self.roll))
    }
}

impl Widget for Horizon<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ring = fg_of(self.theme.dim);
        let horizon = fg_of(self.theme.accent);
        let ground = fg_of(self.theme.amber);
        let aircraft = fg_of(self.theme.compliance);
        let roll = self.roll;
        let ((x1, y1), (x2, y2)) = self.horizon_line();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-100.0, 100.0])
            .y_bounds([-100.0, 100.0])
            .paint(move |ctx| {
                for radius in [90.0, 70.0, 50.0] {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius,
                        color: ring,
                    });
                }
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, horizon));
                for offset in PITCH_OFFSETS {
                    let color = if offset < 0.0 { ground } else { ring };
                    let (ax, ay) = rotate((-30.0, offset), roll);
                    let (bx, by) = rotate((30.0, offset), roll);
                    ctx.draw(&CanvasLine::new(ax, ay, bx, by, color));
                }
                ctx.layer();
                ctx.draw(&CanvasLine::new(-40.0, 0.0, -15.0, 0.0, aircraft));
                ctx.draw(&CanvasLine::new(15.0, 0.0, 40.0, 0.0, aircraft));
                ctx.draw(&CanvasLine::new(0.0, 4.0, 0.0, 15.0, aircraft));
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 4.0,
                    color: aircraft,
                });
            })
            .render(area, buf);
    }
}
