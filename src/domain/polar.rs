//! Radar scope geometry
//!
//! Positions live in a 0–100 square with the scope centred at (50, 50) and y growing downward.
//! Bearings are degrees clockwise from "up".

use crate::domain::content::Contact;

/// Half-width of the illuminated wedge around the beam.
pub const BEAM_WIDTH_DEGREES: f64 = 30.0;

/// Maps a bearing and a 0–100 range to a position in the 0–100 square.
pub fn polar_to_percent(angle: f64, distance: f64) -> (f64, f64) {
    let radians = (angle - 90.0).to_radians();
    let radius = distance / 2.0;
    (
        50.0 + radius * radians.cos(),
        50.0 + radius * radians.sin(),
    )
}

/// Whether a contact at `contact_angle` is inside the beam at `sweep_angle`.
///
/// Both angles are reduced modulo 360 first, then the raw difference and the difference shifted
/// by +360 and -360 are compared, so pairs straddling 0/360 are caught from either side.
pub fn in_sweep(sweep_angle: f64, contact_angle: f64) -> bool {
    let diff = sweep_angle.rem_euclid(360.0) - contact_angle.rem_euclid(360.0);
    [diff, diff + 360.0, diff - 360.0]
        .iter()
        .any(|d| d.abs() < BEAM_WIDTH_DEGREES)
}

/// Screen position of a contact in the 0–100 square.
pub fn contact_position(contact: &Contact) -> (f64, f64) {
    polar_to_percent(contact.angle, contact.distance)
}
