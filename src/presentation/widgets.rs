//! Reusable widgets
//!
//! Instrument faces drawn on a braille canvas.

pub mod gauge;
pub mod horizon;
pub mod radar;

pub use gauge::DialGauge;
pub use horizon::Horizon;
pub use radar::RadarScope;
