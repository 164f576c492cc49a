//! Presentation layer
//!
//! This module contains everything that turns an `&AppState` into cells:
//! - Components, one per screen region
//! - Reusable widgets (radar scope, dial gauge, horizon)
//! - Screen layout shared with pointer hit-testing
//! - Theme and animation curves
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod theme;
pub mod widgets;
