//! Domain logic
//!
//! This module contains everything the dashboard knows independent of any terminal:
//! - Compiled-in dossier content
//! - Animators (typewriter, radar sweep, idle rotator) and their scheduling primitives
//! - Radar geometry and skill arithmetic

pub mod ambient;
pub mod content;
pub mod polar;
pub mod section;
pub mod skills;
pub mod sweep;
pub mod text;
pub mod timer;
pub mod typewriter;
pub mod ui;
