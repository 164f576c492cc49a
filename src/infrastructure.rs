//! Infrastructure layer
//!
//! This module handles everything that touches the outside world:
//! - TUI foundation (real terminal and headless test terminal)
//! - CLI argument processing
//! - Configuration files

pub mod cli;
pub mod config;
pub mod tui;
