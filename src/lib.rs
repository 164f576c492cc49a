//! # stigterm - CRT maintenance terminal portfolio
//!
//! A terminal rendition of a security engineer's portfolio dashboard: a typed boot sequence,
//! then four panels (profile, incident logs, a radar of audit projects and skill diagnostics)
//! with an ambient "AI auditor" status line.
//!
//! ## Architecture Overview
//!
//! This crate follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): serializable application state
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): pure state transitions, driven by ticks for every animation
//! - **Command** ([`core::cmd`]): side effects (terminal resize, logging)
//! - **View** ([`presentation::components`]): stateless rendering of an `&AppState`
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use stigterm::core::{
//!     msg::{system::SystemMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! assert!(!state.is_booted());
//!
//! // Ten seconds of ticks are enough for the whole boot log and its settle delay
//! let (state, _commands) = update(Msg::System(SystemMsg::Tick(Duration::from_secs(10))), state);
//! assert!(state.is_booted());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and commands
//! - [`domain`] - dossier content, animators and geometry
//! - [`infrastructure`] - terminal, configuration and CLI
//! - [`integration`] - runtime and host loop
//! - [`presentation`] - components, widgets, layout and theme
//! - [`utils`] - logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
