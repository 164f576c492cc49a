//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime owning the state and the message/command queues
//! - Renderer drawing components onto a terminal
//! - AppRunner host loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;
