//! Elm-style application core
//!
//! Raw host events are translated into domain messages, folded into [`state::AppState`] by the
//! pure update function, and any side effects come back out as [`cmd::Cmd`]s.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
