use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner on Render/Resize events, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the pure update function cannot perform itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    /// Human-readable name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
