use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that routes Elm commands to the host
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        tx.send(tui_cmd.clone())?;
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            },

            Cmd::LogError { message } => {
                log::error!("{}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("{}", message);
            }
        }

        Ok(())
    }

    /// Execute multiple commands, returning one log line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}
