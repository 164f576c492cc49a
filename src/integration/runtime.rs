use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::ambient::{IdlePicker, RandomPicker},
};

/// Owns the application state and drives translate → update → execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: CmdExecutor,
    idle: Box<dyn IdlePicker + Send>,
}

impl Runtime {
    /// Create a new Runtime drawing idle messages at random
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_picker(initial_state, Box::new(RandomPicker))
    }

    /// Create a new Runtime with a specific idle message source
    pub fn new_with_picker(initial_state: AppState, idle: Box<dyn IdlePicker + Send>) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: CmdExecutor::new(),
            idle,
        }
    }

    /// Route TuiCommands to the host loop
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Execute all pending commands, returning one log line per command
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let mut ctx = UpdateContext {
            idle: self.idle.as_mut(),
        };
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &mut ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    ///
    /// Raw messages are translated one at a time against the state left by the previous one,
    /// so pointer hit-testing always sees the layout the user is looking at.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.next_raw_msg() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
            all_commands.extend(self.drain_msg_queue());
        }

        all_commands.extend(self.drain_msg_queue());
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    fn next_raw_msg(&mut self) -> Option<RawMsg> {
        self.raw_msg_queue.pop_front()
    }

    fn drain_msg_queue(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            commands.extend(self.process_message(msg));
        }
        commands
    }
}
