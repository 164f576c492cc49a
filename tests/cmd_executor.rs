use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use stigterm::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::config::Config,
    integration::runtime::Runtime,
};
use tokio::sync::mpsc;

#[tokio::test]
async fn cmd_executor_sends_tui_command_when_sender_is_present() -> color_eyre::Result<()> {
    let mut exec = CmdExecutor::new();
    let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
    exec.set_tui_sender(tui_tx);

    exec.execute_command(&Cmd::Tui(TuiCommand::Resize {
        width: 80,
        height: 24,
    }))?;

    assert_eq!(
        tui_rx.try_recv()?,
        TuiCommand::Resize {
            width: 80,
            height: 24
        }
    );
    Ok(())
}

#[tokio::test]
async fn cmd_executor_drops_tui_command_without_sender() -> color_eyre::Result<()> {
    let exec = CmdExecutor::new();
    let log = exec.execute_commands(&[Cmd::Tui(TuiCommand::Resize {
        width: 80,
        height: 24,
    })]);
    assert_eq!(log, vec!["✓ Executed: Tui(Resize)".to_string()]);
    Ok(())
}

#[tokio::test]
async fn resize_reaches_the_terminal_channel() -> color_eyre::Result<()> {
    let mut runtime = Runtime::new(AppState::new(Config::embedded()?));
    let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
    runtime.add_tui_sender(tui_tx);

    runtime.send_raw_msg(RawMsg::Resize(100, 30));
    runtime.run_update_cycle();

    assert_eq!(
        tui_rx.try_recv()?,
        TuiCommand::Resize {
            width: 100,
            height: 30
        }
    );
    assert_eq!(runtime.state().system.viewport, Rect::new(0, 0, 100, 30));
    Ok(())
}
