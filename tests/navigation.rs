use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;
use stigterm::{
    core::{raw_msg::RawMsg, state::AppState},
    domain::section::Section,
    infrastructure::config::Config,
    integration::runtime::Runtime,
};

fn booted_runtime() -> color_eyre::Result<Runtime> {
    let mut runtime = Runtime::new(AppState::new(Config::embedded()?));
    runtime.send_raw_msg(RawMsg::Resize(100, 30));
    runtime.send_raw_msg(RawMsg::Tick(Duration::from_secs(10)));
    runtime.run_update_cycle();
    Ok(runtime)
}

fn press(runtime: &mut Runtime, code: KeyCode) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    runtime.run_update_cycle();
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_f3_selects_audits_from_any_section(#[case] start: u8) -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    press(&mut runtime, KeyCode::F(start));
    press(&mut runtime, KeyCode::F(3));

    assert_eq!(runtime.state().active_section(), Section::Audits);
    assert_eq!(runtime.state().sweep_angle(), Some(0.0));
    Ok(())
}

#[test]
fn test_leaving_audits_stops_and_restarts_radar() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    press(&mut runtime, KeyCode::F(3));
    runtime.send_raw_msg(RawMsg::Tick(Duration::from_millis(500)));
    runtime.run_update_cycle();
    assert_eq!(runtime.state().sweep_angle(), Some(20.0));

    press(&mut runtime, KeyCode::F(4));
    assert_eq!(runtime.state().sweep_angle(), None);

    press(&mut runtime, KeyCode::F(3));
    assert_eq!(runtime.state().sweep_angle(), Some(0.0));
    Ok(())
}

#[test]
fn test_keyboard_focus_and_expand() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    press(&mut runtime, KeyCode::F(2));
    press(&mut runtime, KeyCode::Down);
    press(&mut runtime, KeyCode::Down);
    press(&mut runtime, KeyCode::Enter);

    let state = runtime.state();
    assert_eq!(state.ui.expanded_log.as_deref(), Some("IR-2024-002"));
    assert_eq!(
        state.ambient.displayed(),
        "Retrieving incident details for IR-2024-002..."
    );

    press(&mut runtime, KeyCode::Esc);
    assert!(runtime.state().ambient.transient().is_none());
    // Expansion survives losing focus
    assert_eq!(
        runtime.state().ui.expanded_log.as_deref(),
        Some("IR-2024-002")
    );

    press(&mut runtime, KeyCode::F(1));
    assert_eq!(runtime.state().ui.expanded_log, None);
    Ok(())
}

#[test]
fn test_display_mode_toggle_key() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    press(&mut runtime, KeyCode::Char('c'));
    assert!(runtime.state().ui.clean_mode);
    press(&mut runtime, KeyCode::Char('c'));
    assert!(!runtime.state().ui.clean_mode);
    Ok(())
}

#[test]
fn test_q_quits() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    press(&mut runtime, KeyCode::Char('q'));
    assert!(runtime.state().system.should_quit);
    Ok(())
}
