use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::layout::Position;
use stigterm::{
    core::{raw_msg::RawMsg, state::AppState},
    domain::{content::find_contact, section::Section, ui::HoverTarget},
    infrastructure::config::Config,
    integration::runtime::Runtime,
    presentation::layout::{blip_cell, log_rows, AuditsLayout, ScreenLayout},
};

fn booted_runtime() -> color_eyre::Result<Runtime> {
    let mut runtime = Runtime::new(AppState::new(Config::embedded()?));
    runtime.send_raw_msg(RawMsg::Resize(120, 40));
    runtime.send_raw_msg(RawMsg::Tick(Duration::from_secs(10)));
    runtime.run_update_cycle();
    Ok(runtime)
}

fn mouse(runtime: &mut Runtime, kind: MouseEventKind, position: Position) {
    runtime.send_raw_msg(RawMsg::Mouse(MouseEvent {
        kind,
        column: position.x,
        row: position.y,
        modifiers: KeyModifiers::NONE,
    }));
    runtime.run_update_cycle();
}

fn click(runtime: &mut Runtime, position: Position) {
    mouse(runtime, MouseEventKind::Down(MouseButton::Left), position);
}

#[test]
fn test_sidebar_click_navigates() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    let nav = ScreenLayout::for_state(runtime.state()).nav;

    click(&mut runtime, nav[Section::Diagnostics.index()].as_position());
    assert_eq!(runtime.state().active_section(), Section::Diagnostics);

    click(&mut runtime, nav[Section::Audits.index()].as_position());
    assert_eq!(runtime.state().active_section(), Section::Audits);
    Ok(())
}

#[test]
fn test_toggle_click_works_during_boot() -> color_eyre::Result<()> {
    let mut runtime = Runtime::new(AppState::new(Config::embedded()?));
    runtime.send_raw_msg(RawMsg::Resize(120, 40));
    runtime.run_update_cycle();

    let toggle = ScreenLayout::for_state(runtime.state()).toggle;
    click(&mut runtime, toggle.as_position());
    assert!(runtime.state().ui.clean_mode);
    assert!(!runtime.state().is_booted());
    Ok(())
}

#[test]
fn test_hover_contact_sets_auditor_message() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    let audits_nav = ScreenLayout::for_state(runtime.state()).nav[Section::Audits.index()].as_position();
    click(&mut runtime, audits_nav);

    let main = ScreenLayout::for_state(runtime.state()).main;
    let radar = AuditsLayout::new(main).radar;
    let contact = find_contact(2).expect("contact 2 exists");
    let blip = blip_cell(radar, contact).expect("radar has room");

    mouse(&mut runtime, MouseEventKind::Moved, blip);
    assert_eq!(runtime.state().ui.hover, Some(HoverTarget::Contact(2)));
    assert_eq!(
        runtime.state().ambient.displayed(),
        "Retrieving CAT I Audit details for VULN-SCANNER..."
    );

    // Leaving the blip restores the idle text
    mouse(&mut runtime, MouseEventKind::Moved, Position::new(main.x + 1, main.y + 1));
    assert_eq!(runtime.state().ui.hover, None);
    assert!(runtime.state().ambient.transient().is_none());
    Ok(())
}

#[test]
fn test_click_log_header_expands_and_collapses() -> color_eyre::Result<()> {
    let mut runtime = booted_runtime()?;
    let logs_nav = ScreenLayout::for_state(runtime.state()).nav[Section::Logs.index()].as_position();
    click(&mut runtime, logs_nav);

    let main = ScreenLayout::for_state(runtime.state()).main;
    let header = log_rows(main, None)[0].header;
    mouse(&mut runtime, MouseEventKind::Moved, header.as_position());
    assert_eq!(
        runtime.state().ambient.displayed(),
        "Retrieving incident details for IR-2024-001..."
    );

    click(&mut runtime, header.as_position());
    assert_eq!(runtime.state().ui.expanded_log.as_deref(), Some("IR-2024-001"));

    // The third entry moved down below the expanded first one
    let third = log_rows(main, Some("IR-2024-001"))[2].header;
    click(&mut runtime, third.as_position());
    assert_eq!(runtime.state().ui.expanded_log.as_deref(), Some("IR-2024-003"));

    click(&mut runtime, log_rows(main, Some("IR-2024-003"))[2].header.as_position());
    assert_eq!(runtime.state().ui.expanded_log, None);
    Ok(())
}
