use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    core::{
        msg::{nav::NavMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::section::Section,
    presentation::{
        config::keybindings::Action,
        layout::{click_at, hover_target_at, Click},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick(elapsed) => vec![Msg::System(SystemMsg::Tick(elapsed))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ReportError(error))],

        // User input - translate based on key bindings and screen layout
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Rendering is orchestrated by the runner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        // F1..F4 always select their panel, whatever the user config binds
        KeyEvent {
            code: KeyCode::F(n),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if let Some(section) = Section::from_function_key(n) {
                return vec![Msg::Nav(NavMsg::Select(section))];
            }
        }

        _ => {}
    }

    match state.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    if let Some(section) = action.section() {
        return vec![Msg::Nav(NavMsg::Select(section))];
    }
    match action {
        Action::ToggleDisplayMode => vec![Msg::Ui(UiMsg::ToggleDisplayMode)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Ui(UiMsg::FocusPrev)],
        Action::ToggleExpand => vec![Msg::Ui(UiMsg::ToggleFocusedExpand)],
        Action::ClearFocus => vec![Msg::Ui(UiMsg::ClearFocus)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ShowProfile
        | Action::ShowLogs
        | Action::ShowAudits
        | Action::ShowDiagnostics => vec![],
    }
}

/// Pointer motion becomes hover enter/leave, left clicks hit buttons and log headers
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let target = hover_target_at(state, position);
            if target == state.ui.hover {
                vec![]
            } else {
                vec![Msg::Ui(UiMsg::Hover(target))]
            }
        }
        MouseEventKind::Down(MouseButton::Left) => match click_at(state, position) {
            Some(Click::ToggleDisplayMode) => vec![Msg::Ui(UiMsg::ToggleDisplayMode)],
            Some(Click::Navigate(section)) => vec![Msg::Nav(NavMsg::Select(section))],
            Some(Click::ToggleLog(id)) => vec![Msg::Ui(UiMsg::ToggleExpand(id.to_string()))],
            None => vec![],
        },
        _ => vec![],
    }
}
