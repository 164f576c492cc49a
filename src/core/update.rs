use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::{nav::NavMsg, system::SystemMsg, ui::UiMsg, Msg},
        state::AppState,
    },
    domain::{
        ambient::{IdlePicker, RandomPicker},
        content::find_log,
        typewriter::TypewriterEvent,
        ui::{focus_targets, step_focus, HoverTarget},
    },
};

/// Capabilities the update function borrows from its owner
pub struct UpdateContext<'a> {
    /// Draws the next idle auditor message
    pub idle: &'a mut dyn IdlePicker,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    let mut picker = RandomPicker;
    let mut ctx = UpdateContext { idle: &mut picker };
    update_with_context(msg, state, &mut ctx)
}

/// Same as [`update`] with explicit capabilities, so tests can script the idle draws
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &mut UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::Tick(elapsed)) => {
            let mut commands = state.system.update(SystemMsg::Tick(elapsed));
            commands.extend(tick_animators(&mut state, elapsed, ctx));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            if !state.nav.update(nav_msg) {
                return (state, vec![]);
            }
            // The previous panel is gone together with everything it owned
            state.ui.reset_panel();
            state.ambient.clear_transient();
            state.sync_mounts();
            let message = format!("Section changed to {}", state.nav.active_section);
            (state, vec![Cmd::log_info(message)])
        }

        Msg::Ui(ui_msg) => {
            let commands = update_ui(ui_msg, &mut state);
            (state, commands)
        }
    }
}

/// Advances every mounted animator by `elapsed`.
/// Animators mounted by this tick's events start counting from the next tick.
fn tick_animators(state: &mut AppState, elapsed: Duration, ctx: &mut UpdateContext<'_>) -> Vec<Cmd> {
    state.radar.tick(elapsed);
    state.ambient.tick(elapsed, ctx.idle);

    let completed = state
        .boot
        .typewriter
        .tick(elapsed)
        .into_iter()
        .any(|event| event == TypewriterEvent::Completed);

    if completed && state.boot.finish() {
        state.ambient.start();
        state.sync_mounts();
        return vec![Cmd::log_info("Boot sequence complete")];
    }
    vec![]
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::ToggleDisplayMode => {
            state.ui.clean_mode = !state.ui.clean_mode;
            let mode = if state.ui.clean_mode { "clean" } else { "crt" };
            vec![Cmd::log_info(format!("Display mode set to {mode}"))]
        }

        UiMsg::Hover(target) => {
            set_hover(state, target);
            vec![]
        }

        UiMsg::FocusNext | UiMsg::FocusPrev => {
            if !state.is_booted() {
                return vec![];
            }
            let targets = focus_targets(state.nav.active_section);
            let next = step_focus(
                state.ui.hover.as_ref(),
                &targets,
                msg == UiMsg::FocusNext,
            );
            set_hover(state, next);
            vec![]
        }

        UiMsg::ClearFocus => {
            set_hover(state, None);
            vec![]
        }

        UiMsg::ToggleExpand(log_id) => {
            if state.is_booted() && find_log(&log_id).is_some() {
                state.ui.toggle_expand(&log_id);
            }
            vec![]
        }

        UiMsg::ToggleFocusedExpand => {
            let focused = state
                .ui
                .hover
                .as_ref()
                .and_then(HoverTarget::log_id)
                .map(str::to_string);
            match focused {
                Some(log_id) => update_ui(UiMsg::ToggleExpand(log_id), state),
                None => vec![],
            }
        }
    }
}

/// Hover is single valued: entering a target replaces the previous one, leaving clears it.
fn set_hover(state: &mut AppState, target: Option<HoverTarget>) {
    if !state.is_booted() {
        return;
    }
    match target.as_ref().and_then(HoverTarget::status_message) {
        Some(message) => state.ambient.set_transient(message),
        None => state.ambient.clear_transient(),
    }
    state.ui.hover = target;
}
