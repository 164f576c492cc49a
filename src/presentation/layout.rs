//! Screen geometry
//!
//! Pure functions from the viewport and [`AppState`] to the rectangles everything is drawn in.
//! The renderer and the pointer hit-testing in the translator both go through here, so a click
//! always lands on what is actually on screen.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    widgets::Block,
};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{
        content::{Contact, LogEntry, CONTACTS, LOGS},
        polar::contact_position,
        section::Section,
        text::wrap,
        ui::HoverTarget,
    },
};

pub const HEADER_HEIGHT: u16 = 3;
pub const SIDEBAR_WIDTH: u16 = 28;
pub const AUDITOR_HEIGHT: u16 = 3;
pub const TOGGLE_WIDTH: u16 = 14;
/// Sidebar rows above the nav items: three status lines, the online indicator and a gap
pub const NAV_OFFSET: u16 = 5;
/// Logs panel rows above the first entry: the directory header and a gap
pub const LOG_LIST_OFFSET: u16 = 2;
/// Indent of the expanded part of a log entry
pub const LOG_BODY_INDENT: u16 = 2;
pub const LEGEND_WIDTH: u16 = 30;
pub const DETAIL_HEIGHT: u16 = 6;

/// Top-level regions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    /// Display-mode toggle inside the header
    pub toggle: Rect,
    /// Everything below the header (boot screen, or sidebar plus panel)
    pub body: Rect,
    pub sidebar: Rect,
    /// One row per section, in sidebar order
    pub nav: [Rect; 4],
    pub main: Rect,
    /// Ambient auditor box; absent during boot and in clean mode
    pub auditor: Option<Rect>,
}

impl ScreenLayout {
    pub fn new(area: Rect, booted: bool, clean_mode: bool) -> Self {
        let show_auditor = booted && !clean_mode;
        let auditor_height = if show_auditor { AUDITOR_HEIGHT } else { 0 };
        let [header, body, auditor] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(auditor_height),
        ])
        .areas(area);

        let header_inner = Block::bordered().inner(header);
        let toggle_width = TOGGLE_WIDTH.min(header_inner.width);
        let toggle = Rect::new(
            header_inner.right().saturating_sub(toggle_width),
            header_inner.y,
            toggle_width,
            header_inner.height.min(1),
        );

        if !booted {
            return Self {
                header,
                toggle,
                body,
                ..Default::default()
            };
        }

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);
        let sidebar_inner = Block::bordered().inner(sidebar);
        let mut nav = [Rect::default(); 4];
        for (slot, section) in nav.iter_mut().zip(Section::iter()) {
            let row = Rect::new(
                sidebar_inner.x,
                sidebar_inner.y + NAV_OFFSET + section.index() as u16,
                sidebar_inner.width,
                1,
            );
            *slot = row.intersection(sidebar_inner);
        }

        Self {
            header,
            toggle,
            body,
            sidebar,
            nav,
            main,
            auditor: show_auditor.then_some(auditor),
        }
    }

    /// Layout of the frame the state was last rendered at
    pub fn for_state(state: &AppState) -> Self {
        Self::new(
            state.system.viewport,
            state.is_booted(),
            state.ui.clean_mode,
        )
    }
}

/// Inside of a bordered panel
pub fn panel_inner(area: Rect) -> Rect {
    Block::bordered().inner(area)
}

/// Screen rows of one log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRow {
    pub entry: &'static LogEntry,
    /// The clickable id/title/date line
    pub header: Rect,
    /// Header plus the expanded part, if any
    pub area: Rect,
}

/// Lines of the expanded part of a log entry, before redaction
pub fn expanded_lines(log: &LogEntry, width: u16) -> (Vec<String>, Vec<String>) {
    let width = usize::from(width.saturating_sub(LOG_BODY_INDENT));
    (wrap(log.body, width), wrap(log.redacted_summary, width))
}

/// Rows taken by the expanded part: the body, the "CLASSIFIED INTEL:" label and the summary
pub fn expanded_height(log: &LogEntry, width: u16) -> u16 {
    let (body, summary) = expanded_lines(log, width);
    (body.len() + 1 + summary.len()) as u16
}

/// Where each visible log entry sits inside the logs panel `main`
pub fn log_rows(main: Rect, expanded: Option<&str>) -> Vec<LogRow> {
    let inner = panel_inner(main);
    let mut rows = vec![];
    let mut y = inner.y + LOG_LIST_OFFSET;
    for entry in LOGS {
        if y >= inner.bottom() {
            break;
        }
        let mut height = 1;
        if expanded == Some(entry.id) {
            height += expanded_height(entry, inner.width);
        }
        let area = Rect::new(inner.x, y, inner.width, height).intersection(inner);
        rows.push(LogRow {
            entry,
            header: Rect::new(inner.x, y, inner.width, 1),
            area,
        });
        y = y.saturating_add(height);
    }
    rows
}

/// Regions of the audits panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditsLayout {
    /// The radar scope, about twice as wide as tall so it looks round
    pub radar: Rect,
    pub legend: Rect,
    pub detail: Rect,
}

impl AuditsLayout {
    pub fn new(main: Rect) -> Self {
        let inner = panel_inner(main);
        let [scope_row, detail] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(DETAIL_HEIGHT)]).areas(inner);
        let [radar_column, legend] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(LEGEND_WIDTH)])
                .areas(scope_row);
        Self {
            radar: scope_rect(radar_column),
            legend,
            detail,
        }
    }
}

/// Largest centered rect with a 2:1 cell ratio
pub fn scope_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Cell a contact's blip is drawn in
pub fn blip_cell(radar: Rect, contact: &Contact) -> Option<Position> {
    if radar.width == 0 || radar.height == 0 {
        return None;
    }
    let (x, y) = contact_position(contact);
    let column = (x / 100.0 * f64::from(radar.width - 1)).round() as u16;
    let row = (y / 100.0 * f64::from(radar.height - 1)).round() as u16;
    Some(Position::new(radar.x + column, radar.y + row))
}

/// Contact whose blip is at, or one column beside, `position`
pub fn contact_at(radar: Rect, position: Position) -> Option<&'static Contact> {
    CONTACTS.iter().find(|contact| {
        blip_cell(radar, contact).is_some_and(|cell| {
            cell.y == position.y && cell.x.abs_diff(position.x) <= 1
        })
    })
}

/// What a click at `position` does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    ToggleDisplayMode,
    Navigate(Section),
    ToggleLog(&'static str),
}

pub fn click_at(state: &AppState, position: Position) -> Option<Click> {
    let layout = ScreenLayout::for_state(state);
    if layout.toggle.contains(position) {
        return Some(Click::ToggleDisplayMode);
    }
    if !state.is_booted() {
        return None;
    }
    if let Some(section) = Section::iter().find(|s| layout.nav[s.index()].contains(position)) {
        return Some(Click::Navigate(section));
    }
    if state.active_section() == Section::Logs {
        return log_rows(layout.main, state.ui.expanded_log.as_deref())
            .into_iter()
            .find(|row| row.header.contains(position))
            .map(|row| Click::ToggleLog(row.entry.id));
    }
    None
}

/// Log entry or contact under the pointer
pub fn hover_target_at(state: &AppState, position: Position) -> Option<HoverTarget> {
    if !state.is_booted() {
        return None;
    }
    let layout = ScreenLayout::for_state(state);
    if !layout.main.contains(position) {
        return None;
    }
    match state.active_section() {
        Section::Logs => log_rows(layout.main, state.ui.expanded_log.as_deref())
            .into_iter()
            .find(|row| row.area.contains(position))
            .map(|row| HoverTarget::Log(row.entry.id.to_string())),
        Section::Audits => contact_at(AuditsLayout::new(layout.main).radar, position)
            .map(|contact| HoverTarget::Contact(contact.id)),
        Section::Profile | Section::Diagnostics => None,
    }
}
