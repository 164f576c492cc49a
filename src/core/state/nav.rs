use serde::Serialize;

use crate::{core::msg::nav::NavMsg, domain::section::Section};

/// Section router state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub active_section: Section,
}

impl NavState {
    /// Returns `true` when the visible panel changed.
    pub fn update(&mut self, msg: NavMsg) -> bool {
        match msg {
            NavMsg::Select(section) => {
                if self.active_section == section {
                    return false;
                }
                self.active_section = section;
                true
            }
        }
    }
}
