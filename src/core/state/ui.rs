use serde::Serialize;

use crate::domain::ui::HoverTarget;

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Plain theme instead of the CRT decorations
    pub clean_mode: bool,
    /// The one log entry or contact under the pointer or keyboard focus
    pub hover: Option<HoverTarget>,
    /// The one expanded log entry
    pub expanded_log: Option<String>,
}

impl UiState {
    pub fn is_expanded(&self, log_id: &str) -> bool {
        self.expanded_log.as_deref() == Some(log_id)
    }

    pub fn is_hovered(&self, target: &HoverTarget) -> bool {
        self.hover.as_ref() == Some(target)
    }

    /// Contact shown on the audit detail card
    pub fn highlighted_contact(&self) -> Option<u32> {
        self.hover.as_ref().and_then(HoverTarget::contact_id)
    }

    /// Opening one entry closes any other.
    pub fn toggle_expand(&mut self, log_id: &str) {
        if self.is_expanded(log_id) {
            self.expanded_log = None;
        } else {
            self.expanded_log = Some(log_id.to_string());
        }
    }

    /// Forgets everything owned by the visible panel.
    pub fn reset_panel(&mut self) {
        self.hover = None;
        self.expanded_log = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_at_most_one_expanded() {
        let mut ui = UiState::default();

        ui.toggle_expand("IR-2024-001");
        assert!(ui.is_expanded("IR-2024-001"));

        ui.toggle_expand("IR-2024-002");
        assert!(!ui.is_expanded("IR-2024-001"));
        assert!(ui.is_expanded("IR-2024-002"));

        ui.toggle_expand("IR-2024-002");
        assert_eq!(ui.expanded_log, None);
    }

    #[test]
    fn test_highlighted_contact_follows_hover() {
        let mut ui = UiState {
            hover: Some(HoverTarget::Contact(3)),
            ..Default::default()
        };
        assert_eq!(ui.highlighted_contact(), Some(3));
        assert!(ui.is_hovered(&HoverTarget::Contact(3)));

        ui.hover = Some(HoverTarget::Log("IR-2024-001".into()));
        assert_eq!(ui.highlighted_contact(), None);
    }

    #[test]
    fn test_reset_panel() {
        let mut ui = UiState {
            clean_mode: true,
            hover: Some(HoverTarget::Contact(1)),
            expanded_log: Some("IR-2024-001".into()),
        };
        ui.reset_panel();
        assert_eq!(
            ui,
            UiState {
                clean_mode: true,
                ..Default::default()
            }
        );
    }
}
