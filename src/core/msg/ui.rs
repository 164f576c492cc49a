use serde::{Deserialize, Serialize};

use crate::domain::ui::HoverTarget;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ToggleDisplayMode,

    /// Pointer entered a target, or left every target when `None`
    Hover(Option<HoverTarget>),

    // Keyboard equivalents of hovering
    FocusNext,
    FocusPrev,
    ClearFocus,

    /// Expand or collapse a log entry by id
    ToggleExpand(String),
    /// Expand or collapse the log entry under focus
    ToggleFocusedExpand,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        // pointer motion produces a stream of hover messages
        matches!(self, UiMsg::Hover(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_msg_serde() -> color_eyre::Result<()> {
        let msg = UiMsg::Hover(Some(HoverTarget::Contact(3)));
        let s = serde_json::to_string(&msg)?;
        let back: UiMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }

    #[test]
    fn test_hover_is_frequent() {
        assert!(UiMsg::Hover(None).is_frequent());
        assert!(!UiMsg::ToggleDisplayMode.is_frequent());
    }
}
