use serde::{Deserialize, Serialize};

pub mod nav;
pub mod system;
pub mod ui;

use nav::NavMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState, ticks fan out to the animators)
    System(SystemMsg),

    // Section router
    Nav(NavMsg),

    // Display mode, hover, focus and expansion
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Nav(_) => false,
        }
    }
}
