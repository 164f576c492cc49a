use serde::{Deserialize, Serialize};

use crate::domain::section::Section;

/// Section router messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    Select(Section),
}
