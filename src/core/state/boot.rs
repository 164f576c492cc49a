use serde::Serialize;

use crate::domain::{content::BOOT_SEQUENCE, timer::TaskSlot, typewriter::Typewriter};

/// Boot screen state. The typewriter is mounted at launch and dropped once it completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootState {
    pub booted: bool,
    pub typewriter: TaskSlot<Typewriter>,
}

impl Default for BootState {
    fn default() -> Self {
        Self {
            booted: false,
            typewriter: TaskSlot::mounted(Typewriter::new(BOOT_SEQUENCE)),
        }
    }
}

impl BootState {
    /// The typewriter currently on screen, if the boot screen is up.
    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.get()
    }

    /// Switches to the dashboard. Returns `false` when already booted.
    pub fn finish(&mut self) -> bool {
        if self.booted {
            return false;
        }
        self.booted = true;
        self.typewriter.unmount();
        true
    }
}
