use serde::Serialize;

use crate::{
    domain::{
        ambient::AmbientStatus,
        content::IDLE_MESSAGES,
        section::Section,
        sweep::RadarSweep,
        timer::TaskSlot,
    },
    infrastructure::config::Config,
};

pub mod boot;
pub mod nav;
pub mod system;
pub mod ui;

pub use boot::BootState;
pub use nav::NavState;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
///
/// Owned by the runtime and handed to views as a `&AppState` snapshot each frame.
#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    pub system: SystemState,
    pub boot: BootState,
    pub nav: NavState,
    pub ui: UiState,
    /// Mounted only while the audits panel is on screen
    pub radar: TaskSlot<RadarSweep>,
    pub ambient: AmbientStatus,
    #[serde(skip)]
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            system: SystemState::default(),
            boot: BootState::default(),
            nav: NavState::default(),
            ui: UiState::default(),
            radar: TaskSlot::default(),
            ambient: AmbientStatus::new(IDLE_MESSAGES),
            config,
        }
    }

    pub fn is_booted(&self) -> bool {
        self.boot.booted
    }

    pub fn active_section(&self) -> Section {
        self.nav.active_section
    }

    /// Current sweep angle, if the radar is running
    pub fn sweep_angle(&self) -> Option<f64> {
        self.radar.get().map(RadarSweep::angle)
    }

    /// Mounts or tears down the animators that belong to the visible panel.
    /// A remounted radar starts over at 0°.
    pub fn sync_mounts(&mut self) {
        let wants_radar = self.boot.booted && self.nav.active_section == Section::Audits;
        if wants_radar && !self.radar.is_mounted() {
            self.radar.mount(RadarSweep::new());
        } else if !wants_radar {
            self.radar.unmount();
        }
    }
}
