use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Dashboard panels. The set is closed; there is no "unknown" panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Section {
    #[default]
    #[strum(to_string = "PROFILE")]
    Profile,
    #[strum(to_string = "LOGS")]
    Logs,
    #[strum(to_string = "AUDITS")]
    Audits,
    #[strum(to_string = "SYS_DIAG")]
    Diagnostics,
}

impl Section {
    /// Number of the function key that selects this panel.
    pub fn function_key(self) -> u8 {
        match self {
            Section::Profile => 1,
            Section::Logs => 2,
            Section::Audits => 3,
            Section::Diagnostics => 4,
        }
    }

    pub fn from_function_key(n: u8) -> Option<Self> {
        Section::iter().find(|section| section.function_key() == n)
    }

    /// Position in the sidebar, top to bottom.
    pub fn index(self) -> usize {
        usize::from(self.function_key() - 1)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Section::iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_profile() {
        assert_eq!(Section::default(), Section::Profile);
    }

    #[test]
    fn test_function_keys_round_trip() {
        for section in Section::iter() {
            assert_eq!(
                Section::from_function_key(section.function_key()),
                Some(section)
            );
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_function_key(3), Some(Section::Audits));
        assert_eq!(Section::from_function_key(5), None);
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn test_sidebar_labels() {
        let labels: Vec<String> = Section::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["PROFILE", "LOGS", "AUDITS", "SYS_DIAG"]);
    }
}
