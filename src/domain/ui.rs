use serde::{Deserialize, Serialize};

use crate::domain::{
    content::{find_contact, find_log, CONTACTS, LOGS},
    section::Section,
};

/// The single thing the pointer (or keyboard focus) currently rests on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    /// A log entry, by id
    Log(String),
    /// A radar contact, by id
    Contact(u32),
}

impl HoverTarget {
    /// Auditor message announced while hovering. Unknown ids announce nothing.
    pub fn status_message(&self) -> Option<String> {
        match self {
            HoverTarget::Log(id) => {
                find_log(id).map(|log| format!("Retrieving incident details for {}...", log.id))
            }
            HoverTarget::Contact(id) => find_contact(*id).map(|contact| {
                format!(
                    "Retrieving CAT {} Audit details for {}...",
                    contact.severity, contact.name
                )
            }),
        }
    }

    pub fn log_id(&self) -> Option<&str> {
        match self {
            HoverTarget::Log(id) => Some(id),
            HoverTarget::Contact(_) => None,
        }
    }

    pub fn contact_id(&self) -> Option<u32> {
        match self {
            HoverTarget::Contact(id) => Some(*id),
            HoverTarget::Log(_) => None,
        }
    }
}

/// Hover targets of a panel in keyboard focus order.
pub fn focus_targets(section: Section) -> Vec<HoverTarget> {
    match section {
        Section::Logs => LOGS
            .iter()
            .map(|log| HoverTarget::Log(log.id.to_string()))
            .collect(),
        Section::Audits => CONTACTS
            .iter()
            .map(|contact| HoverTarget::Contact(contact.id))
            .collect(),
        Section::Profile | Section::Diagnostics => vec![],
    }
}

/// Moves focus one step through `targets`, wrapping at both ends.
/// With nothing focused (or a target from elsewhere) the first step lands on an end.
pub fn step_focus(
    current: Option<&HoverTarget>,
    targets: &[HoverTarget],
    forward: bool,
) -> Option<HoverTarget> {
    if targets.is_empty() {
        return None;
    }
    let last = targets.len() - 1;
    let position = current.and_then(|current| targets.iter().position(|t| t == current));
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(i), true) => if i == last { 0 } else { i + 1 },
        (Some(i), false) => if i == 0 { last } else { i - 1 },
    };
    targets.get(next).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_status_message() {
        let target = HoverTarget::Log("IR-2024-003".into());
        assert_eq!(
            target.status_message().as_deref(),
            Some("Retrieving incident details for IR-2024-003...")
        );
    }

    #[test]
    fn test_contact_status_message() {
        assert_eq!(
            HoverTarget::Contact(1).status_message().as_deref(),
            Some("Retrieving CAT I Audit details for RHEL-HARDENER...")
        );
        assert_eq!(
            HoverTarget::Contact(4).status_message().as_deref(),
            Some("Retrieving CAT II Audit details for PATCH-PILOT...")
        );
    }

    #[test]
    fn test_unknown_targets_are_silent() {
        assert!(HoverTarget::Contact(99).status_message().is_none());
        assert!(HoverTarget::Log("nope".into()).status_message().is_none());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(HoverTarget::Contact(2).contact_id(), Some(2));
        assert_eq!(HoverTarget::Contact(2).log_id(), None);
        assert_eq!(HoverTarget::Log("x".into()).log_id(), Some("x"));
    }

    #[test]
    fn test_focus_targets_per_section() {
        assert_eq!(focus_targets(Section::Logs).len(), LOGS.len());
        assert_eq!(
            focus_targets(Section::Audits).first(),
            Some(&HoverTarget::Contact(CONTACTS[0].id))
        );
        assert!(focus_targets(Section::Profile).is_empty());
        assert!(focus_targets(Section::Diagnostics).is_empty());
    }

    #[test]
    fn test_step_focus_wraps() {
        let targets = focus_targets(Section::Audits);
        let first = targets[0].clone();
        let last = targets[targets.len() - 1].clone();

        assert_eq!(step_focus(None, &targets, true), Some(first.clone()));
        assert_eq!(step_focus(None, &targets, false), Some(last.clone()));
        assert_eq!(step_focus(Some(&last), &targets, true), Some(first.clone()));
        assert_eq!(step_focus(Some(&first), &targets, false), Some(last));
        assert_eq!(
            step_focus(Some(&first), &targets, true),
            Some(targets[1].clone())
        );
    }

    #[test]
    fn test_step_focus_without_targets() {
        assert_eq!(step_focus(None, &[], true), None);
        assert_eq!(
            step_focus(Some(&HoverTarget::Contact(1)), &[], false),
            None
        );
    }
}
