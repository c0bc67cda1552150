//! Activation effects
//!
//! Activating a candidate produces a list of side effects instead of
//! performing them; the palette middleware turns them into router and status
//! bar actions.

use super::candidate::{Candidate, CommandAction};

/// Entity activation always lands on the client list, not a detail page
pub const ENTITY_LIST_PATH: &str = "/clients";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A side effect requested by an activated candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch the current route
    Navigate(String),
    /// Show a transient notification
    Notify { severity: Severity, message: String },
}

impl CommandAction {
    /// Notification emitted when a command with this tag runs
    pub fn notification(self) -> Option<(Severity, &'static str)> {
        match self {
            Self::Scan => Some((Severity::Success, "Network scan initiated on all segments")),
            Self::Restart => Some((Severity::Warning, "Restarting core services")),
            Self::Flush => Some((Severity::Success, "DNS cache flushed")),
            Self::Lockdown => Some((Severity::Error, "INITIATING LOCKDOWN PROTOCOL")),
            Self::Create => None,
        }
    }
}

/// Effects of activating `candidate`, in dispatch order
pub fn effects_for(candidate: &Candidate) -> Vec<Effect> {
    match candidate {
        Candidate::Navigation(target) => vec![Effect::Navigate(target.path.clone())],
        Candidate::Entity(record) => vec![
            Effect::Navigate(ENTITY_LIST_PATH.to_string()),
            Effect::Notify {
                severity: Severity::Info,
                message: format!("Client selected: {}", record.label),
            },
        ],
        Candidate::Command(command) => {
            let mut effects = Vec::with_capacity(2);
            if let Some(path) = &command.path {
                effects.push(Effect::Navigate(path.clone()));
            }
            if let Some((severity, message)) = command.action.notification() {
                effects.push(Effect::Notify {
                    severity,
                    message: message.to_string(),
                });
            }
            effects
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::EntityId;
    use crate::palette::candidate::{CommandEntry, EntityRecord, Icon, NavigationTarget};
    use crate::palette::catalog::command_entries;

    fn command_for(action: CommandAction) -> Candidate {
        let entry = command_entries()
            .into_iter()
            .find(|c| c.action == action)
            .unwrap();
        Candidate::Command(entry)
    }

    #[test]
    fn test_navigation_target_navigates_to_its_path() {
        let candidate = Candidate::Navigation(NavigationTarget {
            label: "Ticket Manager".to_string(),
            icon: Icon::Ticket,
            path: "/tickets".to_string(),
        });
        assert_eq!(
            effects_for(&candidate),
            vec![Effect::Navigate("/tickets".to_string())]
        );
    }

    #[test]
    fn test_entity_navigates_to_list_and_notifies() {
        let candidate = Candidate::Entity(EntityRecord {
            label: "Banco Austral".to_string(),
            icon: Icon::Client,
            entity_id: EntityId(2),
        });
        let effects = effects_for(&candidate);
        assert_eq!(effects[0], Effect::Navigate(ENTITY_LIST_PATH.to_string()));
        match &effects[1] {
            Effect::Notify { severity, message } => {
                assert_eq!(*severity, Severity::Info);
                assert!(message.contains("Banco Austral"));
            }
            other => panic!("Expected notification, got {other:?}"),
        }
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn test_lockdown_notifies_error_without_navigation() {
        assert_eq!(
            effects_for(&command_for(CommandAction::Lockdown)),
            vec![Effect::Notify {
                severity: Severity::Error,
                message: "INITIATING LOCKDOWN PROTOCOL".to_string(),
            }]
        );
    }

    #[test]
    fn test_command_severities_by_tag() {
        let severity_of = |action| {
            effects_for(&command_for(action))
                .into_iter()
                .find_map(|e| match e {
                    Effect::Notify { severity, .. } => Some(severity),
                    Effect::Navigate(_) => None,
                })
        };
        assert_eq!(severity_of(CommandAction::Scan), Some(Severity::Success));
        assert_eq!(severity_of(CommandAction::Restart), Some(Severity::Warning));
        assert_eq!(severity_of(CommandAction::Flush), Some(Severity::Success));
        assert_eq!(severity_of(CommandAction::Lockdown), Some(Severity::Error));
        assert_eq!(severity_of(CommandAction::Create), None);
    }

    #[test]
    fn test_command_with_path_navigates_before_notifying() {
        let effects = effects_for(&command_for(CommandAction::Scan));
        assert_eq!(effects[0], Effect::Navigate("/network".to_string()));
        assert!(matches!(effects[1], Effect::Notify { .. }));
    }

    #[test]
    fn test_command_emits_at_most_one_notification() {
        let candidate = Candidate::Command(CommandEntry {
            label: "Flush".to_string(),
            icon: Icon::Flush,
            path: Some("/network".to_string()),
            action: CommandAction::Flush,
        });
        let notifications = effects_for(&candidate)
            .into_iter()
            .filter(|e| matches!(e, Effect::Notify { .. }))
            .count();
        assert_eq!(notifications, 1);
    }
}
