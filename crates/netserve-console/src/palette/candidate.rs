//! Palette candidates
//!
//! A candidate is one selectable row in the palette. The three kinds share a
//! label, an icon and an optional route, and differ in what activation does.

use crate::domain_models::EntityId;

/// Opaque icon reference, resolved to a glyph at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Overview,
    Ticket,
    Client,
    Network,
    Inventory,
    Analytics,
    Settings,
    Radar,
    Restart,
    Flush,
    Shield,
    Plus,
}

impl Icon {
    /// Single-cell glyph used in the palette and sidebar
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Overview => "◆",
            Self::Ticket => "✉",
            Self::Client => "◎",
            Self::Network => "⇄",
            Self::Inventory => "▤",
            Self::Analytics => "▥",
            Self::Settings => "⚙",
            Self::Radar => "◌",
            Self::Restart => "↻",
            Self::Flush => "⌫",
            Self::Shield => "▲",
            Self::Plus => "+",
        }
    }
}

/// Action tag carried by command candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CommandAction {
    Scan,
    Restart,
    Flush,
    Lockdown,
    Create,
}

/// A page of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub label: String,
    pub icon: Icon,
    pub path: String,
}

/// An operational command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub label: String,
    pub icon: Icon,
    pub path: Option<String>,
    pub action: CommandAction,
}

/// A record from the entity store (clients)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub label: String,
    pub icon: Icon,
    pub entity_id: EntityId,
}

/// One selectable item in the merged palette list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Navigation(NavigationTarget),
    Command(CommandEntry),
    Entity(EntityRecord),
}

impl Candidate {
    pub fn label(&self) -> &str {
        match self {
            Self::Navigation(target) => &target.label,
            Self::Command(command) => &command.label,
            Self::Entity(record) => &record.label,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Navigation(target) => target.icon,
            Self::Command(command) => command.icon,
            Self::Entity(record) => record.icon,
        }
    }

    /// Route attached to the candidate itself (entities have none)
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Navigation(target) => Some(&target.path),
            Self::Command(command) => command.path.as_deref(),
            Self::Entity(_) => None,
        }
    }

    /// Short kind tag shown on the right of each palette row
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Navigation(_) => "Page",
            Self::Command(_) => "Command",
            Self::Entity(_) => "Client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_action_display_is_lowercase_tag() {
        assert_eq!(CommandAction::Lockdown.to_string(), "lockdown");
        assert_eq!(CommandAction::Scan.to_string(), "scan");
    }

    #[test]
    fn test_entity_candidate_has_no_path() {
        let candidate = Candidate::Entity(EntityRecord {
            label: "Acme Logistics".to_string(),
            icon: Icon::Client,
            entity_id: EntityId(1),
        });
        assert_eq!(candidate.path(), None);
        assert_eq!(candidate.kind_label(), "Client");
        assert_eq!(candidate.label(), "Acme Logistics");
    }
}
