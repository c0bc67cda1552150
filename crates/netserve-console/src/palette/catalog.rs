//! Static candidate tables
//!
//! The navigation table mirrors the dashboard sidebar; the command table holds
//! the operational shortcuts. Both are rebuilt on demand and never mutated.

use super::candidate::{CommandAction, CommandEntry, Icon, NavigationTarget};

pub const OVERVIEW_PATH: &str = "/";
pub const TICKETS_PATH: &str = "/tickets";
pub const CLIENTS_PATH: &str = "/clients";
pub const NETWORK_PATH: &str = "/network";
pub const INVENTORY_PATH: &str = "/inventory";
pub const ANALYTICS_PATH: &str = "/analytics";
pub const SETTINGS_PATH: &str = "/settings";

fn target(label: &str, icon: Icon, path: &str) -> NavigationTarget {
    NavigationTarget {
        label: label.to_string(),
        icon,
        path: path.to_string(),
    }
}

fn command(label: &str, icon: Icon, path: Option<&str>, action: CommandAction) -> CommandEntry {
    CommandEntry {
        label: label.to_string(),
        icon,
        path: path.map(str::to_string),
        action,
    }
}

/// All dashboard pages, in sidebar order
pub fn navigation_targets() -> Vec<NavigationTarget> {
    vec![
        target("Overview", Icon::Overview, OVERVIEW_PATH),
        target("Ticket Manager", Icon::Ticket, TICKETS_PATH),
        target("Clients", Icon::Client, CLIENTS_PATH),
        target("Network Monitor", Icon::Network, NETWORK_PATH),
        target("Inventory", Icon::Inventory, INVENTORY_PATH),
        target("Analytics", Icon::Analytics, ANALYTICS_PATH),
        target("Settings", Icon::Settings, SETTINGS_PATH),
    ]
}

/// All operational commands
pub fn command_entries() -> Vec<CommandEntry> {
    vec![
        command(
            "Run Network Scan",
            Icon::Radar,
            Some(NETWORK_PATH),
            CommandAction::Scan,
        ),
        command(
            "Restart Core Services",
            Icon::Restart,
            None,
            CommandAction::Restart,
        ),
        command("Flush DNS Cache", Icon::Flush, None, CommandAction::Flush),
        command(
            "Emergency Lockdown",
            Icon::Shield,
            None,
            CommandAction::Lockdown,
        ),
        command(
            "New Service Request",
            Icon::Plus,
            Some(TICKETS_PATH),
            CommandAction::Create,
        ),
    ]
}

/// Label of the page registered for `path`, if any
pub fn page_title(path: &str) -> Option<String> {
    navigation_targets()
        .into_iter()
        .find(|target| target.path == path)
        .map(|target| target.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_action_tag_has_exactly_one_command() {
        let commands = command_entries();
        for action in CommandAction::iter() {
            let count = commands.iter().filter(|c| c.action == action).count();
            assert_eq!(count, 1, "action {action} should appear once");
        }
    }

    #[test]
    fn test_navigation_paths_are_unique() {
        let targets = navigation_targets();
        let paths: HashSet<_> = targets.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths.len(), targets.len());
    }

    #[test]
    fn test_page_title_lookup() {
        assert_eq!(page_title(TICKETS_PATH).as_deref(), Some("Ticket Manager"));
        assert_eq!(page_title("/nowhere"), None);
    }
}
