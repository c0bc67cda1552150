//! View model for the dashboard shell (header and sidebar)

use crate::actions::{Action, RouterAction};
use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::palette::catalog::page_title;
use crate::palette::navigation_targets;
use crate::state::AppState;

const ROUTE_COMMANDS: [CommandId; 7] = [
    CommandId::RouteOverview,
    CommandId::RouteTickets,
    CommandId::RouteClients,
    CommandId::RouteNetwork,
    CommandId::RouteInventory,
    CommandId::RouteAnalytics,
    CommandId::RouteSettings,
];

#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub company: String,
    /// Display name of the signed-in operator, empty without a session
    pub operator: String,
    pub page_title: String,
    pub sidebar: Vec<SidebarItem>,
    /// "Ctrl+K palette  g report ..." style hint for the header
    pub header_hints: Vec<(String, &'static str)>,
}

#[derive(Debug, Clone)]
pub struct SidebarItem {
    pub label: String,
    pub icon: &'static str,
    pub path: String,
    /// Shortcut that jumps to this page, e.g. "1"
    pub hint: String,
    pub is_active: bool,
}

impl DashboardViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let current = state.router.current.as_str();

        let sidebar = navigation_targets()
            .into_iter()
            .map(|target| SidebarItem {
                hint: route_hint(&state.keymap, &target.path).unwrap_or_default(),
                icon: target.icon.glyph(),
                is_active: target.path == current,
                label: target.label,
                path: target.path,
            })
            .collect();

        let header_hints = [
            CommandId::CommandPaletteOpen,
            CommandId::ReportGenerate,
            CommandId::SessionLogout,
        ]
        .into_iter()
        .filter_map(|id| {
            state
                .keymap
                .compact_hint_for_command(id)
                .map(|hint| (hint, id.title()))
        })
        .collect();

        Self {
            company: state.config.company_name.clone(),
            operator: state
                .session
                .as_ref()
                .map(|op| op.display_name.clone())
                .unwrap_or_default(),
            page_title: page_title(current).unwrap_or_else(|| "Not found".to_string()),
            sidebar,
            header_hints,
        }
    }
}

/// Keymap hint of the route command that navigates to `path`
fn route_hint(keymap: &Keymap, path: &str) -> Option<String> {
    ROUTE_COMMANDS
        .into_iter()
        .find(|id| {
            matches!(id.to_action(), Action::Router(RouterAction::Navigate(target)) if target == path)
        })
        .and_then(|id| keymap.compact_hint_for_command(id))
}
