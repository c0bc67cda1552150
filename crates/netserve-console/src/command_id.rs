//! Command identifiers
//!
//! Every keyboard shortcut resolves to a `CommandId`, which in turn maps to
//! the action it dispatches.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, LoginAction, ReportAction, RouterAction, StatusBarAction};
use crate::palette::catalog::{
    ANALYTICS_PATH, CLIENTS_PATH, INVENTORY_PATH, NETWORK_PATH, OVERVIEW_PATH, SETTINGS_PATH,
    TICKETS_PATH,
};
use crate::views::CommandPaletteView;

/// Unique identifier for each command in the application.
///
/// Serialized as snake_case (e.g., `RouteTickets` -> `"route_tickets"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Command palette ===
    CommandPaletteOpen,

    // === Routes ===
    RouteOverview,
    RouteTickets,
    RouteClients,
    RouteNetwork,
    RouteInventory,
    RouteAnalytics,
    RouteSettings,
    /// Return to the previous page
    RouteBack,

    // === Analytics ===
    ReportGenerate,

    // === Session ===
    SessionLogout,

    // === Status bar ===
    StatusBarClear,

    // === Global ===
    /// Close the current view (or quit on the last one)
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to the action it dispatches
    pub fn to_action(self) -> Action {
        let route = |path: &str| Action::Router(RouterAction::Navigate(path.to_string()));

        match self {
            Self::CommandPaletteOpen => {
                Action::Global(GlobalAction::PushView(Box::new(CommandPaletteView::new())))
            }

            Self::RouteOverview => route(OVERVIEW_PATH),
            Self::RouteTickets => route(TICKETS_PATH),
            Self::RouteClients => route(CLIENTS_PATH),
            Self::RouteNetwork => route(NETWORK_PATH),
            Self::RouteInventory => route(INVENTORY_PATH),
            Self::RouteAnalytics => route(ANALYTICS_PATH),
            Self::RouteSettings => route(SETTINGS_PATH),
            Self::RouteBack => Action::Router(RouterAction::Back),

            Self::ReportGenerate => Action::Report(ReportAction::Generate),
            Self::SessionLogout => Action::Login(LoginAction::Logout),
            Self::StatusBarClear => Action::StatusBar(StatusBarAction::Clear),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short title for footer hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::CommandPaletteOpen => "Command palette",
            Self::RouteOverview => "Overview",
            Self::RouteTickets => "Tickets",
            Self::RouteClients => "Clients",
            Self::RouteNetwork => "Network",
            Self::RouteInventory => "Inventory",
            Self::RouteAnalytics => "Analytics",
            Self::RouteSettings => "Settings",
            Self::RouteBack => "Back",
            Self::ReportGenerate => "Generate report",
            Self::SessionLogout => "Log out",
            Self::StatusBarClear => "Clear status",
            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }
}
