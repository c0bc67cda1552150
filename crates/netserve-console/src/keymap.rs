pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    Keymap::new(default_bindings())
}

/// Default bindings before pattern parsing
pub fn default_bindings() -> Vec<KeyBinding> {
    use CommandId::*;

    vec![
        // Command palette
        KeyBinding::new("ctrl+k", "Ctrl+K", CommandPaletteOpen),
        KeyBinding::new("ctrl+p", "Ctrl+P", CommandPaletteOpen),
        // Pages, in sidebar order
        KeyBinding::new("1", "1", RouteOverview),
        KeyBinding::new("2", "2", RouteTickets),
        KeyBinding::new("3", "3", RouteClients),
        KeyBinding::new("4", "4", RouteNetwork),
        KeyBinding::new("5", "5", RouteInventory),
        KeyBinding::new("6", "6", RouteAnalytics),
        KeyBinding::new("7", "7", RouteSettings),
        KeyBinding::new("b", "b", RouteBack),
        KeyBinding::new("backspace", "Backspace", RouteBack),
        // Analytics
        KeyBinding::new("g", "g", ReportGenerate),
        KeyBinding::new("ctrl+g", "Ctrl+G", ReportGenerate),
        // Session
        KeyBinding::new("ctrl+l", "Ctrl+L", SessionLogout),
        // Status bar
        KeyBinding::new("c", "c", StatusBarClear),
        // Global
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+q", "Ctrl+Q", GlobalQuit),
    ]
}
