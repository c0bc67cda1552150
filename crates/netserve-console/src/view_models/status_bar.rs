//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub icon: &'static str,
    pub message: String,
    /// Formatted as "14:32:05"; empty for the idle hint
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        match state.status_bar.latest() {
            Some(msg) => {
                let fg = match msg.kind {
                    StatusKind::Running => theme.status_running,
                    StatusKind::Success => theme.status_success,
                    StatusKind::Error => theme.status_error,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };
                Self {
                    icon: msg.kind.icon(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
            None => {
                let hint = match state.session {
                    Some(_) => state
                        .keymap
                        .hint_for_command(crate::command_id::CommandId::CommandPaletteOpen)
                        .map(|hint| format!("Press {} for the command palette", hint))
                        .unwrap_or_default(),
                    None => format!("{} service console", state.config.company_name),
                };
                Self {
                    icon: "›",
                    message: hint,
                    timestamp: String::new(),
                    source: String::new(),
                    message_style: Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StatusBarAction;
    use crate::reducers::status_bar_reducer::reduce_status_bar;

    #[test]
    fn test_idle_hint_before_login() {
        let state = AppState::default();
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "NetServe SA service console");
        assert!(vm.timestamp.is_empty());
    }

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state.status_bar = reduce_status_bar(
            state.status_bar,
            &StatusBarAction::error("DNS down", "Palette"),
        );
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "DNS down");
        assert_eq!(vm.source, "Palette");
        assert_eq!(vm.icon, StatusKind::Error.icon());
        assert_eq!(vm.timestamp.len(), 8);
    }
}
