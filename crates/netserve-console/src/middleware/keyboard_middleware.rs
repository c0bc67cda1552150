//! KeyboardMiddleware - translates key presses into context-aware actions
//!
//! Keys are resolved in three layers, first hit wins:
//!
//! 1. Priority keys: Ctrl+C always quits, Esc closes (or is handed to the
//!    input field of a TEXT_INPUT view).
//! 2. Capabilities: a TEXT_INPUT view gets printable characters, Backspace,
//!    Enter, Tab and (with ITEM_NAVIGATION) the arrow keys as generic input.
//! 3. Keymap + gating: the key is looked up in the keymap and the first bound
//!    command the top view accepts is dispatched.
//!
//! Every key press is consumed; unbound keys are dropped.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Layer 1
    fn priority_key(key: &KeyEvent, capabilities: PanelCapabilities) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        if key.code == KeyCode::Esc {
            // The view decides what Esc means for its input field
            return Some(if capabilities.accepts_text_input() {
                Action::TextInput(TextInputAction::Escape)
            } else {
                Action::Global(GlobalAction::Close)
            });
        }

        None
    }

    /// Layer 2, only consulted for TEXT_INPUT views
    fn text_input_key(key: &KeyEvent, capabilities: PanelCapabilities) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let input = match key.code {
            KeyCode::Char(c) if !ctrl && !alt => TextInputAction::Char(c),
            // Unix line kill
            KeyCode::Char('u') if ctrl => TextInputAction::ClearLine,
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                TextInputAction::ClearLine
            }
            KeyCode::Backspace => TextInputAction::Backspace,
            KeyCode::Enter => TextInputAction::Confirm,
            KeyCode::Down if capabilities.supports_item_navigation() => {
                return Some(Action::Navigate(NavigationAction::Next));
            }
            KeyCode::Up if capabilities.supports_item_navigation() => {
                return Some(Action::Navigate(NavigationAction::Previous));
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                return Some(Action::Navigate(NavigationAction::Previous));
            }
            KeyCode::Tab => return Some(Action::Navigate(NavigationAction::Next)),
            KeyCode::BackTab => return Some(Action::Navigate(NavigationAction::Previous)),
            // Ctrl/Alt combinations fall through to the keymap
            _ => return None,
        };

        Some(Action::TextInput(input))
    }

    /// Layer 3
    fn keymap_key(key: &KeyEvent, state: &AppState) -> Option<Action> {
        let view = state.view_stack.last()?;

        for command in state.keymap.match_key(key) {
            let action = command.to_action();
            if view.accepts_action(&action) {
                log::debug!("Layer 3: {:?} accepted by {:?}", command, view.view_id());
                return Some(action);
            }
            log::debug!("Layer 3: {:?} rejected by {:?}", command, view.view_id());
        }

        None
    }

    fn resolve(key: &KeyEvent, state: &AppState) -> Option<Action> {
        let capabilities = state
            .view_stack
            .last()
            .map(|v| v.capabilities(state))
            .unwrap_or_default();

        if let Some(action) = Self::priority_key(key, capabilities) {
            return Some(action);
        }

        if capabilities.accepts_text_input() {
            if let Some(action) = Self::text_input_key(key, capabilities) {
                return Some(action);
            }
        }

        Self::keymap_key(key, state)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::resolve(key, state) {
            Some(resolved) => dispatcher.dispatch(resolved),
            None => log::trace!("Unbound key: {:?}", key),
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ReportAction, RouterAction};
    use crate::views::{CommandPaletteView, DashboardView, LoginView};

    fn state_with(views: Vec<Box<dyn crate::views::View>>) -> AppState {
        AppState {
            view_stack: views,
            ..AppState::default()
        }
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn resolve(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        KeyboardMiddleware::resolve(&press(code, modifiers), state)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for state in [
            state_with(vec![Box::new(LoginView::new())]),
            state_with(vec![
                Box::new(DashboardView::new()),
                Box::new(CommandPaletteView::new()),
            ]),
        ] {
            assert!(matches!(
                resolve(&state, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(Action::Global(GlobalAction::Quit))
            ));
        }
    }

    #[test]
    fn test_esc_depends_on_text_input() {
        let dashboard = state_with(vec![Box::new(DashboardView::new())]);
        assert!(matches!(
            resolve(&dashboard, KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Global(GlobalAction::Close))
        ));

        let palette = state_with(vec![
            Box::new(DashboardView::new()),
            Box::new(CommandPaletteView::new()),
        ]);
        assert!(matches!(
            resolve(&palette, KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::TextInput(TextInputAction::Escape))
        ));
    }

    #[test]
    fn test_chars_become_text_input_in_palette() {
        let palette = state_with(vec![
            Box::new(DashboardView::new()),
            Box::new(CommandPaletteView::new()),
        ]);
        assert!(matches!(
            resolve(&palette, KeyCode::Char('g'), KeyModifiers::NONE),
            Some(Action::TextInput(TextInputAction::Char('g')))
        ));
        assert!(matches!(
            resolve(&palette, KeyCode::Down, KeyModifiers::NONE),
            Some(Action::Navigate(NavigationAction::Next))
        ));
        assert!(matches!(
            resolve(&palette, KeyCode::Char('u'), KeyModifiers::CONTROL),
            Some(Action::TextInput(TextInputAction::ClearLine))
        ));
    }

    #[test]
    fn test_login_arrows_do_not_navigate() {
        let login = state_with(vec![Box::new(LoginView::new())]);
        assert!(resolve(&login, KeyCode::Down, KeyModifiers::NONE).is_none());
        assert!(matches!(
            resolve(&login, KeyCode::Tab, KeyModifiers::NONE),
            Some(Action::Navigate(NavigationAction::Next))
        ));
        assert!(matches!(
            resolve(&login, KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(Action::Navigate(NavigationAction::Previous))
        ));
    }

    #[test]
    fn test_keymap_on_dashboard() {
        let dashboard = state_with(vec![Box::new(DashboardView::new())]);
        match resolve(&dashboard, KeyCode::Char('2'), KeyModifiers::NONE) {
            Some(Action::Router(RouterAction::Navigate(path))) => assert_eq!(path, "/tickets"),
            other => panic!("Expected route, got {other:?}"),
        }
        assert!(matches!(
            resolve(&dashboard, KeyCode::Char('g'), KeyModifiers::CONTROL),
            Some(Action::Report(ReportAction::Generate))
        ));
    }

    #[test]
    fn test_palette_cannot_open_from_login() {
        let login = state_with(vec![Box::new(LoginView::new())]);
        assert!(resolve(&login, KeyCode::Char('k'), KeyModifiers::CONTROL).is_none());
    }

    #[test]
    fn test_palette_gates_dashboard_commands() {
        let palette = state_with(vec![
            Box::new(DashboardView::new()),
            Box::new(CommandPaletteView::new()),
        ]);
        // Ctrl+G generates a report on the dashboard, but not under the palette
        assert!(resolve(&palette, KeyCode::Char('g'), KeyModifiers::CONTROL).is_none());
        // Ctrl+K toggles the palette closed
        assert!(matches!(
            resolve(&palette, KeyCode::Char('k'), KeyModifiers::CONTROL),
            Some(Action::Global(GlobalAction::PushView(_)))
        ));
        assert!(matches!(
            resolve(&palette, KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::TextInput(TextInputAction::Confirm))
        ));
    }
}
