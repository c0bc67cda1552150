//! Application State

use netserve_config::AppConfig;
use netserve_theme::Theme;
use ratatui::layout::Rect;

use crate::domain_models::{DataContext, Operator};
use crate::keymap::{default_keymap, Keymap};
use crate::views::{LoginView, View, ViewId};

use super::{
    CommandPaletteState, LoginFormState, ReportState, RouterState, StatusBarState,
};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    /// Last known terminal size; pointer hit-testing lays out against it
    pub viewport: Rect,
    pub command_palette: CommandPaletteState,
    pub login: LoginFormState,
    /// Signed-in operator, `None` while on the login screen
    pub session: Option<Operator>,
    pub router: RouterState,
    pub status_bar: StatusBarState,
    pub report: ReportState,
    /// Mock records shown on the pages and searched by the palette
    pub data: DataContext,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    pub config: AppConfig,
}

impl AppState {
    /// Initial state for the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get the top-most (active) view from the stack
    ///
    /// The reducer never empties the stack: closing the last view quits instead.
    pub fn active_view(&self) -> &dyn View {
        match self.view_stack.last() {
            Some(view) => view.as_ref(),
            None => &LoginView,
        }
    }

    /// Is a view with this id anywhere on the stack
    pub fn has_view(&self, id: ViewId) -> bool {
        self.view_stack.iter().any(|v| v.view_id() == id)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("viewport", &self.viewport)
            .field("command_palette", &self.command_palette)
            .field("login", &"<form>")
            .field("session", &self.session)
            .field("router", &self.router)
            .field("status_bar", &self.status_bar)
            .field("report", &self.report)
            .field("theme", &"<theme>")
            .field("config", &"<config>")
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            viewport: self.viewport,
            command_palette: self.command_palette.clone(),
            login: self.login.clone(),
            session: self.session.clone(),
            router: self.router.clone(),
            status_bar: self.status_bar.clone(),
            report: self.report.clone(),
            data: self.data.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            config: self.config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LoginView::new())],
            viewport: Rect::default(),
            command_palette: CommandPaletteState::default(),
            login: LoginFormState::default(),
            session: None,
            router: RouterState::default(),
            status_bar: StatusBarState::default(),
            report: ReportState::default(),
            data: DataContext::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            config: AppConfig::default(),
        }
    }
}
