use crate::actions::{Action, NavigationAction, PointerAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod command_palette_view;
pub mod dashboard_view;
pub mod login_view;
pub mod pages;
pub mod status_bar;

pub use command_palette_view::CommandPaletteView;
pub use dashboard_view::DashboardView;
pub use login_view::LoginView;

use status_bar::StatusBarWidget;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Login,
    Dashboard,
    CommandPalette,
}

/// View trait - the interface every screen and overlay implements
///
/// Views live on the view stack as `Box<dyn View>`, so the trait must stay
/// object-safe and `Send` (views travel inside actions across threads).
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    /// Render this view into `area` (the screen minus the status bar)
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Input capabilities, consulted by the keyboard and translation middleware
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a pointer event at a terminal cell to this view's specific action
    ///
    /// Only called for views with the POINTER capability. Hit-testing must
    /// use the same layout as `render`, computed from `state.viewport`.
    fn translate_pointer(&self, _pointer: PointerAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command's action may run while this view is on top
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Split the screen into the view area and the one-line status bar
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (body, status)
}

/// Render the entire application UI
///
/// Views render bottom-up so overlays end up on top; the status bar is
/// shared by all of them.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let (body, status) = screen_layout(area);

    for view in &state.view_stack {
        view.render(state, body, f);
    }

    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&vm), status);
}
