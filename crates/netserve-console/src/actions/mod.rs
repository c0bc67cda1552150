//! Actions module
//!
//! Every state change in the console is an action. Actions are organized by:
//! - Generic input actions (Navigation, TextInput, Pointer) that the active view
//!   translates into screen-specific actions
//! - Global actions that affect the whole application
//! - Screen/domain-specific actions that are already targeted

// Shared action types
pub mod global;
pub mod navigation;
pub mod pointer;
pub mod text_input;

// Screen/domain-specific action types
pub mod command_palette;
pub mod login;
pub mod report;
pub mod router;
pub mod status_bar;

pub use command_palette::CommandPaletteAction;
pub use global::GlobalAction;
pub use login::LoginAction;
pub use navigation::NavigationAction;
pub use pointer::PointerAction;
pub use report::ReportAction;
pub use router::RouterAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

use crate::palette::Effect;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Pointer hover/click in terminal cells - will be translated by active view
    Pointer(PointerAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Screen/domain-specific actions (already targeted)
    CommandPalette(CommandPaletteAction),
    Login(LoginAction),
    Router(RouterAction),
    StatusBar(StatusBarAction),
    Report(ReportAction),
}

/// Source tag shown in the status bar for palette notifications
const PALETTE_SOURCE: &str = "Palette";

impl From<Effect> for Action {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Navigate(path) => Action::Router(RouterAction::Navigate(path)),
            Effect::Notify { severity, message } => Action::StatusBar(StatusBarAction::Push {
                kind: severity.into(),
                message,
                source: PALETTE_SOURCE.to_string(),
            }),
        }
    }
}
