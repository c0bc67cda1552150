//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod command_palette;
mod login;
mod report;
mod router;
mod status_bar;

pub use app::AppState;
pub use command_palette::CommandPaletteState;
pub use login::{LoginField, LoginFormState};
pub use report::ReportState;
pub use router::RouterState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
