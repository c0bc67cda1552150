//! View models
//!
//! Each view model is built from `AppState` right before rendering and holds
//! display-ready data, keeping formatting out of the widgets.

pub mod command_palette;
pub mod dashboard;
pub mod status_bar;

pub use command_palette::CommandPaletteViewModel;
pub use dashboard::DashboardViewModel;
pub use status_bar::StatusBarViewModel;
