pub mod app_reducer;
pub mod command_palette_reducer;
pub mod login_reducer;
pub mod report_reducer;
pub mod router_reducer;
pub mod status_bar_reducer;
