//! Notification history reducer
//!
//! Palette effects, login outcomes and simulated operations all report
//! through here; the newest entry is what the bottom bar shows.

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => state.push(StatusMessage::new(*kind, message.as_str(), source.as_str())),
        // "c" on the dashboard
        StatusBarAction::Clear => state.clear(),
    }
    state
}
