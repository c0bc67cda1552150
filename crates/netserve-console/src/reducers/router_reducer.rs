//! Router reducer

use crate::actions::RouterAction;
use crate::state::RouterState;

pub fn reduce_router(mut state: RouterState, action: &RouterAction) -> RouterState {
    match action {
        RouterAction::Navigate(path) => {
            log::debug!("Router: {} -> {}", state.current, path);
            state.navigate(path);
        }
        RouterAction::Back => {
            if !state.back() {
                log::debug!("Router: no history to go back to");
            }
        }
    }
    state
}
