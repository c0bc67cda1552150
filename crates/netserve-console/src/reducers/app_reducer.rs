use ratatui::layout::Rect;

use crate::actions::{Action, GlobalAction, LoginAction};
use crate::reducers::{
    command_palette_reducer::reduce_command_palette, login_reducer::reduce_login,
    report_reducer::reduce_report, router_reducer::reduce_router,
    status_bar_reducer::reduce_status_bar,
};
use crate::state::{AppState, RouterState};
use crate::views::{command_palette_view::results_rows, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => {
            reduce_global(&mut state, global);
        }
        Action::CommandPalette(palette_action) => {
            state.command_palette = reduce_command_palette(
                state.command_palette,
                palette_action,
                &state.data.clients,
                results_rows(state.viewport),
            );
        }
        Action::Login(login_action) => {
            match login_action {
                LoginAction::Succeeded(operator) => {
                    state.session = Some(operator.clone());
                    state.router = RouterState::default();
                }
                LoginAction::Logout => {
                    state.session = None;
                }
                _ => {}
            }
            state.login = reduce_login(state.login, login_action);
        }
        Action::Router(router_action) => {
            state.router = reduce_router(state.router, router_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }
        Action::Report(report_action) => {
            state.report = reduce_report(state.report, report_action);
        }
        // Generic input actions are translated by middleware and never reduced
        Action::Navigate(_) | Action::TextInput(_) | Action::Pointer(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top closes it (toggle)
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                if new_view.view_id() == ViewId::CommandPalette {
                    state.command_palette.reset();
                }
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::ReplaceView(new_view) => {
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
        }
        GlobalAction::Close => {
            // Pop the top view; closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, *width, *height);
        }
        // Raw input is translated by middleware
        GlobalAction::KeyPressed(_) | GlobalAction::Mouse(_) => {}
    }

    // Closing the palette on any path discards its query and cursor
    if !state.has_view(ViewId::CommandPalette) {
        state.command_palette.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommandPaletteAction, RouterAction};
    use crate::domain_models::Operator;
    use crate::views::{CommandPaletteView, DashboardView, LoginView};

    fn dashboard_state() -> AppState {
        let mut state = AppState::default();
        state.view_stack = vec![Box::new(DashboardView::new())];
        state
    }

    fn push_palette() -> Action {
        Action::Global(GlobalAction::PushView(Box::new(CommandPaletteView::new())))
    }

    #[test]
    fn test_initial_view_is_login() {
        let state = AppState::default();
        assert_eq!(state.active_view().view_id(), ViewId::Login);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_push_palette_twice_toggles() {
        let state = reduce(dashboard_state(), &push_palette());
        assert_eq!(state.active_view().view_id(), ViewId::CommandPalette);

        let state = reduce(state, &push_palette());
        assert_eq!(state.active_view().view_id(), ViewId::Dashboard);
    }

    #[test]
    fn test_close_pops_then_quits() {
        let state = reduce(dashboard_state(), &push_palette());
        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(state.view_stack.len(), 1);
        assert!(state.running);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_closing_palette_resets_its_state() {
        let mut state = reduce(dashboard_state(), &push_palette());
        for c in "net".chars() {
            state = reduce(state, &Action::CommandPalette(CommandPaletteAction::Char(c)));
        }
        state = reduce(
            state,
            &Action::CommandPalette(CommandPaletteAction::NavigateNext),
        );
        assert_eq!(state.command_palette.selected_index, 1);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert!(state.command_palette.query.is_empty());
        assert_eq!(state.command_palette.selected_index, 0);
    }

    #[test]
    fn test_replace_view_drops_palette_state() {
        let mut state = reduce(dashboard_state(), &push_palette());
        state = reduce(state, &Action::CommandPalette(CommandPaletteAction::Char('x')));
        let state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(LoginView::new()))),
        );
        assert_eq!(state.view_stack.len(), 1);
        assert!(state.command_palette.query.is_empty());
    }

    #[test]
    fn test_login_success_starts_session_on_overview() {
        let mut state = AppState::default();
        state.router.navigate("/settings");
        let operator = Operator {
            username: "admin".into(),
            display_name: "NOC Administrator".into(),
        };
        let state = reduce(state, &Action::Login(LoginAction::Succeeded(operator.clone())));
        assert_eq!(state.session, Some(operator));
        assert_eq!(state.router.current, "/");
        assert!(state.router.history.is_empty());

        let state = reduce(state, &Action::Login(LoginAction::Logout));
        assert!(state.session.is_none());
    }

    #[test]
    fn test_resize_records_viewport() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Resize(80, 24)),
        );
        assert_eq!(state.viewport, Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_router_actions_are_routed() {
        let state = reduce(
            dashboard_state(),
            &Action::Router(RouterAction::Navigate("/inventory".into())),
        );
        let state = reduce(state, &Action::Router(RouterAction::Back));
        assert_eq!(state.router.current, "/");
    }
}
