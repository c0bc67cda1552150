//! Command Palette Middleware
//!
//! Turns palette activation into effects. On Execute (Enter) or Click the
//! candidate list is re-derived from the current query, the palette is
//! closed, and the activated candidate's effects are dispatched as router
//! and status bar actions. The reducer resets the query and cursor on the
//! same actions.

use crate::actions::{Action, CommandPaletteAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::palette::{effects_for, filter_and_merge};
use crate::state::AppState;
use crate::views::ViewId;

pub struct CommandPaletteMiddleware;

impl CommandPaletteMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn close_palette(state: &AppState, dispatcher: &Dispatcher) {
        if state.active_view().view_id() == ViewId::CommandPalette {
            dispatcher.dispatch(Action::Global(GlobalAction::Close));
        }
    }

    /// Close the palette, then dispatch the effects of the candidate at `index`
    fn activate(index: usize, state: &AppState, dispatcher: &Dispatcher) {
        let candidates = filter_and_merge(&state.command_palette.query, &state.data.clients);

        Self::close_palette(state, dispatcher);

        let Some(candidate) = candidates.get(index) else {
            log::debug!("Command palette: nothing to activate at {}", index);
            return;
        };

        log::info!(
            "Command palette activating {} '{}'",
            candidate.kind_label(),
            candidate.label()
        );
        for effect in effects_for(candidate) {
            dispatcher.dispatch(effect.into());
        }
    }
}

impl Default for CommandPaletteMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CommandPaletteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::CommandPalette(CommandPaletteAction::Execute) => {
                Self::activate(state.command_palette.selected_index, state, dispatcher);
            }
            Action::CommandPalette(CommandPaletteAction::Click(index)) => {
                Self::activate(*index, state, dispatcher);
            }
            Action::CommandPalette(CommandPaletteAction::Close) => {
                Self::close_palette(state, dispatcher);
            }
            _ => {}
        }

        // Let the reducer reset the palette state
        true
    }
}
