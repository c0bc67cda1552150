//! Command palette reducer
//!
//! Handles CommandPalette-specific actions. This reducer only processes
//! `CommandPaletteAction`, so it doesn't need to check if the palette is
//! open - the view stack gating in the keyboard middleware does that.

use crate::actions::CommandPaletteAction;
use crate::domain_models::ClientEntity;
use crate::palette::cursor::{follow_cursor, next_index, previous_index};
use crate::palette::filter_and_merge;
use crate::state::CommandPaletteState;

/// Reducer for command palette state.
///
/// `entities` is the live entity collection the candidate list is derived
/// from; the cursor always wraps against the current candidate count.
/// `visible` is the height of the results window: keyboard moves scroll it
/// just enough to keep the cursor in view, hover never scrolls it.
pub fn reduce_command_palette(
    mut state: CommandPaletteState,
    action: &CommandPaletteAction,
    entities: &[ClientEntity],
    visible: usize,
) -> CommandPaletteState {
    match action {
        // Any query mutation puts the cursor back on the top match
        CommandPaletteAction::Char(c) => {
            state.query.push(*c);
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        CommandPaletteAction::Backspace => {
            state.query.pop();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        CommandPaletteAction::Clear => {
            // Clear query but keep palette open
            state.query.clear();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        // Activation and cancel both close the palette; the middleware
        // dispatches effects from the pre-reduce state
        CommandPaletteAction::Close
        | CommandPaletteAction::Execute
        | CommandPaletteAction::Click(_) => {
            state.reset();
        }

        CommandPaletteAction::NavigateNext => {
            let len = filter_and_merge(&state.query, entities).len();
            state.selected_index = next_index(state.selected_index, len);
            state.scroll_offset = follow_cursor(state.scroll_offset, state.selected_index, visible);
        }

        CommandPaletteAction::NavigatePrev => {
            let len = filter_and_merge(&state.query, entities).len();
            state.selected_index = previous_index(state.selected_index, len);
            state.scroll_offset = follow_cursor(state.scroll_offset, state.selected_index, visible);
        }

        // The hovered row is already on screen, so the window stays put
        CommandPaletteAction::Hover(index) => {
            let len = filter_and_merge(&state.query, entities).len();
            if *index < len {
                state.selected_index = *index;
            }
        }
    }

    state
}
