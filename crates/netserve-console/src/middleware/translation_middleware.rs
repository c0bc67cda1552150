//! Input Translation Middleware
//!
//! Generic input actions (`Navigate`, `TextInput`, `Pointer`) mean different
//! things on different screens. This middleware asks the top view of the
//! stack to translate them and re-dispatches the result, so the translated
//! action runs through the full chain. Only the top view is asked: a view
//! buried under an overlay never sees input.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(action: &Action, state: &AppState) -> Option<Action> {
        let view = state.view_stack.last()?;
        match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::TextInput(input) => view.translate_text_input(input.clone()),
            Action::Pointer(pointer) => {
                if view.capabilities(state).accepts_pointer() {
                    view.translate_pointer(*pointer, state)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for TranslationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(
            action,
            Action::Navigate(_) | Action::TextInput(_) | Action::Pointer(_)
        ) {
            return true;
        }

        match Self::translate(action, state) {
            Some(translated) => {
                log::debug!(
                    "TranslationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Input not handled by active view: {:?}", action),
        }

        // Generic input never reaches the reducer
        false
    }
}
