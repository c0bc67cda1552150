//! PointerMiddleware - turns raw mouse events into pointer actions
//!
//! Only movement and left-button presses are meaningful; the active view
//! maps the cell position to one of its own actions later on.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::actions::{Action, GlobalAction, PointerAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct PointerMiddleware;

impl PointerMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn to_pointer(event: &MouseEvent) -> Option<PointerAction> {
        let (column, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Moved => Some(PointerAction::Hover { column, row }),
            MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Click { column, row }),
            _ => None,
        }
    }
}

impl Default for PointerMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PointerMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::Mouse(event)) = action else {
            return true;
        };

        if let Some(pointer) = Self::to_pointer(event) {
            dispatcher.dispatch(Action::Pointer(pointer));
        }
        false
    }
}
