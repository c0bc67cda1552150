use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod command_palette_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod pointer_middleware;
pub mod simulation_middleware;
pub mod translation_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where side effects live: translating raw input, turning
/// palette activation into router/status bar actions, and spawning the
/// simulated login and report tasks.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
