//! Login form reducer
//!
//! Pure form editing. Credential checking and the view switch after a
//! successful sign-in live in the simulation middleware.

use crate::actions::LoginAction;
use crate::state::LoginFormState;

pub fn reduce_login(mut state: LoginFormState, action: &LoginAction) -> LoginFormState {
    // Input is frozen while the simulated round-trip is in flight
    let editing = matches!(
        action,
        LoginAction::Char(_)
            | LoginAction::Backspace
            | LoginAction::ClearField
            | LoginAction::NextField
            | LoginAction::PrevField
    );
    if editing && state.submitting {
        return state;
    }

    match action {
        LoginAction::Char(c) => {
            state.focused_value_mut().push(*c);
            state.last_error = None;
        }
        LoginAction::Backspace => {
            state.focused_value_mut().pop();
        }
        LoginAction::ClearField => {
            state.focused_value_mut().clear();
        }
        LoginAction::NextField => {
            state.focused_field = state.focused_field.next();
        }
        LoginAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }
        LoginAction::Submit => {
            if state.is_complete() {
                state.submitting = true;
                state.last_error = None;
            }
        }
        LoginAction::Succeeded(_) | LoginAction::Logout => {
            state.reset();
        }
        LoginAction::Failed(message) => {
            state.submitting = false;
            state.password.clear();
            state.last_error = Some(message.clone());
        }
    }

    state
}
