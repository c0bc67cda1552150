//! Text input actions
//!
//! Emitted by the keyboard middleware while the top view has the TEXT_INPUT
//! capability; the login form and the palette query each translate them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    Backspace,
    /// Ctrl+U or Super+Backspace
    ClearLine,
    Escape,
    /// Enter
    Confirm,
}
