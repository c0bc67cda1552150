//! Login screen and session actions

use crate::domain_models::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Character typed into the focused field
    Char(char),
    /// Backspace pressed in the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Move focus to the next field (Tab)
    NextField,
    /// Move focus to the previous field (Shift+Tab)
    PrevField,
    /// Submit the form (Enter)
    Submit,
    /// Simulated authentication accepted the credentials
    Succeeded(Operator),
    /// Simulated authentication rejected the credentials
    Failed(String),
    /// Sign out and return to the login screen
    Logout,
}
