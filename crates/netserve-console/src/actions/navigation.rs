//! Navigation actions - shared across screens
//!
//! Generic up/down movement that views translate into their own actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item or field (down arrow, Tab)
    Next,
    /// Previous item or field (up arrow, Shift+Tab)
    Previous,
}
