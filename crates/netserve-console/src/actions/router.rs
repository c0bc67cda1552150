//! Route navigation actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterAction {
    /// Switch the dashboard to this path
    Navigate(String),
    /// Return to the previous path
    Back,
}
