//! Router State

use crate::palette::catalog::OVERVIEW_PATH;

/// Current dashboard route with a back-history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    pub current: String,
    pub history: Vec<String>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current: OVERVIEW_PATH.to_string(),
            history: Vec::new(),
        }
    }
}

impl RouterState {
    /// Move to `path`, remembering the current route
    ///
    /// Navigating to the route already shown leaves history untouched.
    pub fn navigate(&mut self, path: &str) {
        if self.current == path {
            return;
        }
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push(previous);
    }

    /// Return to the previous route; returns false when there is none
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
