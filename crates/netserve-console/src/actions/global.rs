//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::{KeyEvent, MouseEvent};

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Raw mouse event (before translation)
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Close the current view (pop from stack)
    Close,
    /// Quit the application
    Quit,
    /// Push a new view onto the stack
    PushView(Box<dyn View>),
    /// Replace entire view stack with new view
    ReplaceView(Box<dyn View>),
}
