//! Command Palette actions
//!
//! Actions specific to the command palette overlay.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPaletteAction {
    // Navigation (translated from NavigationAction)
    /// Move the cursor to the next candidate (wraps)
    NavigateNext,
    /// Move the cursor to the previous candidate (wraps)
    NavigatePrev,

    // Text input (translated from TextInputAction)
    /// Character typed into search field
    Char(char),
    /// Backspace pressed in search field
    Backspace,
    /// Clear entire query
    Clear,

    // Pointer (translated from PointerAction)
    /// Pointer over the candidate at this index
    Hover(usize),
    /// Candidate at this index clicked
    Click(usize),

    /// Close the palette without dispatch
    Close,
    /// Activate the candidate under the cursor
    Execute,
}
