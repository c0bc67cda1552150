//! Command Palette State

/// Command palette state
///
/// Every field returns to its default whenever the palette closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPaletteState {
    pub query: String,         // Search query
    pub selected_index: usize, // Cursor into the merged candidate list
    pub scroll_offset: usize,  // First candidate shown in the results window
}

impl CommandPaletteState {
    /// Forget the query and put the cursor back on the first candidate
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}
