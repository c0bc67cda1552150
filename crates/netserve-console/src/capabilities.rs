//! View capability system
//!
//! Views declare what kind of input they take, and the keyboard and pointer
//! middleware route raw events by those flags instead of by view type.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Printable keys go to an input field instead of the keymap
        const TEXT_INPUT = 1 << 0;

        /// Arrow keys move a cursor over a list of items
        const ITEM_NAVIGATION = 1 << 1;

        /// Mouse hover and click over items are meaningful
        const POINTER = 1 << 2;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn accepts_pointer(self) -> bool {
        self.contains(Self::POINTER)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
