//! Pointer actions - mouse input in terminal cell coordinates

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer moved over the cell
    Hover { column: u16, row: u16 },
    /// Left button pressed on the cell
    Click { column: u16, row: u16 },
}

impl PointerAction {
    /// Cell the pointer is on, as (column, row)
    pub fn position(self) -> (u16, u16) {
        match self {
            Self::Hover { column, row } | Self::Click { column, row } => (column, row),
        }
    }
}
