//! Cyclic cursor arithmetic over a list of `len` candidates.
//!
//! Both moves wrap modulo `len` and pin the cursor to 0 when the list is
//! empty.

pub fn next_index(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor.min(len - 1) + 1) % len
}

pub fn previous_index(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor.min(len - 1) + len - 1) % len
}

/// Scroll a window of `visible` rows starting at `offset` just far enough
/// to contain `selected`. A cursor already inside the window leaves it put.
pub fn follow_cursor(offset: usize, selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}
