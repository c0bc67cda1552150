//! View model for the command palette
//!
//! Pre-computes the visible candidate window, row styling and footer hints so
//! that rendering and pointer hit-testing agree on what is where.

use crate::command_id::CommandId;
use crate::palette::cursor::follow_cursor;
use crate::palette::{filter_and_merge, Candidate, ENTITY_LIST_PATH};
use crate::state::AppState;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct CommandPaletteViewModel {
    /// Number of candidates matching the query
    pub total_matches: usize,
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Index of the first visible candidate
    pub offset: usize,
    /// Candidates inside the visible window
    pub visible_rows: Vec<CandidateRow>,
    /// One-line description of the candidate under the cursor
    pub selected_details: Option<String>,
    pub footer_hints: FooterHints,
}

#[derive(Debug, Clone)]
pub struct FooterHints {
    /// Shortcut that toggles the palette (e.g., "Ctrl+K")
    pub toggle: String,
}

#[derive(Debug, Clone)]
pub struct CandidateRow {
    pub is_selected: bool,
    /// Selection indicator ("> " or "  ")
    pub indicator: &'static str,
    pub icon: &'static str,
    pub label: String,
    /// Kind tag shown right-aligned, e.g. "[Command]"
    pub kind: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

impl CommandPaletteViewModel {
    /// Build the view model for a results area `visible` rows tall
    pub fn from_state(state: &AppState, visible: usize) -> Self {
        let theme = &state.theme;
        let palette = &state.command_palette;
        let candidates = filter_and_merge(&palette.query, &state.data.clients);

        let selected = palette.selected_index;
        // A resize can leave the stored window without the cursor
        let offset = follow_cursor(palette.scroll_offset, selected, visible);

        let visible_rows = candidates
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, candidate)| {
                let is_selected = idx == selected;
                let (fg_color, bg_color) = if is_selected {
                    (theme.active_fg, theme.selected_bg)
                } else {
                    (theme.text_primary, Color::Reset)
                };
                CandidateRow {
                    is_selected,
                    indicator: if is_selected { "> " } else { "  " },
                    icon: candidate.icon().glyph(),
                    label: candidate.label().to_string(),
                    kind: format!("[{}]", candidate.kind_label()),
                    fg_color,
                    bg_color,
                }
            })
            .collect();

        let footer_hints = FooterHints {
            toggle: state
                .keymap
                .hint_for_command(CommandId::CommandPaletteOpen)
                .unwrap_or("Ctrl+K")
                .to_string(),
        };

        Self {
            total_matches: candidates.len(),
            input_text: palette.query.clone(),
            input_is_empty: palette.query.is_empty(),
            offset,
            visible_rows,
            selected_details: candidates.get(selected).map(describe),
            footer_hints,
        }
    }
}

/// Short description of what activating `candidate` does
fn describe(candidate: &Candidate) -> String {
    match candidate {
        Candidate::Navigation(target) => format!("Go to {}", target.path),
        Candidate::Command(command) => match &command.path {
            Some(path) => format!("Run '{}' and open {}", command.action, path),
            None => format!("Run '{}'", command.action),
        },
        Candidate::Entity(record) => {
            format!("Client {} - opens {}", record.entity_id, ENTITY_LIST_PATH)
        }
    }
}
