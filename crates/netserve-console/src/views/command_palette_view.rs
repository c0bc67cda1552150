use crate::actions::{Action, CommandPaletteAction, NavigationAction, PointerAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::palette::cursor::follow_cursor;
use crate::palette::filter_and_merge;
use crate::state::AppState;
use crate::view_models::CommandPaletteViewModel;
use crate::views::{screen_layout, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Command palette view - searchable launcher for pages, commands and clients
#[derive(Debug, Clone)]
pub struct CommandPaletteView;

impl CommandPaletteView {
    pub fn new() -> Self {
        Self
    }
}

/// Areas of the floating palette inside the view body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub popup: Rect,
    pub input: Rect,
    pub results: Rect,
    pub details: Rect,
}

/// Centered popup (70% width, 60% height) split into input, results and details
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let popup_width = (area.width * 70 / 100).min(100);
    let popup_height = (area.height * 60 / 100).min(30);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    let inner = popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [input, results, details] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    PaletteLayout {
        popup,
        input,
        results,
        details,
    }
}

/// Height of the results window for a terminal of `viewport` size
pub fn results_rows(viewport: Rect) -> usize {
    let (body, _) = screen_layout(viewport);
    palette_layout(body).results.height as usize
}

impl View for CommandPaletteView {
    fn view_id(&self) -> ViewId {
        ViewId::CommandPalette
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
            | PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::POINTER
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CommandPaletteAction::NavigateNext,
            NavigationAction::Previous => CommandPaletteAction::NavigatePrev,
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CommandPaletteAction::Char(c),
            TextInputAction::Backspace => CommandPaletteAction::Backspace,
            TextInputAction::ClearLine => CommandPaletteAction::Clear,
            TextInputAction::Escape => CommandPaletteAction::Close,
            TextInputAction::Confirm => CommandPaletteAction::Execute,
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_pointer(&self, pointer: PointerAction, state: &AppState) -> Option<Action> {
        let (body, _) = screen_layout(state.viewport);
        let results = palette_layout(body).results;
        let (column, row) = pointer.position();

        if column < results.x
            || column >= results.right()
            || row < results.y
            || row >= results.bottom()
        {
            return None;
        }

        // Same window the view model renders
        let palette = &state.command_palette;
        let offset = follow_cursor(
            palette.scroll_offset,
            palette.selected_index,
            results.height as usize,
        );
        let index = offset + (row - results.y) as usize;
        let total = filter_and_merge(&palette.query, &state.data.clients).len();
        if index >= total {
            return None;
        }

        let action = match pointer {
            PointerAction::Hover { .. } => CommandPaletteAction::Hover(index),
            PointerAction::Click { .. } => CommandPaletteAction::Click(index),
        };
        Some(Action::CommandPalette(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CommandPalette(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Pointer(_)
                | Action::Global(_)
        )
    }
}

/// Render the command palette as a centered floating panel
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let layout = palette_layout(area);
    let vm = CommandPaletteViewModel::from_state(state, layout.results.height as usize);

    // Dim whatever is underneath
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    f.render_widget(Clear, layout.popup);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint().bold()),
        Span::styled(" open  ", theme.muted()),
        Span::styled("↑/↓", theme.key_hint().bold()),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled("/", theme.muted()),
        Span::styled(vm.footer_hints.toggle.as_str(), theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let title = format!(" Command Palette ({} matches) ", vm.total_matches);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, layout.popup);

    let input_text = if vm.input_is_empty {
        Line::from(Span::styled(
            "Search pages, commands or clients...",
            theme.muted().italic(),
        ))
    } else {
        Line::from(vec![
            Span::styled(vm.input_text.as_str(), theme.text()),
            Span::styled("▏", theme.accent()),
        ])
    };
    let input = Paragraph::new(input_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .style(theme.panel_background()),
    );
    f.render_widget(input, layout.input);

    if vm.visible_rows.is_empty() {
        let no_results = Paragraph::new("No matches")
            .style(theme.muted())
            .alignment(Alignment::Center);
        f.render_widget(no_results, layout.results);
    } else {
        let rows: Vec<Row> = vm
            .visible_rows
            .iter()
            .map(|row_vm| {
                let mut text_style = Style::default().fg(row_vm.fg_color);
                if row_vm.is_selected {
                    text_style = text_style.add_modifier(Modifier::BOLD);
                }

                Row::new(vec![
                    Cell::from(format!("{}{}", row_vm.indicator, row_vm.icon)).style(text_style),
                    Cell::from(row_vm.label.clone()).style(text_style),
                    Cell::from(row_vm.kind.clone()).style(theme.muted()),
                ])
                .style(Style::default().bg(row_vm.bg_color))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(10),
            ],
        )
        .style(theme.panel_background());
        f.render_widget(table, layout.results);
    }

    if let Some(details) = &vm.selected_details {
        let details = Paragraph::new(Line::from(Span::styled(
            details.as_str(),
            theme.text_secondary(),
        )))
        .wrap(Wrap { trim: false })
        .style(theme.panel_background());
        f.render_widget(details, layout.details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::command_palette_reducer::reduce_command_palette;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn palette_state(query: &str) -> AppState {
        let mut state = AppState::default();
        state.view_stack = vec![
            Box::new(crate::views::DashboardView::new()),
            Box::new(CommandPaletteView::new()),
        ];
        state.viewport = Rect::new(0, 0, 100, 30);
        state.command_palette.query = query.to_string();
        state
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_filtered_candidates() {
        let state = palette_state("tick");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| crate::views::render(&state, f.area(), f))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Command Palette (1 matches)"));
        assert!(text.contains("Ticket Manager"));
        assert!(text.contains("[Page]"));
        assert!(text.contains("Go to /tickets"));
    }

    #[test]
    fn test_renders_empty_result_message() {
        let state = palette_state("zzzz");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| crate::views::render(&state, f.area(), f))
            .unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("No matches"));
    }

    #[test]
    fn test_pointer_maps_rows_to_candidate_indices() {
        let state = palette_state("an");
        let view = CommandPaletteView::new();
        let results = palette_layout(screen_layout(state.viewport).0).results;

        let click = view.translate_pointer(
            PointerAction::Click {
                column: results.x + 1,
                row: results.y + 1,
            },
            &state,
        );
        assert!(matches!(
            click,
            Some(Action::CommandPalette(CommandPaletteAction::Click(1)))
        ));

        let hover = view.translate_pointer(
            PointerAction::Hover {
                column: results.x,
                row: results.y + 5,
            },
            &state,
        );
        assert!(matches!(
            hover,
            Some(Action::CommandPalette(CommandPaletteAction::Hover(5)))
        ));
    }

    #[test]
    fn test_pointer_below_last_candidate_is_ignored() {
        let state = palette_state("tick");
        let view = CommandPaletteView::new();
        let results = palette_layout(screen_layout(state.viewport).0).results;

        let below = PointerAction::Click {
            column: results.x,
            row: results.y + 1,
        };
        assert!(view.translate_pointer(below, &state).is_none());

        let outside = PointerAction::Click { column: 0, row: 0 };
        assert!(view.translate_pointer(outside, &state).is_none());
    }

    #[test]
    fn test_accepts_only_palette_related_actions() {
        let view = CommandPaletteView::new();
        assert!(view.accepts_action(&Action::CommandPalette(CommandPaletteAction::Close)));
        assert!(!view.accepts_action(&Action::Report(crate::actions::ReportAction::Generate)));
        assert!(!view.accepts_action(&Action::Router(crate::actions::RouterAction::Back)));
    }

    #[test]
    fn test_hover_then_click_on_scrolled_list_hits_same_candidate() {
        let mut state = palette_state("");
        state.viewport = Rect::new(0, 0, 100, 24);
        let visible = results_rows(state.viewport);
        assert_eq!(visible, 6);

        let clients = state.data.clients.clone();
        for _ in 0..10 {
            state.command_palette = reduce_command_palette(
                state.command_palette,
                &CommandPaletteAction::NavigateNext,
                &clients,
                visible,
            );
        }
        assert_eq!(state.command_palette.selected_index, 10);

        let view = CommandPaletteView::new();
        let results = palette_layout(screen_layout(state.viewport).0).results;
        let (column, row) = (results.x + 1, results.y);

        let hovered = match view.translate_pointer(PointerAction::Hover { column, row }, &state) {
            Some(Action::CommandPalette(CommandPaletteAction::Hover(index))) => index,
            other => panic!("Expected hover, got {other:?}"),
        };
        assert_eq!(hovered, 5);

        state.command_palette = reduce_command_palette(
            state.command_palette,
            &CommandPaletteAction::Hover(hovered),
            &clients,
            visible,
        );

        let clicked = view.translate_pointer(PointerAction::Click { column, row }, &state);
        assert!(matches!(
            clicked,
            Some(Action::CommandPalette(CommandPaletteAction::Click(index))) if index == hovered
        ));

        // The rendered window agrees with the hit-test
        let vm = CommandPaletteViewModel::from_state(&state, visible);
        assert_eq!(vm.offset, 5);
        assert!(vm.visible_rows[0].is_selected);
        assert_eq!(vm.visible_rows[0].label, "Analytics");
    }
}
